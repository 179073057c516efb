//! Canonical front matter serialization.
//!
//! Output is a pure function of the metadata, the body and the
//! [`SerializeOptions`] passed in, so a parse → serialize → parse cycle
//! reaches a fixed point after one pass.

use serde_yaml::{Mapping, Value};

use super::{Document, DELIMITER};
use crate::error::{FmlintError, Result};

/// How collections nested under a top-level key are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStyle {
    /// Nested collections on one line: `tags: [a,b]`.
    #[default]
    Flow,
    /// Plain YAML block style throughout.
    Block,
}

/// Options for turning metadata back into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Style for collections below the top level.
    pub collections: CollectionStyle,
    /// Drop the space after commas in flow collections.
    pub condense_flow: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            collections: CollectionStyle::Flow,
            condense_flow: true,
        }
    }
}

/// Serialize a document.
///
/// A document without a complete front matter block and without metadata is
/// returned as its body, byte for byte. Otherwise the block is written with
/// the document's own line ending.
pub fn serialize(doc: &Document, options: &SerializeOptions) -> Result<String> {
    if !doc.has_matter() && doc.metadata.is_empty() {
        return Ok(doc.body.clone());
    }
    render(&doc.body, &doc.metadata, options, doc.line_ending())
}

/// Render a front matter block followed by `body`, with `\n` line endings.
pub fn stringify(body: &str, metadata: &Mapping, options: &SerializeOptions) -> Result<String> {
    render(body, metadata, options, "\n")
}

fn render(
    body: &str,
    metadata: &Mapping,
    options: &SerializeOptions,
    newline: &str,
) -> Result<String> {
    let matter = render_mapping(metadata, options)?;
    let mut out = String::with_capacity(body.len() + matter.len() + 16);
    out.push_str(DELIMITER);
    out.push_str(newline);
    if newline == "\n" {
        out.push_str(&matter);
    } else {
        out.push_str(&matter.replace('\n', newline));
    }
    out.push_str(DELIMITER);
    out.push_str(newline);
    out.push_str(body);
    Ok(out)
}

fn render_mapping(metadata: &Mapping, options: &SerializeOptions) -> Result<String> {
    if metadata.is_empty() {
        return Ok(String::new());
    }
    if options.collections == CollectionStyle::Block {
        return to_yaml(metadata);
    }

    let mut out = String::new();
    for (key, value) in metadata {
        let flow = match value {
            Value::Sequence(_) | Value::Mapping(_) => flow_key(key)
                .zip(flow_value(value, options))
                .map(|(key, value)| format!("{}: {}\n", key, value)),
            _ => None,
        };
        match flow {
            Some(line) => out.push_str(&line),
            None => {
                let mut entry = Mapping::new();
                entry.insert(key.clone(), value.clone());
                out.push_str(&to_yaml(&entry)?);
            }
        }
    }
    Ok(out)
}

fn flow_key(key: &Value) -> Option<String> {
    match key {
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
        scalar => flow_scalar(scalar),
    }
}

fn flow_value(value: &Value, options: &SerializeOptions) -> Option<String> {
    let separator = if options.condense_flow { "," } else { ", " };
    match value {
        Value::Sequence(items) => {
            let items = items
                .iter()
                .map(|item| flow_value(item, options))
                .collect::<Option<Vec<_>>>()?;
            Some(format!("[{}]", items.join(separator)))
        }
        Value::Mapping(entries) => {
            let entries = entries
                .iter()
                .map(|(k, v)| Some(format!("{}: {}", flow_key(k)?, flow_value(v, options)?)))
                .collect::<Option<Vec<_>>>()?;
            Some(format!("{{{}}}", entries.join(separator)))
        }
        Value::Tagged(_) => None,
        scalar => flow_scalar(scalar),
    }
}

/// Render a scalar so it reads back unchanged inside a flow collection.
fn flow_scalar(value: &Value) -> Option<String> {
    let text = serde_yaml::to_string(value).ok()?;
    let text = text.trim_end_matches('\n');
    match value {
        Value::String(s) if needs_double_quotes(text) => serde_json::to_string(s).ok(),
        _ => Some(text.to_string()),
    }
}

fn needs_double_quotes(text: &str) -> bool {
    if text.starts_with('\'') || text.starts_with('"') {
        return false;
    }
    text.is_empty()
        || text.starts_with('|')
        || text.starts_with('>')
        || text.contains(|c| matches!(c, ',' | '[' | ']' | '{' | '}' | ':' | '#' | '\n'))
}

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| FmlintError::Serialize {
        message: e.to_string(),
    })
}
