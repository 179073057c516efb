//! Front matter documents.
//!
//! A front matter block is a YAML mapping between two `---` lines at the very
//! top of a text file:
//!
//! ```text
//! ---
//! created: 2024-03-01T09:00:00.000Z
//! modified: 2024-03-02T17:45:12.000Z
//! ---
//! Body text follows.
//! ```
//!
//! This module provides:
//! - [`Document`] - a parsed file: delimiter flags, metadata mapping and body
//! - [`serialize`] / [`stringify`] - the canonical way back to text
//! - [`timestamp`] - the stored timestamp format
//!
//! # Example
//!
//! ```
//! use fmlint::matter::{serialize, Document, SerializeOptions};
//!
//! let doc = Document::parse("---\ntitle: Notes\n---\nHello\n");
//! assert!(doc.has_matter());
//! assert_eq!(doc.body, "Hello\n");
//!
//! let text = serialize(&doc, &SerializeOptions::default()).unwrap();
//! assert_eq!(text, "---\ntitle: Notes\n---\nHello\n");
//! ```

pub mod serialize;
pub mod timestamp;

pub use serialize::{serialize, stringify, CollectionStyle, SerializeOptions};
pub use timestamp::{format_timestamp, from_system_time, parse_timestamp};

use serde_yaml::{Mapping, Value};

/// The marker line that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

/// A text document with an optional front matter block.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The text the document was parsed from.
    pub raw: String,
    /// Front matter fields, in source order.
    pub metadata: Mapping,
    /// Everything after the closing delimiter line, or the whole text when
    /// there is no complete front matter block.
    pub body: String,
    /// First line is exactly the delimiter.
    pub start_delimiter: bool,
    /// A later line is exactly the delimiter.
    pub end_delimiter: bool,
    /// Parse error of the front matter block, if any.
    pub yaml_error: Option<String>,
}

impl Document {
    /// Parse raw text into a document.
    ///
    /// Never fails: a broken YAML block is recorded in `yaml_error` and
    /// leaves `metadata` empty, so lint rules can report it.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lines: Vec<&str> = raw.split_inclusive('\n').collect();

        let start_delimiter = lines.first().is_some_and(|line| is_delimiter(line));
        let end_index = lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| is_delimiter(line))
            .map(|(index, _)| index);
        let end_delimiter = end_index.is_some();

        let (metadata, body, yaml_error) = match end_index {
            Some(end) if start_delimiter => {
                let matter: String = lines[1..end].concat();
                let body_offset: usize = lines[..=end].iter().map(|line| line.len()).sum();
                let body = raw[body_offset..].to_string();
                match parse_mapping(&matter) {
                    Ok(metadata) => (metadata, body, None),
                    Err(message) => (Mapping::new(), body, Some(message)),
                }
            }
            _ => (Mapping::new(), raw.clone(), None),
        };

        Self {
            raw,
            metadata,
            body,
            start_delimiter,
            end_delimiter,
            yaml_error,
        }
    }

    /// Both delimiters are present.
    pub fn has_matter(&self) -> bool {
        self.start_delimiter && self.end_delimiter
    }

    /// The line ending of the text: `\r\n` when its first line ends that
    /// way, `\n` otherwise.
    pub fn line_ending(&self) -> &'static str {
        match self.raw.find('\n') {
            Some(end) if self.raw[..end].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }

    /// The block is opened on the first line but never closed.
    ///
    /// Without an opening delimiter a later `---` line is ordinary body text,
    /// such as a setext heading underline or a horizontal rule.
    pub fn unclosed_matter(&self) -> bool {
        self.start_delimiter && !self.end_delimiter
    }

    /// Look up a field, treating null and empty strings as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key).filter(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
    }

    /// Set a field, keeping its position if it already exists.
    ///
    /// Writing a field implies a front matter block, so both delimiters are
    /// marked present.
    pub fn set_field(&mut self, key: &str, value: Value) {
        self.metadata.insert(Value::String(key.to_string()), value);
        self.start_delimiter = true;
        self.end_delimiter = true;
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(|c| c == '\n' || c == '\r') == DELIMITER
}

fn parse_mapping(matter: &str) -> std::result::Result<Mapping, String> {
    if matter.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(matter).map_err(|e| e.to_string())? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(format!(
            "front matter must be a mapping, found {}",
            value_kind(&other)
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_matter() {
        let doc = Document::parse("---\nfoo: bar\n---\nHello World!\n");
        assert!(doc.start_delimiter);
        assert!(doc.end_delimiter);
        assert_eq!(doc.body, "Hello World!\n");
        assert_eq!(doc.field("foo"), Some(&Value::String("bar".into())));
        assert!(doc.yaml_error.is_none());
    }

    #[test]
    fn parses_empty_matter() {
        let doc = Document::parse("---\n---\nHello\n");
        assert!(doc.has_matter());
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "Hello\n");
    }

    #[test]
    fn no_delimiters_keeps_whole_text_as_body() {
        let doc = Document::parse("Hello World!\n");
        assert!(!doc.start_delimiter);
        assert!(!doc.end_delimiter);
        assert_eq!(doc.body, "Hello World!\n");
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn start_only_is_unclosed() {
        let doc = Document::parse("---\nfoo: bar\nHello\n");
        assert!(doc.start_delimiter);
        assert!(!doc.end_delimiter);
        assert!(doc.unclosed_matter());
        assert_eq!(doc.body, doc.raw);
    }

    #[test]
    fn end_only_is_body_text() {
        let doc = Document::parse("foo: bar\n---\nHello\n");
        assert!(!doc.start_delimiter);
        assert!(doc.end_delimiter);
        assert!(!doc.unclosed_matter());
        assert_eq!(doc.body, doc.raw);
    }

    #[test]
    fn delimiter_must_be_whole_line() {
        let doc = Document::parse("---\nfoo: ---bar\n----\n");
        assert!(doc.start_delimiter);
        assert!(!doc.end_delimiter);

        let doc = Document::parse(" ---\nfoo: bar\n---\n");
        assert!(!doc.start_delimiter);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let doc = Document::parse("---\r\nfoo: bar\r\n---\r\nBody\r\n");
        assert!(doc.has_matter());
        assert_eq!(doc.body, "Body\r\n");
        assert!(doc.field("foo").is_some());
    }

    #[test]
    fn detects_line_ending() {
        assert_eq!(Document::parse("a\r\nb\n").line_ending(), "\r\n");
        assert_eq!(Document::parse("a\nb\r\n").line_ending(), "\n");
        assert_eq!(Document::parse("no newline").line_ending(), "\n");
    }

    #[test]
    fn closing_delimiter_without_trailing_newline() {
        let doc = Document::parse("---\nfoo: bar\n---");
        assert!(doc.has_matter());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn duplicate_keys_record_yaml_error() {
        let doc = Document::parse("---\nfoo: 1\nfoo: 2\n---\nBody\n");
        assert!(doc.yaml_error.is_some());
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn non_mapping_matter_is_yaml_error() {
        let doc = Document::parse("---\n- a\n- b\n---\n");
        let message = doc.yaml_error.unwrap();
        assert!(message.contains("a sequence"));
    }

    #[test]
    fn field_treats_null_and_empty_as_absent() {
        let doc = Document::parse("---\ncreated:\nmodified: ''\n---\n");
        assert!(doc.field("created").is_none());
        assert!(doc.field("modified").is_none());
        assert!(doc.field("other").is_none());
    }

    #[test]
    fn set_field_appends_and_replaces_in_place() {
        let mut doc = Document::parse("---\nfoo: bar\ncreated: old\n---\n");
        doc.set_field("modified", Value::String("m".into()));
        doc.set_field("created", Value::String("c".into()));

        let keys: Vec<&str> = doc.metadata.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["foo", "created", "modified"]);
        assert_eq!(doc.field("created"), Some(&Value::String("c".into())));
    }

    #[test]
    fn set_field_marks_delimiters() {
        let mut doc = Document::parse("Body\n");
        doc.set_field("created", Value::String("c".into()));
        assert!(doc.has_matter());
    }
}
