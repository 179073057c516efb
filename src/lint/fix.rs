//! Automatic fix application.
//!
//! Fixers compute a corrected [`Document`]; writing it back is left to the
//! runner. Every fixer is idempotent: applied to a document that already
//! satisfies the rules it repairs, it returns the document unchanged.

use std::collections::HashSet;
use std::path::PathBuf;

use serde_yaml::Value;

use super::context::FileStat;
use super::rule::LintRule;
use super::rules::{
    created_is_consistent, modified_is_consistent, stored_timestamp, CREATED_FIELD,
    MODIFIED_FIELD,
};
use crate::matter::{format_timestamp, Document};

/// A corrective action.
///
/// Several rules may share one fixer; the fixer is the dedup key when a
/// file fails more than one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixer {
    /// Put an empty front matter block in front of the body.
    AddMatterMarkers,
    /// Write the file's birthtime into `created`.
    UpdateCreatedMatter,
    /// Write the file's mtime into `modified`.
    UpdateModifiedMatter,
}

impl Fixer {
    /// Stable name of the fixer.
    pub fn name(&self) -> &'static str {
        match self {
            Fixer::AddMatterMarkers => "add-matter-markers",
            Fixer::UpdateCreatedMatter => "update-created-matter",
            Fixer::UpdateModifiedMatter => "update-modified-matter",
        }
    }

    /// Apply the fixer to a document.
    pub fn apply(&self, doc: &Document, stat: &FileStat) -> Document {
        match self {
            Fixer::AddMatterMarkers => add_matter_markers(doc),
            Fixer::UpdateCreatedMatter => update_created_matter(doc, stat),
            Fixer::UpdateModifiedMatter => update_modified_matter(doc, stat),
        }
    }
}

impl std::fmt::Display for Fixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a rule's failures are repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixerBinding {
    /// Repaired by this fixer.
    HasFixer(Fixer),
    /// Reported only; nothing to repair automatically.
    NoFixer,
    /// Broken structure that must be repaired by hand.
    Unfixable,
}

impl FixerBinding {
    /// The bound fixer, if any.
    pub fn fixer(&self) -> Option<Fixer> {
        match self {
            FixerBinding::HasFixer(fixer) => Some(*fixer),
            FixerBinding::NoFixer | FixerBinding::Unfixable => None,
        }
    }
}

/// The result of applying fixes to one file.
#[derive(Debug, Clone)]
pub struct FixResult {
    /// The file that was fixed.
    pub path: PathBuf,
    /// The corrected document.
    pub document: Document,
    /// The corrected document as text.
    pub serialized: String,
    /// Fixers that ran, in order.
    pub fixers_applied: Vec<Fixer>,
    /// Whether the file on disk was replaced.
    pub written: bool,
}

impl FixResult {
    /// Whether the fix changed the file contents.
    pub fn changed(&self) -> bool {
        self.serialized != self.document.raw
    }
}

/// Mark both delimiters present around the unchanged body.
pub fn add_matter_markers(doc: &Document) -> Document {
    let mut fixed = doc.clone();
    fixed.start_delimiter = true;
    fixed.end_delimiter = true;
    fixed
}

/// Set `created` to the birthtime unless it already holds an earlier or
/// equal valid timestamp.
pub fn update_created_matter(doc: &Document, stat: &FileStat) -> Document {
    match stored_timestamp(doc, CREATED_FIELD) {
        Some(stored) if created_is_consistent(stored, stat.created) => doc.clone(),
        _ => with_timestamp(doc, CREATED_FIELD, stat.created),
    }
}

/// Set `modified` to the mtime unless it already holds a later or equal
/// valid timestamp.
pub fn update_modified_matter(doc: &Document, stat: &FileStat) -> Document {
    match stored_timestamp(doc, MODIFIED_FIELD) {
        Some(stored) if modified_is_consistent(stored, stat.modified) => doc.clone(),
        _ => with_timestamp(doc, MODIFIED_FIELD, stat.modified),
    }
}

fn with_timestamp(doc: &Document, field: &str, at: chrono::DateTime<chrono::Utc>) -> Document {
    let mut fixed = doc.clone();
    fixed.set_field(field, Value::String(format_timestamp(at)));
    fixed
}

/// The distinct fixers for a set of failing rules, in rule order.
pub fn plan_fixers<'r>(rules: impl IntoIterator<Item = &'r dyn LintRule>) -> Vec<Fixer> {
    let mut seen = HashSet::new();
    rules
        .into_iter()
        .filter_map(|rule| rule.fixer().fixer())
        .filter(|fixer| seen.insert(*fixer))
        .collect()
}
