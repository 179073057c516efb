//! Per-file lint results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::rule::RuleId;

/// Rules a single file failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    /// The file that was checked.
    pub path: PathBuf,
    /// Failed rule ids, in canonical order.
    pub failed: Vec<RuleId>,
    /// Rules that could not be decided, in canonical order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub undetermined: Vec<RuleId>,
}

impl LintResult {
    /// Create an empty result for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            failed: Vec::new(),
            undetermined: Vec::new(),
        }
    }

    /// Path of the checked file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether every selected rule passed or was undetermined.
    pub fn is_passing(&self) -> bool {
        self.failed.is_empty()
    }
}
