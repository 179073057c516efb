//! Lint output formatters.
//!
//! This module provides formatters for outputting lint results
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::LintResult;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    /// Look up a format by name, falling back to [`OutputFormat::Human`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Human,
        }
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format results to the given writer.
    fn format<W: Write>(&self, results: &[LintResult], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
