//! Human-readable output formatter.
//!
//! Formats lint results for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{LintResult, RuleId, RuleRegistry};
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// Whether to list undetermined rules as well.
    pub show_undetermined: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            show_undetermined: false,
        }
    }

    /// Also list rules that could not be evaluated.
    pub fn with_undetermined(mut self, show: bool) -> Self {
        self.show_undetermined = show;
        self
    }

    fn rule_names(ids: &[RuleId]) -> String {
        let registry = RuleRegistry::builtin();
        ids.iter()
            .map(|id| match registry.get(id) {
                Some(rule) => rule.name().to_string(),
                None => id.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn path_style(&self) -> Style {
        if self.use_color {
            Style::new().bold().force_styling(true)
        } else {
            Style::new().force_styling(false)
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, results: &[LintResult], writer: &mut W) -> std::io::Result<()> {
        let style = self.path_style();
        let mut failing_files = 0;
        let mut failing_rules = 0;

        for result in results {
            if !result.failed.is_empty() {
                failing_files += 1;
                failing_rules += result.failed.len();
                writeln!(
                    writer,
                    "{}: {}",
                    style.apply_to(result.path.display()),
                    Self::rule_names(&result.failed)
                )?;
            }

            if self.show_undetermined && !result.undetermined.is_empty() {
                writeln!(
                    writer,
                    "   = undetermined in {}: {}",
                    result.path.display(),
                    Self::rule_names(&result.undetermined)
                )?;
            }
        }

        // Summary
        if failing_files > 0 {
            writeln!(
                writer,
                "\nFound {} failing rule(s) in {} file(s)",
                failing_rules, failing_files
            )?;
        }

        Ok(())
    }
}
