//! JSON output formatter.
//!
//! Formats lint results as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{LintResult, RuleId, RuleRegistry, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<JsonFile>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    failed: Vec<JsonRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    undetermined: Vec<JsonRule>,
}

#[derive(Serialize)]
struct JsonRule {
    rule_id: RuleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    failing_files: usize,
    failed_rules: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn rules(ids: &[RuleId]) -> Vec<JsonRule> {
        let registry = RuleRegistry::builtin();
        ids.iter()
            .map(|id| {
                let rule = registry.get(id);
                JsonRule {
                    rule_id: id.clone(),
                    name: rule.map(|r| r.name().to_string()),
                    severity: rule.map(|r| r.severity()),
                }
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, results: &[LintResult], writer: &mut W) -> std::io::Result<()> {
        let files: Vec<_> = results
            .iter()
            .map(|r| JsonFile {
                path: r.path.display().to_string(),
                failed: Self::rules(&r.failed),
                undetermined: Self::rules(&r.undetermined),
            })
            .collect();

        let summary = JsonSummary {
            files: results.len(),
            failing_files: results.iter().filter(|r| !r.failed.is_empty()).count(),
            failed_rules: results.iter().map(|r| r.failed.len()).sum(),
        };

        let output = JsonOutput { files, summary };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
