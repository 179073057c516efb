//! Fix application and write-back.

use std::path::Path;

use tracing::{debug, warn};

use super::check::load;
use super::FileFailure;
use crate::error::{FmlintError, Result};
use crate::files;
use crate::lint::rules::{stored_timestamp, MODIFIED_FIELD};
use crate::lint::{
    plan_fixers, FileStat, FixResult, FixerBinding, LintResult, RuleId, RuleRegistry,
};
use crate::matter::{serialize, Document, SerializeOptions};

/// How fixes are written.
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Serializer settings for the rewritten front matter.
    pub serialize: SerializeOptions,
    /// Compute fixes without touching the disk.
    pub dry_run: bool,
}

/// What happened when fixing a single rule.
#[derive(Debug)]
pub enum FixOutcome {
    /// The rule flags structure that must be repaired by hand.
    Unfixable,
    /// The rule has nothing to apply.
    NoFixer,
    /// The corrected document, not yet written.
    Fixed(FixResult),
}

/// Results of fixing a batch of files.
#[derive(Debug, Default)]
pub struct FixReport {
    /// One entry per file that was processed.
    pub fixed: Vec<FixResult>,
    /// Files that could not be fixed.
    pub failures: Vec<FileFailure>,
}

impl FixReport {
    /// Number of files actually rewritten.
    pub fn written(&self) -> usize {
        self.fixed.iter().filter(|r| r.written).count()
    }
}

/// Refuse documents whose front matter cannot be rewritten safely.
fn ensure_fixable(path: &Path, document: &Document) -> Result<()> {
    if document.unclosed_matter() {
        return Err(FmlintError::Structural {
            path: path.to_path_buf(),
            rule: RuleId::new("FML000"),
        });
    }
    if let Some(message) = &document.yaml_error {
        return Err(FmlintError::InvalidYaml {
            path: path.to_path_buf(),
            message: message.clone(),
        });
    }
    Ok(())
}

/// Compute the fix for a single rule on one file.
///
/// Nothing is written; the caller decides what to do with the result.
pub fn apply_fix(path: &Path, rule_id: &RuleId, options: &SerializeOptions) -> Result<FixOutcome> {
    let rule = RuleRegistry::builtin()
        .get(rule_id)
        .ok_or_else(|| FmlintError::UnknownRule {
            id: rule_id.to_string(),
        })?;

    let fixer = match rule.fixer() {
        FixerBinding::Unfixable => return Ok(FixOutcome::Unfixable),
        FixerBinding::NoFixer => return Ok(FixOutcome::NoFixer),
        FixerBinding::HasFixer(fixer) => fixer,
    };

    let (document, stat) = load(path)?;
    ensure_fixable(path, &document)?;

    let fixed = fixer.apply(&document, &stat);
    let serialized = serialize(&fixed, options)?;
    Ok(FixOutcome::Fixed(FixResult {
        path: path.to_path_buf(),
        document: fixed,
        serialized,
        fixers_applied: vec![fixer],
        written: false,
    }))
}

/// Apply the fixers of every failed rule to one file and write it back.
///
/// Rules run in canonical order and each distinct fixer runs once. The file
/// is only rewritten when its text changes; its mtime is then set to the
/// stored `modified` value.
pub fn apply_all_fixes(path: &Path, failed: &[RuleId], options: &FixOptions) -> Result<FixResult> {
    let failing = RuleRegistry::builtin().select(failed)?;
    if let Some(rule) = failing
        .iter()
        .find(|r| r.fixer() == FixerBinding::Unfixable)
    {
        return Err(FmlintError::Structural {
            path: path.to_path_buf(),
            rule: rule.id(),
        });
    }

    let (document, stat) = load(path)?;
    let fixers = plan_fixers(failing.iter());
    if fixers.is_empty() {
        return Ok(FixResult {
            path: path.to_path_buf(),
            serialized: document.raw.clone(),
            document,
            fixers_applied: fixers,
            written: false,
        });
    }
    ensure_fixable(path, &document)?;

    let mut fixed = document;
    for fixer in &fixers {
        debug!("Applying {} to {}", fixer, path.display());
        fixed = fixer.apply(&fixed, &stat);
    }

    let serialized = serialize(&fixed, &options.serialize)?;
    let written = serialized != fixed.raw && !options.dry_run;
    if written {
        write_back(path, &fixed, &serialized, &stat)?;
    } else {
        debug!("Leaving {} untouched", path.display());
    }

    Ok(FixResult {
        path: path.to_path_buf(),
        document: fixed,
        serialized,
        fixers_applied: fixers,
        written,
    })
}

fn write_back(path: &Path, document: &Document, serialized: &str, stat: &FileStat) -> Result<()> {
    let mtime = stored_timestamp(document, MODIFIED_FIELD).unwrap_or(stat.modified);
    files::write_atomic(path, serialized, mtime)?;
    debug!("Wrote {} (mtime {})", path.display(), mtime);
    Ok(())
}

/// Apply [`apply_all_fixes`] to every failing result.
pub fn apply_all_fixes_to_files(results: &[LintResult], options: &FixOptions) -> FixReport {
    let mut report = FixReport::default();
    for result in results.iter().filter(|r| !r.is_passing()) {
        match apply_all_fixes(&result.path, &result.failed, options) {
            Ok(fixed) => report.fixed.push(fixed),
            Err(error) => {
                warn!("Could not fix {}: {}", result.path.display(), error);
                report.failures.push(FileFailure {
                    path: result.path.clone(),
                    error,
                });
            }
        }
    }
    report
}
