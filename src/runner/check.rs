//! Lint passes over files and directories.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::FileFailure;
use crate::error::Result;
use crate::files;
use crate::lint::{self, FileStat, LintContext, LintResult, RuleId, RuleRegistry, RuleSet};
use crate::matter::Document;

/// What to scan and which rules to run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions to pick up when scanning a directory.
    pub extensions: Vec<String>,
    /// Rules to run; empty means every built-in rule.
    pub rules: Vec<RuleId>,
}

impl ScanOptions {
    /// Resolve the rule list against the built-in registry.
    pub fn rule_set(&self) -> Result<RuleSet<'static>> {
        let registry = RuleRegistry::builtin();
        if self.rules.is_empty() {
            Ok(registry.all())
        } else {
            registry.select(&self.rules)
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            rules: Vec::new(),
        }
    }
}

/// Results of checking a batch of files.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One entry per file that could be checked.
    pub results: Vec<LintResult>,
    /// Files that could not be read.
    pub failures: Vec<FileFailure>,
}

impl ScanReport {
    /// Results with at least one failed rule.
    pub fn failing(&self) -> impl Iterator<Item = &LintResult> {
        self.results.iter().filter(|r| !r.is_passing())
    }

    /// Whether every file was checked and passed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.failing().next().is_none()
    }
}

/// Read a file and its timestamps.
pub(crate) fn load(path: &Path) -> Result<(Document, FileStat)> {
    let raw = files::read_text(path)?;
    let stat = files::read_stat(path)?;
    Ok((Document::parse(raw), stat))
}

/// Run `rules` against one file.
pub fn check_file(path: &Path, rules: &RuleSet<'_>) -> Result<LintResult> {
    debug!("Checking {}", path.display());
    let (document, stat) = load(path)?;
    let ctx = LintContext::new(path, &document, Some(&stat));
    Ok(lint::evaluate(rules, &ctx))
}

/// Run `rules` against each path.
///
/// Every path gets exactly one entry, either in `results` or in `failures`.
pub fn check_files<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
    rules: &RuleSet<'_>,
) -> ScanReport {
    let mut report = ScanReport::default();
    for path in paths {
        let path = path.as_ref();
        match check_file(path, rules) {
            Ok(result) => report.results.push(result),
            Err(error) => {
                warn!("Could not check {}: {}", path.display(), error);
                report.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
    report
}

/// Check the files directly inside `dir`, keeping only failing results.
pub fn check_directory(
    dir: &Path,
    extensions: &[String],
    rules: &RuleSet<'_>,
) -> Result<ScanReport> {
    let paths: Vec<PathBuf> = files::list_files(dir, extensions)?;
    debug!("Found {} file(s) in {}", paths.len(), dir.display());

    let mut report = check_files(&paths, rules);
    report.results.retain(|r| !r.is_passing());
    Ok(report)
}
