//! Lint command implementation.
//!
//! Checks every matching file in a directory and, unless `--check` is given,
//! applies the fixes for the rules each file fails.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::error::{FmlintError, Result};
use crate::lint::{HumanFormatter, JsonFormatter, LintFormatter, LintResult, OutputFormat};
use crate::runner::{apply_all_fixes_to_files, check_directory, FixReport, ScanReport};
use crate::ui::{should_use_colors, UserInterface};

use super::{Command, CommandResult, EXIT_PATH_NOT_FOUND};

/// The lint command implementation.
pub struct LintCommand {
    dir: PathBuf,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(dir: &Path, args: LintArgs) -> Self {
        Self {
            dir: dir.to_path_buf(),
            args,
        }
    }

    /// Get the directory being linted.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Format results using the appropriate formatter.
    fn format_output(&self, results: &[LintResult], verbose: bool) -> String {
        let mut output = Vec::new();

        match self.args.output_format() {
            OutputFormat::Json => {
                let formatter = JsonFormatter::new();
                formatter.format(results, &mut output).ok();
            }
            OutputFormat::Human => {
                let formatter =
                    HumanFormatter::new(should_use_colors()).with_undetermined(verbose);
                formatter.format(results, &mut output).ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }

    fn report_scan(&self, report: &ScanReport, ui: &mut dyn UserInterface) {
        for failure in &report.failures {
            ui.error(&failure.error.to_string());
        }

        let human = self.args.output_format() == OutputFormat::Human;
        let failing: Vec<LintResult> = report.failing().cloned().collect();

        if !human {
            ui.report(self.format_output(&failing, false).trim_end());
            return;
        }

        if failing.is_empty() {
            ui.success("All files are linted & up to date!");
            return;
        }

        let header = if self.args.check {
            format!("These files fail lint checks in {}", self.dir.display())
        } else {
            format!("Applying these fixes to files in {}", self.dir.display())
        };
        ui.message(&header);

        let verbose = ui.output_mode().shows_detail();
        let output = self.format_output(&failing, verbose);
        for line in output.lines() {
            if line.starts_with("   = ") {
                ui.detail(line);
            } else {
                ui.message(line);
            }
        }
    }

    fn report_fixes(&self, report: &FixReport, ui: &mut dyn UserInterface) {
        for result in &report.fixed {
            let fixers: Vec<&str> = result.fixers_applied.iter().map(|f| f.name()).collect();
            if result.written {
                ui.detail(&format!("Fixed {}: {}", result.path.display(), fixers.join(", ")));
            } else if self.args.dry_run && !fixers.is_empty() {
                ui.detail(&format!(
                    "Would fix {}: {}",
                    result.path.display(),
                    fixers.join(", ")
                ));
            }
        }

        for failure in &report.failures {
            ui.error(&failure.error.to_string());
        }

        if self.args.output_format() != OutputFormat::Human {
            return;
        }
        if self.args.dry_run {
            let pending = report.fixed.iter().filter(|r| r.changed()).count();
            ui.success(&format!("Dry run: {} file(s) would be fixed", pending));
        } else if report.written() > 0 {
            ui.success(&format!("Fixed {} file(s)", report.written()));
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.dir.exists() {
            ui.error(&format!("Path does not exist: {}", self.dir.display()));
            return Ok(CommandResult::failure(EXIT_PATH_NOT_FOUND));
        }

        let rules = match self.args.scan_options().rule_set() {
            Ok(rules) => rules,
            Err(FmlintError::UnknownRule { id }) => {
                ui.error(&format!("Unknown lint rule: {}", id));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let scan = check_directory(&self.dir, &self.args.extensions, &rules)?;
        self.report_scan(&scan, ui);

        let has_failing = scan.failing().next().is_some();
        if self.args.check {
            return Ok(if has_failing || !scan.failures.is_empty() {
                CommandResult::failure(1)
            } else {
                CommandResult::success()
            });
        }

        let fixes = apply_all_fixes_to_files(&scan.results, &self.args.fix_options());
        self.report_fixes(&fixes, ui);

        if scan.failures.is_empty() && fixes.failures.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn setup_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(temp.path().join(name), contents).unwrap();
        }
        temp
    }

    #[test]
    fn lint_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = LintCommand::new(temp.path(), LintArgs::default());

        assert_eq!(cmd.dir(), temp.path());
        assert!(!cmd.args().check);
    }

    #[test]
    fn lint_missing_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = LintCommand::new(&temp.path().join("nowhere"), LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 128);
        assert!(ui.has_error("Path does not exist"));
    }

    #[test]
    fn lint_empty_dir_is_up_to_date() {
        let temp = TempDir::new().unwrap();
        let cmd = LintCommand::new(temp.path(), LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui
            .successes()
            .contains(&"All files are linted & up to date!".to_string()));
    }

    #[test]
    fn lint_fixes_files() {
        let temp = setup_dir(&[("note.md", "Hello World!\n")]);
        let cmd = LintCommand::new(temp.path(), LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Applying these fixes to files in"));
        assert!(ui.has_message("has-matter-markers"));
        assert!(ui.successes().contains(&"Fixed 1 file(s)".to_string()));

        let contents = fs::read_to_string(temp.path().join("note.md")).unwrap();
        assert!(contents.starts_with("---\ncreated: "));
        assert!(contents.ends_with("---\nHello World!\n"));

        // Second run finds nothing to do
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui
            .successes()
            .contains(&"All files are linted & up to date!".to_string()));
    }

    #[test]
    fn lint_check_mode_does_not_write() {
        let temp = setup_dir(&[("note.md", "Hello World!\n")]);
        let args = LintArgs {
            check: true,
            ..Default::default()
        };
        let cmd = LintCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("These files fail lint checks"));
        assert_eq!(
            fs::read_to_string(temp.path().join("note.md")).unwrap(),
            "Hello World!\n"
        );
    }

    #[test]
    fn lint_unknown_rule() {
        let temp = TempDir::new().unwrap();
        let args = LintArgs {
            rules: vec!["FML404".to_string()],
            ..Default::default()
        };
        let cmd = LintCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("FML404"));
    }

    #[test]
    fn lint_reports_unfixable_files() {
        let temp = setup_dir(&[("broken.md", "---\ntitle: [\n---\n")]);
        let cmd = LintCommand::new(temp.path(), LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("must be fixed by hand"));
    }

    #[test]
    fn lint_verbose_shows_undetermined() {
        let temp = setup_dir(&[("note.md", "Hello World!\n")]);
        let args = LintArgs {
            check: true,
            ..Default::default()
        };
        let cmd = LintCommand::new(temp.path(), args);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.details().iter().any(|d| d.contains("non-empty-matter")));
    }

    #[test]
    fn lint_json_format() {
        let temp = setup_dir(&[("note.md", "Hello World!\n")]);
        let args = LintArgs {
            check: true,
            format: "json".to_string(),
            ..Default::default()
        };
        let cmd = LintCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.reports()[0]).unwrap();
        assert_eq!(parsed["summary"]["failing_files"], 1);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn lint_json_format_ignores_quiet() {
        let temp = setup_dir(&[("note.md", "Hello World!\n")]);
        let args = LintArgs {
            check: true,
            format: "json".to_string(),
            ..Default::default()
        };
        let cmd = LintCommand::new(temp.path(), args);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.reports().len(), 1);
        assert!(ui.reports()[0].contains("\"failing_files\": 1"));
    }

    #[test]
    fn lint_dry_run_leaves_files() {
        let temp = setup_dir(&[("note.md", "Hello World!\n")]);
        let args = LintArgs {
            dry_run: true,
            ..Default::default()
        };
        let cmd = LintCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui
            .successes()
            .contains(&"Dry run: 1 file(s) would be fixed".to_string()));
        assert_eq!(
            fs::read_to_string(temp.path().join("note.md")).unwrap(),
            "Hello World!\n"
        );
    }
}
