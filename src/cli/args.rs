//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::lint::{OutputFormat, RuleId};
use crate::matter::SerializeOptions;
use crate::runner::{FixOptions, ScanOptions};

/// fmlint - Keep `created` / `modified` front matter in sync with the filesystem.
#[derive(Debug, Parser)]
#[command(name = "fmlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose files are linted and fixed
    pub dir: PathBuf,

    #[command(flatten)]
    pub lint: LintArgs,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Arguments controlling what is linted and how fixes are applied.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// File extensions to check
    #[arg(short = 'e', long = "ext", value_delimiter = ',', default_value = "md")]
    pub extensions: Vec<String>,

    /// Only run these rules (e.g. FML001,FML120)
    #[arg(long, value_delimiter = ',')]
    pub rules: Vec<String>,

    /// Report failing files without fixing them
    #[arg(long)]
    pub check: bool,

    /// Compute fixes without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            rules: Vec::new(),
            check: false,
            dry_run: false,
            format: "human".to_string(),
        }
    }
}

impl LintArgs {
    /// Scan settings for the runner.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            rules: self
                .rules
                .iter()
                .filter(|r| !r.trim().is_empty())
                .filter_map(|r| r.parse::<RuleId>().ok())
                .collect(),
        }
    }

    /// Fix settings for the runner.
    pub fn fix_options(&self) -> FixOptions {
        FixOptions {
            serialize: SerializeOptions::default(),
            dry_run: self.dry_run,
        }
    }

    /// Requested report format.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.format)
    }
}
