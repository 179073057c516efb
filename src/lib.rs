//! fmlint - Front matter timestamp linting.
//!
//! fmlint keeps two fields of a YAML front matter block, `created` and
//! `modified`, consistent with the filesystem's birth and modification times.
//! A registry of rules checks each file; fixers bound to failing rules
//! rewrite the front matter and the file is written back atomically.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`files`] - Stat, listing and atomic writes
//! - [`lint`] - Rules, registry, fixers and report formatters
//! - [`matter`] - Front matter parsing and serialization
//! - [`runner`] - Lint and fix orchestration over files and directories
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use fmlint::lint::{evaluate, LintContext, RuleRegistry};
//! use fmlint::matter::Document;
//!
//! let doc = Document::parse("Hello World!\n");
//! let ctx = LintContext::new(Path::new("note.md"), &doc, None);
//! let result = evaluate(&RuleRegistry::builtin().all(), &ctx);
//!
//! assert_eq!(result.failed[0].as_str(), "FML001");
//! ```
//!
//! For directory-level checks and fixes, see [`runner`].

pub mod cli;
pub mod error;
pub mod files;
pub mod lint;
pub mod matter;
pub mod runner;
pub mod ui;

pub use error::{FmlintError, Result};
