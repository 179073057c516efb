//! Lint and fix orchestration.
//!
//! The runner ties the pieces together: it reads files from disk, runs the
//! selected rules over them, applies the fixers bound to failing rules and
//! writes the results back.
//!
//! Batch operations never stop at the first broken file; per-file errors are
//! collected next to the successful results.

pub mod check;
pub mod fix;

pub use check::{check_directory, check_file, check_files, ScanOptions, ScanReport};
pub use fix::{
    apply_all_fixes, apply_all_fixes_to_files, apply_fix, FixOptions, FixOutcome, FixReport,
};

use std::path::PathBuf;

use crate::error::FmlintError;

/// An error that stopped work on one file of a batch.
#[derive(Debug)]
pub struct FileFailure {
    /// The file that could not be processed.
    pub path: PathBuf,
    /// What went wrong.
    pub error: FmlintError,
}
