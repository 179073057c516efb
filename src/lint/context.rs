//! Per-file lint context.
//!
//! A [`LintContext`] bundles everything a rule may look at for one file:
//! its path, raw text, parsed [`Document`] and the filesystem timestamps.

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::matter::{from_system_time, Document};

/// Filesystem timestamps of a file, at millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Last modification time (mtime).
    pub modified: DateTime<Utc>,
    /// Creation time (birthtime).
    pub created: DateTime<Utc>,
}

impl FileStat {
    /// Read timestamps from filesystem metadata.
    ///
    /// Filesystems that do not record a birthtime report the mtime in its
    /// place.
    pub fn from_metadata(metadata: &Metadata) -> std::io::Result<Self> {
        let modified = from_system_time(metadata.modified()?);
        let created = match metadata.created() {
            Ok(time) => from_system_time(time),
            Err(e) => {
                tracing::debug!("birthtime unavailable ({}), using mtime", e);
                modified
            }
        };
        Ok(Self { modified, created })
    }
}

/// Everything a lint rule can inspect for one file.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    /// Path of the file being linted.
    pub path: &'a Path,
    /// File contents as read.
    pub raw: &'a str,
    /// Parsed document.
    pub document: &'a Document,
    /// Filesystem timestamps, when the document came from disk.
    pub stat: Option<&'a FileStat>,
}

impl<'a> LintContext<'a> {
    /// Create a context for a document read from `path`.
    pub fn new(path: &'a Path, document: &'a Document, stat: Option<&'a FileStat>) -> Self {
        Self {
            path,
            raw: &document.raw,
            document,
            stat,
        }
    }
}
