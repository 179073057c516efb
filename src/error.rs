//! Error types for fmlint operations.
//!
//! This module defines [`FmlintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint predicates never return errors; an absent field is a failed check
//! - Use `FmlintError` for conditions that abort work on a single file
//! - Use `anyhow::Error` (via `FmlintError::Other`) for unexpected errors
//! - Every per-file error carries the path it happened on

use std::path::PathBuf;
use thiserror::Error;

use crate::lint::RuleId;

/// Core error type for fmlint operations.
#[derive(Debug, Error)]
pub enum FmlintError {
    /// Reading, writing or stat-ing a file failed.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter could not be parsed as a YAML mapping.
    #[error("Invalid YAML front matter in {path}: {message}")]
    InvalidYaml { path: PathBuf, message: String },

    /// The document structure is broken in a way that needs manual repair.
    #[error("{path} fails {rule} and must be fixed by hand")]
    Structural { path: PathBuf, rule: RuleId },

    /// A rule id that is not in the registry.
    #[error("Unknown lint rule: {id}")]
    UnknownRule { id: String },

    /// The given path does not exist.
    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Front matter could not be serialized back to text.
    #[error("Failed to serialize front matter: {message}")]
    Serialize { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FmlintError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for fmlint operations.
pub type Result<T> = std::result::Result<T, FmlintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_displays_path() {
        let err = FmlintError::io(
            "/notes/a.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/notes/a.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn invalid_yaml_displays_path_and_message() {
        let err = FmlintError::InvalidYaml {
            path: PathBuf::from("/notes/b.md"),
            message: "duplicate entry with key \"foo\"".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/notes/b.md"));
        assert!(msg.contains("duplicate entry"));
    }

    #[test]
    fn structural_displays_rule() {
        let err = FmlintError::Structural {
            path: PathBuf::from("c.md"),
            rule: RuleId::new("FML000"),
        };
        assert!(err.to_string().contains("FML000"));
    }

    #[test]
    fn unknown_rule_displays_id() {
        let err = FmlintError::UnknownRule {
            id: "FML999".into(),
        };
        assert!(err.to_string().contains("FML999"));
    }

    #[test]
    fn anyhow_converts() {
        let err: FmlintError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, FmlintError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(FmlintError::PathNotFound {
                path: PathBuf::from("/missing"),
            })
        }
        assert!(returns_error().is_err());
    }
}
