//! Error types for an audit run.
//!
//! Every error is fatal: the walk stops at the first one and nothing is
//! reported.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised while walking, parsing, or printing.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("walking source tree: {source}")]
    Walk {
        #[source]
        source: ignore::Error,
    },

    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("module name not found in {}", path.display())]
    ModuleNotFound { path: PathBuf },

    #[error("processing {}: module name not found in `{line}`", path.display())]
    MalformedModule { path: PathBuf, line: String },

    #[error("processing {}:{line_number}: parsing `{line}`: bad format", path.display())]
    BadLockLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("processing {}:{line_number}: parsing `{line}`: expected import", path.display())]
    MalformedImport {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("writing report: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl AuditError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_lock_line_names_file_and_line() {
        let err = AuditError::BadLockLine {
            path: PathBuf::from("go.sum"),
            line_number: 3,
            line: "github.com/x/y v1.0.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "processing go.sum:3: parsing `github.com/x/y v1.0.0`: bad format"
        );
    }

    #[test]
    fn test_module_not_found_message() {
        let err = AuditError::ModuleNotFound {
            path: PathBuf::from("sub/go.mod"),
        };
        assert_eq!(err.to_string(), "module name not found in sub/go.mod");
    }
}
