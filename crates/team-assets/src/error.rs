//! Error types for artifact generation
//!
//! Any of these aborts the run. Files already written for earlier records
//! stay on disk; rerunning regenerates everything.

use crate::qr::QrError;
use std::fmt;
use std::path::PathBuf;

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    CreateDir,
    Write,
    Remove,
    ReadDir,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateDir => "create directory",
            Self::Write => "write",
            Self::Remove => "remove",
            Self::ReadDir => "read directory",
        })
    }
}

/// Errors while writing or reconciling artifacts
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Filesystem operation failed
    #[error("failed to {op} {path}: {source}")]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// QR image could not be produced
    #[error("qr code for '{slug}' failed: {source}")]
    Qr {
        slug: String,
        #[source]
        source: QrError,
    },
}

impl GenerateError {
    /// Create IO error for path
    pub fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for generation
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = GenerateError::io(
            IoOp::CreateDir,
            "/site/team",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        let text = err.to_string();
        assert!(text.starts_with("failed to create directory /site/team"));
    }

    #[test]
    fn qr_error_keeps_source() {
        let err = GenerateError::Qr {
            slug: "jane-doe".to_string(),
            source: QrError::Encode("data too long".to_string()),
        };
        assert!(err.to_string().contains("'jane-doe'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
