//! Error types for roster loading
//!
//! Every variant is a configuration error: it is raised before any output
//! file is touched.

use crate::slug::SlugError;
use std::path::PathBuf;

/// Errors while reading or validating a roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Roster file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a known roster format
    #[error("unsupported roster format '{extension}' for {path} (expected yaml, yml or json)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// File content does not match the roster schema
    #[error("syntax error in {source_name}: {message}")]
    Syntax { source_name: String, message: String },

    /// Required field absent or blank
    #[error("employee #{index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// Slug failed validation
    #[error("employee #{index}: {source}")]
    InvalidSlug {
        index: usize,
        #[source]
        source: SlugError,
    },

    /// Field present but malformed
    #[error("employee '{slug}': invalid {field}: {reason}")]
    InvalidField {
        slug: String,
        field: &'static str,
        reason: String,
    },

    /// Two entries share a slug
    #[error("duplicate slug '{slug}' at employees #{first} and #{second}")]
    DuplicateSlug {
        slug: String,
        first: usize,
        second: usize,
    },

    /// Site section failed validation
    #[error("invalid site configuration: {0}")]
    InvalidSite(String),
}

impl RosterError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create syntax error for a named source
    pub fn syntax_error(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Syntax {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = RosterError::MissingField {
            index: 2,
            field: "email",
        };
        assert_eq!(err.to_string(), "employee #2: missing required field 'email'");
    }

    #[test]
    fn duplicate_slug_display() {
        let err = RosterError::DuplicateSlug {
            slug: "jane-doe".to_string(),
            first: 0,
            second: 4,
        };
        assert!(err.to_string().contains("duplicate slug 'jane-doe'"));
    }

    #[test]
    fn invalid_slug_keeps_source() {
        let err = RosterError::InvalidSlug {
            index: 1,
            source: SlugError::Empty,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
