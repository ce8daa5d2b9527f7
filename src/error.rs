//! Error types for sitewright.
//!
//! One top-level error aggregating the content-document failure modes,
//! with a Unix-conventional exit code mapping for the CLI.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for sitewright CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content document error (missing, malformed, failed validation)
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (unwritable output, bind failure)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for sitewright operations.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Content document loading or validation error
    #[error(transparent)]
    Content(#[from] ContentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Content(_) | Self::Json(_) => ExitCode::CONTENT_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Content Document Errors
// ============================================================================

/// Content document loading and validation errors.
///
/// A load failure is fatal for build and check mode; serve mode logs it
/// and answers the affected request with a 500.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file does not exist
    #[error("content file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Content file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Unreadable {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Content file is not valid JSON, or does not match the document schema
    #[error("malformed content in {path}: {message}")]
    Malformed {
        /// Path to the malformed file
        path: PathBuf,
        /// Error message from the parser or deserializer
        message: String,
    },

    /// The document root is not a JSON object
    #[error("content root in {path} must be a JSON object")]
    NotAnObject {
        /// Path to the offending file
        path: PathBuf,
    },

    /// A required top-level key is absent
    #[error("missing required key '{key}' in {path}")]
    MissingKey {
        /// Name of the missing key (`meta` or `nav`)
        key: &'static str,
        /// Path to the offending file
        path: PathBuf,
    },
}

/// Result type alias for sitewright operations.
pub type Result<T> = std::result::Result<T, SiteError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONTENT_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_content_error_exit_code() {
        let err: SiteError = ContentError::MissingFile {
            path: PathBuf::from("/missing.json"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONTENT_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SiteError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_missing_key_display() {
        let err = ContentError::MissingKey {
            key: "nav",
            path: PathBuf::from("content/site_copy.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("nav"));
        assert!(msg.contains("site_copy.json"));
    }

    #[test]
    fn test_malformed_display() {
        let err = ContentError::Malformed {
            path: PathBuf::from("bad.json"),
            message: "expected value at line 3".to_string(),
        };
        assert!(err.to_string().contains("bad.json"));
        assert!(err.to_string().contains("line 3"));
    }
}
