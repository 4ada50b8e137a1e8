//! Error types for the coverdeck-core library.
//!
//! Structured `thiserror` variants so callers can match on the failure
//! shape; the binary layers `anyhow` context on top at its seams.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coverdeck-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Fixture file exists but its shape is wrong
    #[error("Invalid fixture file {path:?}: {reason}")]
    InvalidFixture { path: PathBuf, reason: String },

    /// File or directory not found
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for coverdeck-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid fixture error
    pub fn invalid_fixture(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFixture {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
