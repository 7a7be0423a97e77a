//! Error types for navweave
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navweave operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navweave operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Input payload is not the expected shape (not JSON, wrong field types)
    #[error("invalid payload in {file}: {message}")]
    InvalidPayload { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Hover replay script step could not be parsed
    #[error("invalid hover script step '{step}': {message}")]
    InvalidHoverScript { step: String, message: String },

    /// Tree is nested deeper than the printers accept
    #[error("navigation tree is {depth} levels deep, output is limited to {limit}")]
    TreeTooDeep { depth: usize, limit: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NavError {
    /// Build an `InvalidPayload` error from a serde_json failure
    pub fn payload(file: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        NavError::InvalidPayload {
            file: file.into(),
            message: err.to_string(),
        }
    }
}
