//! Error types for lovedir.

use thiserror::Error;

/// Errors that can occur in lovedir operations.
#[derive(Error, Debug)]
pub enum LoveDirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LoveDirError {
    fn from(err: serde_json::Error) -> Self {
        LoveDirError::Serialization(err.to_string())
    }
}

/// Result type alias for lovedir operations.
pub type LoveDirResult<T> = Result<T, LoveDirError>;
