//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key-value store could not be used.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
