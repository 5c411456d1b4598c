//! Error types for session key handling

use thiserror::Error;

/// Session key errors
#[derive(Debug, Error)]
pub enum SessionKeysError {
    /// A timestamp is not ISO-8601
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// Raw value
        value: String,
        /// Parser message
        reason: String,
    },

    /// A bundle failed validation
    #[error("Invalid session keys bundle: {0}")]
    InvalidBundle(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session key operations
pub type Result<T> = std::result::Result<T, SessionKeysError>;
