//! Account kit failures
//!
//! The `Display` output of each variant is the message shown to the user.

use thiserror::Error;

/// Error reported by a cryptographic collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CryptoError {
    /// Human readable description
    pub message: String,
}

impl CryptoError {
    /// Build an error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Account kit parsing and verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountKitError {
    /// Content is not valid base64
    #[error("File does not seem to be the account kit")]
    NotAnAccountKit,

    /// Unarmoring failed
    #[error("{0}")]
    Unarmor(CryptoError),

    /// No JSON object inside the unarmored message
    #[error("Could not parse the account kit: data JSON not found in file")]
    JsonNotFound,

    /// The JSON object does not match the account kit schema
    #[error("Could not parse the account kit: error during parsing JSON")]
    InvalidJson,

    /// The verifier itself failed
    #[error("{0}")]
    Verification(CryptoError),

    /// The verifier ran but rejected the signature
    #[error("Signature is invalid")]
    SignatureInvalid,
}

/// Result type for account kit operations
pub type Result<T> = std::result::Result<T, AccountKitError>;
