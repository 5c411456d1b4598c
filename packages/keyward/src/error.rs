//! Unified error type

use thiserror::Error;

/// Any failure surfaced by [`crate::Keyward`]
///
/// Each variant displays the message of the wrapped error unchanged.
#[derive(Debug, Error)]
pub enum KeywardError {
    /// Secret generation failed
    #[error(transparent)]
    Passgen(#[from] keyward_passgen::PassgenError),

    /// Account kit parsing or verification failed
    #[error(transparent)]
    AccountKit(#[from] keyward_accountkit::AccountKitError),

    /// Session key handling failed
    #[error(transparent)]
    SessionKeys(#[from] keyward_sessionkeys::SessionKeysError),

    /// Configuration or loading failed
    #[error(transparent)]
    Common(#[from] keyward_common::Error),
}

/// Result type for the unified entry point
pub type Result<T> = std::result::Result<T, KeywardError>;
