//! Common infrastructure shared by the keyward crates
//!
//! - Error handling with context propagation
//! - Logging bootstrap and privacy-preserving log helpers
//! - Subsystem configuration

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CaseType, KeywardConfig, PassphraseDefaults, PasswordDefaults};
pub use error::{Error, ErrorKind, Result};
pub use logging::Logging;
