//! # Keyward
//!
//! Secret generation with an entropy gate, signed account kit verification
//! and session key bundle merging for team password manager clients.
//!
//! ## Crates
//!
//! - [`keyward_passgen`] - passwords and passphrases
//! - [`keyward_accountkit`] - account kit parsing
//! - [`keyward_sessionkeys`] - session key bundles and cache
//! - [`keyward_common`] - errors, logging and configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use keyward::{AccountKitParser, AsciiArmor, Keyward, KeywardConfig, SessionKeysMemoryCache};
//! use std::sync::Arc;
//!
//! async fn example(verifier: impl keyward::SignatureVerifier) -> keyward::Result<()> {
//!     let config = KeywardConfig::load("keyward.json").await?.with_env_overrides();
//!     let parser = AccountKitParser::new(AsciiArmor::new(), verifier);
//!     let keyward = Keyward::from_config(config, parser, Arc::new(SessionKeysMemoryCache::new())).await?;
//!
//!     if let Some(password) = keyward.generate_default_password()?.to_secret_string() {
//!         log::info!("generated a password of {} characters", password.chars().count());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod error;
mod keyward;

pub use crate::error::{KeywardError, Result};
pub use crate::keyward::Keyward;

pub use keyward_common::{CaseType, KeywardConfig, Logging, PassphraseDefaults, PasswordDefaults};

pub use keyward_passgen::{
    Codepoint, CodepointSet, GeneratedSecret, PassgenError, PassphraseGeneratorSettings,
    PasswordGeneratorSettings, SecretGenerator, WordList, MIN_ENTROPY_BITS,
};

pub use keyward_accountkit::{
    AccountKitError, AccountKitParser, AccountSetupDataModel, AsciiArmor, CryptoError,
    SignatureVerifier, Unarmor, VerificationResult,
};

pub use keyward_sessionkeys::{
    DecryptedSessionKeysBundleModel, ForeignModel, MergedSessionKey, MergedSessionKeys,
    OriginBundle, SessionKeyEntry, SessionKeyIdentifier, SessionKeysBundle, SessionKeysError,
    SessionKeysMemoryCache, SESSION_KEY_VERSION,
};

pub use keyward_common;
pub use keyward_accountkit;
pub use keyward_passgen;
pub use keyward_sessionkeys;
