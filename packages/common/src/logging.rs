//! Structured logging bootstrap and privacy-preserving log helpers
//!
//! All keyward crates log through the `log` facade. Binaries and tests call
//! [`Logging::init`] or [`Logging::init_test`] once to install `env_logger`.
//! Levels are controlled with `RUST_LOG`, e.g.
//! `RUST_LOG=keyward_sessionkeys=debug,keyward_accountkit=info`.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure shared by the keyward crates
pub struct Logging;

impl Logging {
    /// Initialize logging (call once at application startup)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Short SHA-256 digest of an identifier, safe to write to logs
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn secure_hash(value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        let hex_digest = hex::encode(digest);
        format!("#{}", &hex_digest[..12])
    }

    /// Log the outcome of a security-relevant operation
    ///
    /// `subject` is hashed before it is written.
    pub fn log_security_event(operation: &str, subject: Option<&str>, success: bool) {
        let subject_hash = subject.map_or_else(|| "none".to_string(), Self::secure_hash);
        if success {
            info!("Security operation succeeded: {operation} (subject: {subject_hash})");
        } else {
            warn!("Security operation failed: {operation} (subject: {subject_hash})");
        }
    }

    /// Log a failure message that is also returned to the caller
    pub fn log_failure(operation: &str, message: &str) {
        error!("{operation}: {message}");
    }

    /// Log a cache mutation without exposing stored values
    pub fn log_cache_event(event: &str, entries: usize) {
        debug!("Session keys cache: {event} (entries: {entries})");
    }
}
