//! Cryptographic collaborators used by the parser
//!
//! OpenPGP message handling lives outside this crate. The parser only needs a
//! way to strip container framing and a way to check the message signature.

use crate::error::CryptoError;
use std::future::Future;
use std::sync::Arc;

/// Outcome of a signature check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the signature matched the public key
    pub is_verified: bool,
    /// The verified plaintext as returned by the verifier
    pub message: String,
    /// Fingerprint of the signing key
    pub key_fingerprint: String,
}

/// Strips ASCII armor or container framing from a cryptographic message
pub trait Unarmor: Send + Sync {
    /// Return the inner message bytes
    fn unarmor(&self, message: &[u8]) -> impl Future<Output = Result<Vec<u8>, CryptoError>> + Send;
}

/// Verifies the signature of a signed message
pub trait SignatureVerifier: Send + Sync {
    /// Check `message` against `public_key_armored`
    ///
    /// `expected_message` is the plaintext the caller believes was signed.
    fn verify_signature(
        &self,
        public_key_armored: &str,
        message: &[u8],
        expected_message: &str,
    ) -> impl Future<Output = Result<VerificationResult, CryptoError>> + Send;
}

impl<T: Unarmor> Unarmor for Arc<T> {
    fn unarmor(&self, message: &[u8]) -> impl Future<Output = Result<Vec<u8>, CryptoError>> + Send {
        (**self).unarmor(message)
    }
}

impl<T: SignatureVerifier> SignatureVerifier for Arc<T> {
    fn verify_signature(
        &self,
        public_key_armored: &str,
        message: &[u8],
        expected_message: &str,
    ) -> impl Future<Output = Result<VerificationResult, CryptoError>> + Send {
        (**self).verify_signature(public_key_armored, message, expected_message)
    }
}
