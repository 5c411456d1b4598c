//! Signed account kit parsing and verification
//!
//! An account kit is a base64 file holding an OpenPGP signed message whose
//! plaintext is a JSON object with the user's identity and key pair.
//! [`AccountKitParser`] turns it into an [`AccountSetupDataModel`] only after
//! the signature has been verified.

#![forbid(unsafe_code)]

pub mod armor;
pub mod collaborator;
pub mod dto;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;

pub use armor::AsciiArmor;
pub use collaborator::{SignatureVerifier, Unarmor, VerificationResult};
pub use dto::AccountKitDto;
pub use error::{AccountKitError, CryptoError, Result};
pub use model::AccountSetupDataModel;
pub use parser::AccountKitParser;
