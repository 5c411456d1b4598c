//! Password and passphrase generation with an entropy acceptance gate
//!
//! Secrets are sequences of Unicode codepoints drawn from named alphabets or a
//! diceware word list. [`SecretGenerator`] makes one attempt per call and
//! returns [`GeneratedSecret::Failure`] when the result is weaker than
//! [`MIN_ENTROPY_BITS`].

#![forbid(unsafe_code)]

pub mod alphabets;
pub mod codepoint;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod secret;
pub mod settings;
pub mod wordlist;

pub use alphabets::{all_alphabets, alphabet, alphabets_for_settings};
pub use codepoint::{codepoints_to_string, string_to_codepoints, Codepoint, CodepointSet};
pub use entropy::{
    estimate_secret_entropy, estimate_secret_entropy_with_word_list, passphrase_entropy,
    password_entropy,
};
pub use error::{PassgenError, Result};
pub use secret::{GeneratedSecret, SecretGenerator, MIN_ENTROPY_BITS};
pub use settings::{PassphraseGeneratorSettings, PasswordGeneratorSettings};
pub use wordlist::WordList;

pub use keyward_common::CaseType;
