//! Entropy-gated secret generation

use crate::alphabets::alphabets_for_settings;
use crate::codepoint::{codepoints_to_string, Codepoint, CodepointSet};
use crate::entropy::{passphrase_entropy, password_entropy, realized_alphabet_size};
use crate::error::{PassgenError, Result};
use crate::generator::{generate_passphrase, generate_password, union_alphabet};
use crate::settings::{PassphraseGeneratorSettings, PasswordGeneratorSettings};
use crate::wordlist::WordList;
use log::debug;
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroizing;

/// Secrets below this many bits of entropy are rejected
pub const MIN_ENTROPY_BITS: u32 = 80;

/// Outcome of one generation attempt
#[derive(Clone, PartialEq)]
pub enum GeneratedSecret {
    /// The secret passed the entropy gate
    Success {
        /// Generated symbols
        codepoints: Zeroizing<Vec<Codepoint>>,
        /// Entropy of the secret in bits
        entropy_bits: f64,
    },
    /// The settings cannot reach the required entropy
    Failure {
        /// The threshold that was not met
        minimum_entropy_bits: u32,
    },
}

impl GeneratedSecret {
    /// Whether the secret passed the gate
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Entropy of a successful secret
    #[must_use]
    pub fn entropy_bits(&self) -> Option<f64> {
        match self {
            Self::Success { entropy_bits, .. } => Some(*entropy_bits),
            Self::Failure { .. } => None,
        }
    }

    /// The successful secret as a string
    #[must_use]
    pub fn to_secret_string(&self) -> Option<Zeroizing<String>> {
        match self {
            Self::Success { codepoints, .. } => {
                Some(Zeroizing::new(codepoints_to_string(codepoints)))
            }
            Self::Failure { .. } => None,
        }
    }

    fn gate(codepoints: Zeroizing<Vec<Codepoint>>, entropy_bits: f64) -> Self {
        if entropy_bits < f64::from(MIN_ENTROPY_BITS) {
            debug!("Generated secret rejected: {entropy_bits:.2} bits < {MIN_ENTROPY_BITS}");
            Self::Failure {
                minimum_entropy_bits: MIN_ENTROPY_BITS,
            }
        } else {
            Self::Success {
                codepoints,
                entropy_bits,
            }
        }
    }
}

impl fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success {
                codepoints,
                entropy_bits,
            } => f
                .debug_struct("Success")
                .field("length", &codepoints.len())
                .field("entropy_bits", entropy_bits)
                .finish_non_exhaustive(),
            Self::Failure {
                minimum_entropy_bits,
            } => f
                .debug_struct("Failure")
                .field("minimum_entropy_bits", minimum_entropy_bits)
                .finish(),
        }
    }
}

/// Generates passwords and passphrases and applies the entropy gate
///
/// One call makes one attempt; callers retry if they want another secret.
#[derive(Clone, Debug, Default)]
pub struct SecretGenerator {
    word_list: Option<Arc<WordList>>,
}

impl SecretGenerator {
    /// Generator without a word list (passwords only)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator able to produce passphrases from `word_list`
    #[must_use]
    pub fn with_word_list(word_list: WordList) -> Self {
        Self {
            word_list: Some(Arc::new(word_list)),
        }
    }

    /// The configured word list
    #[must_use]
    pub fn word_list(&self) -> Option<&WordList> {
        self.word_list.as_deref()
    }

    /// Generate a password from the alphabets selected in `settings`
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::EmptyAlphabet`] when no symbol is selected.
    pub fn generate_password(&self, settings: &PasswordGeneratorSettings) -> Result<GeneratedSecret> {
        self.generate_password_with_rng(settings, &mut rand::rng())
    }

    /// [`Self::generate_password`] with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::EmptyAlphabet`] when no symbol is selected.
    pub fn generate_password_with_rng<R: Rng + ?Sized>(
        &self,
        settings: &PasswordGeneratorSettings,
        rng: &mut R,
    ) -> Result<GeneratedSecret> {
        let alphabets: Vec<CodepointSet> = alphabets_for_settings(settings).into_iter().collect();
        self.generate_password_from_alphabets(settings.length, &alphabets, rng)
    }

    /// Generate a password of `length` symbols from arbitrary alphabets
    ///
    /// The entropy uses the realized alphabet size, i.e. distinct symbols
    /// across all alphabets, evaluated after generation.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::EmptyAlphabet`] when the alphabets hold no symbol.
    pub fn generate_password_from_alphabets<R: Rng + ?Sized>(
        &self,
        length: usize,
        alphabets: &[CodepointSet],
        rng: &mut R,
    ) -> Result<GeneratedSecret> {
        let union = union_alphabet(alphabets);
        let codepoints = generate_password(length, &union, rng)?;
        let entropy_bits = password_entropy(codepoints.len(), realized_alphabet_size(alphabets));
        Ok(GeneratedSecret::gate(codepoints, entropy_bits))
    }

    /// Generate a passphrase from the configured word list
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::WordListUnavailable`] without a word list.
    pub fn generate_passphrase(
        &self,
        settings: &PassphraseGeneratorSettings,
    ) -> Result<GeneratedSecret> {
        self.generate_passphrase_with_rng(settings, &mut rand::rng())
    }

    /// [`Self::generate_passphrase`] with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::WordListUnavailable`] without a word list.
    pub fn generate_passphrase_with_rng<R: Rng + ?Sized>(
        &self,
        settings: &PassphraseGeneratorSettings,
        rng: &mut R,
    ) -> Result<GeneratedSecret> {
        let word_list = self
            .word_list
            .as_deref()
            .ok_or(PassgenError::WordListUnavailable)?;
        let codepoints = generate_passphrase(settings, word_list, rng);
        let entropy_bits = passphrase_entropy(settings.word_count, word_list.len());
        Ok(GeneratedSecret::gate(codepoints, entropy_bits))
    }
}
