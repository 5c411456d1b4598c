//! Subsystem configuration
//!
//! Every field has a serde default so a partial (or empty) JSON document is a
//! valid configuration. Protocol constants such as the minimum entropy gate
//! are not configurable.

use crate::error::{Error, ErrorKind, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`KeywardConfig::word_list_path`]
pub const WORD_LIST_ENV: &str = "KEYWARD_WORD_LIST";

/// Top-level configuration for the secret and session-key subsystem
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywardConfig {
    /// EFF dice-format word list used for passphrases
    #[serde(default)]
    pub word_list_path: Option<PathBuf>,
    /// Defaults applied when a caller asks for a password without settings
    #[serde(default)]
    pub password_defaults: PasswordDefaults,
    /// Defaults applied when a caller asks for a passphrase without settings
    #[serde(default)]
    pub passphrase_defaults: PassphraseDefaults,
}

/// Default password generator settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordDefaults {
    /// Target length in codepoints
    pub length: usize,
    /// `A-Z`
    pub upper: bool,
    /// `a-z`
    pub lower: bool,
    /// `0-9`
    pub digit: bool,
    /// `{ ( [ | ] ) }`
    pub parenthesis: bool,
    /// `# $ % & @ ^ ~`
    pub special_char1: bool,
    /// `. , : ;`
    pub special_char2: bool,
    /// `' " ``
    pub special_char3: bool,
    /// `/ \ _ -`
    pub special_char4: bool,
    /// `< * + ! ? =`
    pub special_char5: bool,
    /// Emoji block
    pub emoji: bool,
    /// Drop look-alike symbols such as `O` and `0`
    pub exclude_look_alike: bool,
}

impl Default for PasswordDefaults {
    fn default() -> Self {
        Self {
            length: 18,
            upper: true,
            lower: true,
            digit: true,
            parenthesis: true,
            special_char1: true,
            special_char2: true,
            special_char3: true,
            special_char4: true,
            special_char5: true,
            emoji: false,
            exclude_look_alike: true,
        }
    }
}

/// Letter case applied to every passphrase word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    /// `correct`
    #[default]
    Lowercase,
    /// `CORRECT`
    Uppercase,
    /// `Correct`
    Camelcase,
}

/// Default passphrase generator settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseDefaults {
    /// Number of words
    pub word_count: usize,
    /// Separator placed between words
    pub separator: String,
    /// Case applied to each word
    pub case: CaseType,
}

impl Default for PassphraseDefaults {
    fn default() -> Self {
        Self {
            word_count: 9,
            separator: " ".to_string(),
            case: CaseType::Lowercase,
        }
    }
}

impl KeywardConfig {
    /// Parse a configuration from a JSON document
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document is not valid JSON for
    /// this schema or if the resulting values are out of range.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::with_source(ErrorKind::Configuration, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read and a configuration
    /// error if its content is invalid.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::from(e).context(format!("reading {}", path.display())))?;
        Self::from_json_str(&content)
    }

    /// Apply environment variable overrides
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        match std::env::var(WORD_LIST_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                debug!("Word list path overridden by {WORD_LIST_ENV}");
                self.word_list_path = Some(PathBuf::from(path));
            }
            Ok(_) => warn!("{WORD_LIST_ENV} is set but empty, ignoring"),
            Err(_) => {}
        }
        self
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.password_defaults.length >= 1,
            configuration,
            "password_defaults.length must be at least 1"
        );
        crate::ensure!(
            self.passphrase_defaults.word_count >= 1,
            configuration,
            "passphrase_defaults.word_count must be at least 1"
        );
        Ok(())
    }
}
