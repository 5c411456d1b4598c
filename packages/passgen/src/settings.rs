//! Generator settings

use keyward_common::{CaseType, PassphraseDefaults, PasswordDefaults};
use serde::{Deserialize, Serialize};

/// Password length and the alphabets taking part in generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordGeneratorSettings {
    /// Target length in codepoints
    pub length: usize,
    /// `A-Z`
    pub mask_upper: bool,
    /// `a-z`
    pub mask_lower: bool,
    /// `0-9`
    pub mask_digit: bool,
    /// `{ ( [ | ] ) }`
    pub mask_parenthesis: bool,
    /// `# $ % & @ ^ ~`
    pub mask_char1: bool,
    /// `. , : ;`
    pub mask_char2: bool,
    /// `' " ``
    pub mask_char3: bool,
    /// `/ \ _ -`
    pub mask_char4: bool,
    /// `< * + ! ? =`
    pub mask_char5: bool,
    /// Emoji block
    pub mask_emoji: bool,
    /// Remove look-alike symbols from every selected alphabet
    pub exclude_look_alike: bool,
}

impl PasswordGeneratorSettings {
    /// Settings with every alphabet enabled and look-alikes kept
    #[must_use]
    pub fn all_enabled(length: usize) -> Self {
        Self {
            length,
            mask_upper: true,
            mask_lower: true,
            mask_digit: true,
            mask_parenthesis: true,
            mask_char1: true,
            mask_char2: true,
            mask_char3: true,
            mask_char4: true,
            mask_char5: true,
            mask_emoji: true,
            exclude_look_alike: false,
        }
    }

    /// Settings with no alphabet enabled
    #[must_use]
    pub fn none_enabled(length: usize) -> Self {
        Self {
            length,
            mask_upper: false,
            mask_lower: false,
            mask_digit: false,
            mask_parenthesis: false,
            mask_char1: false,
            mask_char2: false,
            mask_char3: false,
            mask_char4: false,
            mask_char5: false,
            mask_emoji: false,
            exclude_look_alike: false,
        }
    }
}

impl From<&PasswordDefaults> for PasswordGeneratorSettings {
    fn from(defaults: &PasswordDefaults) -> Self {
        Self {
            length: defaults.length,
            mask_upper: defaults.upper,
            mask_lower: defaults.lower,
            mask_digit: defaults.digit,
            mask_parenthesis: defaults.parenthesis,
            mask_char1: defaults.special_char1,
            mask_char2: defaults.special_char2,
            mask_char3: defaults.special_char3,
            mask_char4: defaults.special_char4,
            mask_char5: defaults.special_char5,
            mask_emoji: defaults.emoji,
            exclude_look_alike: defaults.exclude_look_alike,
        }
    }
}

/// Passphrase word count, separator and word case
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassphraseGeneratorSettings {
    /// Number of words drawn
    pub word_count: usize,
    /// Separator placed between words
    pub separator: String,
    /// Case applied to each word
    pub case: CaseType,
}

impl PassphraseGeneratorSettings {
    /// Lowercase words joined by `separator`
    pub fn new(word_count: usize, separator: impl Into<String>) -> Self {
        Self {
            word_count,
            separator: separator.into(),
            case: CaseType::Lowercase,
        }
    }

    /// Same settings with a different word case
    #[must_use]
    pub fn with_case(mut self, case: CaseType) -> Self {
        self.case = case;
        self
    }
}

impl From<&PassphraseDefaults> for PassphraseGeneratorSettings {
    fn from(defaults: &PassphraseDefaults) -> Self {
        Self {
            word_count: defaults.word_count,
            separator: defaults.separator.clone(),
            case: defaults.case,
        }
    }
}
