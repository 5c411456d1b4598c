//! Unicode codepoints and named codepoint sets

use std::fmt;
use zeroize::Zeroize;

/// A single Unicode scalar value used as an atomic secret symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Zeroize)]
pub struct Codepoint(pub u32);

impl Codepoint {
    /// The scalar value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The character, if the value is a valid Unicode scalar
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(u32::from(c))
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "U+{:04X}", self.0),
        }
    }
}

/// Split a string into codepoints
#[must_use]
pub fn string_to_codepoints(value: &str) -> Vec<Codepoint> {
    value.chars().map(Codepoint::from).collect()
}

/// Join codepoints into a string, skipping invalid scalar values
#[must_use]
pub fn codepoints_to_string(codepoints: &[Codepoint]) -> String {
    codepoints.iter().filter_map(|c| c.to_char()).collect()
}

/// Symbols excluded when look-alike characters are disabled
pub const LOOK_ALIKE_SYMBOLS: [char; 6] = ['O', 'l', '|', 'I', '0', '1'];

/// One alphabet category, identified by its unique `name`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodepointSet {
    /// Unique key, e.g. `upper`
    pub name: String,
    /// Human readable label, e.g. `A-Z`
    pub label: String,
    /// Ordered symbols
    pub codepoints: Vec<Codepoint>,
}

impl CodepointSet {
    /// Build a set from a list of characters
    pub fn from_chars(
        name: impl Into<String>,
        label: impl Into<String>,
        chars: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            codepoints: chars.into_iter().map(Codepoint::from).collect(),
        }
    }

    /// Number of symbols (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    /// Whether the set has no symbols
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Whether `codepoint` belongs to this set
    #[must_use]
    pub fn contains(&self, codepoint: Codepoint) -> bool {
        self.codepoints.contains(&codepoint)
    }

    /// Copy of this set without the look-alike symbols
    #[must_use]
    pub fn without_look_alikes(&self) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            codepoints: self
                .codepoints
                .iter()
                .copied()
                .filter(|c| !c.to_char().is_some_and(|ch| LOOK_ALIKE_SYMBOLS.contains(&ch)))
                .collect(),
        }
    }

    /// This set, or its look-alike free copy when `exclude` is set
    #[must_use]
    pub fn with_look_alike_excluded(&self, exclude: bool) -> Self {
        if exclude {
            self.without_look_alikes()
        } else {
            self.clone()
        }
    }
}
