//! Diceware word lists
//!
//! The on-disk format is the EFF long list: one `<dice digits>\t<word>` pair
//! per line, e.g. `11111\tabacus`.

use crate::error::{PassgenError, Result};
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// A non-empty list of passphrase words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list directly from words
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::EmptyWordList`] when no word is given and
    /// [`PassgenError::InvalidWordList`] for blank words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(index) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(PassgenError::InvalidWordList {
                line: index + 1,
                reason: "blank word".to_string(),
            });
        }
        if words.is_empty() {
            return Err(PassgenError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Parse the dice file format
    ///
    /// Blank lines are ignored. Each other line must hold a numeric dice key
    /// and a word; dice keys must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::InvalidWordList`] for malformed lines or
    /// duplicate dice keys, [`PassgenError::EmptyWordList`] if no word is found.
    pub fn parse_dice(content: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            let mut fields = line.split_whitespace();
            let Some(number) = fields.next() else {
                continue;
            };
            let invalid = |reason: &str| PassgenError::InvalidWordList {
                line: line_no,
                reason: reason.to_string(),
            };

            if !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid("dice key is not numeric"));
            }
            let word = fields.next().ok_or_else(|| invalid("missing word"))?;
            if fields.next().is_some() {
                return Err(invalid("unexpected trailing field"));
            }
            if !seen.insert(number.to_string()) {
                return Err(invalid("duplicate dice key"));
            }
            words.push(word.to_string());
        }

        if words.is_empty() {
            return Err(PassgenError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Read and parse a dice file
    ///
    /// # Errors
    ///
    /// Returns [`PassgenError::Io`] if the file cannot be read, or any
    /// [`WordList::parse_dice`] error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let list = Self::parse_dice(&content)?;
        debug!("Loaded word list with {} words", list.len());
        Ok(list)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a word list is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Words in list order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Whether `word` is part of the list
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
