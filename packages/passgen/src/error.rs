//! Error types for secret generation

use thiserror::Error;

/// Secret generation errors
#[derive(Debug, Error)]
pub enum PassgenError {
    /// No codepoint is available to draw from
    #[error("Cannot generate a password from an empty alphabet")]
    EmptyAlphabet,

    /// Word list content is malformed
    #[error("Invalid word list at line {line}: {reason}")]
    InvalidWordList {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Word list has no words
    #[error("Word list is empty")]
    EmptyWordList,

    /// A passphrase was requested but no word list is configured
    #[error("No word list configured for passphrase generation")]
    WordListUnavailable,

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for secret generation
pub type Result<T> = std::result::Result<T, PassgenError>;
