use thiserror::Error;

/// Category of an [`super::Error`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed
    #[error("I/O failure")]
    Io,

    /// A file or value does not exist
    #[error("Not found")]
    NotFound,

    /// Configuration could not be parsed or holds out-of-range values
    #[error("Invalid configuration")]
    Configuration,

    /// A word list file is malformed
    #[error("Invalid word list")]
    WordList,

    /// JSON could not be encoded or decoded
    #[error("Malformed data")]
    Serialization,
}

impl From<std::io::ErrorKind> for ErrorKind {
    fn from(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::InvalidData => Self::Serialization,
            _ => Self::Io,
        }
    }
}
