//! Shared error type
//!
//! An [`Error`] carries an [`ErrorKind`], a stack of context lines pushed by
//! each layer it crosses, and its underlying source. Cloning is cheap.

mod chain;
mod kind;
pub mod macros;
mod repr;

pub use chain::Chain;
pub use kind::ErrorKind;
pub use repr::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
