//! Session key bundles: wire normalization, merging and caching
//!
//! Fetched bundles are decrypted upstream. This crate validates and merges
//! them into one key per item (latest entry wins), keeps the result in a
//! [`SessionKeysMemoryCache`] and maps it back into a bundle for pushing.

#![forbid(unsafe_code)]

pub mod bundle;
pub mod cache;
pub mod error;
pub mod mapper;
pub mod merger;
pub mod processor;
pub mod timestamp;
pub mod validator;

pub use bundle::{
    DecryptedSessionKeysBundleModel, ForeignModel, SessionKeyEntry, SessionKeyIdentifier,
    SessionKeysBundle, SESSION_KEYS_KIND,
};
pub use cache::SessionKeysMemoryCache;
pub use error::{Result, SessionKeysError};
pub use mapper::to_push_bundle;
pub use merger::{MergedSessionKey, MergedSessionKeys, OriginBundle, SessionKeysBundleMerger};
pub use processor::{marshal_for_push, unmarshal_fetched, SESSION_KEY_VERSION};
pub use timestamp::{parse_timestamp, Timestamp};
pub use validator::SessionKeysBundleValidator;
