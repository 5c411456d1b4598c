//! In-memory holder of the merged session keys
//!
//! The whole state is swapped atomically, so readers see either the previous
//! or the next merge and never a partial one. Writers are expected to be
//! serialized by the caller.

use crate::bundle::SessionKeyIdentifier;
use crate::merger::{MergedSessionKey, MergedSessionKeys, OriginBundle};
use crate::processor::unmarshal_fetched;
use arc_swap::ArcSwapOption;
use chrono::Utc;
use keyward_common::Logging;
use std::sync::Arc;

#[derive(Debug)]
struct CacheState {
    merged: Arc<MergedSessionKeys>,
    initial_empty: bool,
    locally_modified: bool,
}

/// Shared cache of merged session keys, empty until the first [`Self::set`]
#[derive(Debug, Default)]
pub struct SessionKeysMemoryCache {
    state: ArcSwapOption<CacheState>,
}

impl SessionKeysMemoryCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached value with a completed merge
    ///
    /// Clears the local modification flag. An `Arc` is stored as is.
    pub fn set(&self, merged: impl Into<Arc<MergedSessionKeys>>) {
        let merged = merged.into();
        let entries = merged.len();
        let state = CacheState {
            initial_empty: merged.latest_modified_origin().is_none(),
            merged,
            locally_modified: false,
        };
        self.state.store(Some(Arc::new(state)));
        Logging::log_cache_event("set", entries);
    }

    /// The cached merge, if the cache was populated
    #[must_use]
    pub fn get(&self) -> Option<Arc<MergedSessionKeys>> {
        self.state.load_full().map(|state| Arc::clone(&state.merged))
    }

    /// Key for `identifier` without its version prefix
    #[must_use]
    pub fn session_key(&self, identifier: &SessionKeyIdentifier) -> Option<String> {
        let state = self.state.load_full()?;
        state
            .merged
            .get(identifier)
            .map(|key| unmarshal_fetched(&key.session_key).to_string())
    }

    /// Record a key obtained locally, e.g. for a newly created item
    ///
    /// The cached value is replaced by a copy holding the new key.
    pub fn put(&self, identifier: SessionKeyIdentifier, session_key: impl Into<String>) {
        let key = MergedSessionKey {
            session_key: session_key.into(),
            modified: Utc::now(),
            origin: None,
        };
        self.state.rcu(|current| {
            let (mut merged, initial_empty) = match current {
                Some(state) => ((*state.merged).clone(), state.initial_empty),
                None => (MergedSessionKeys::new(), true),
            };
            merged.insert(identifier.clone(), key.clone());
            Some(Arc::new(CacheState {
                merged: Arc::new(merged),
                initial_empty,
                locally_modified: true,
            }))
        });
        Logging::log_cache_event("put", self.len());
    }

    /// Origin bundle with the greatest bundle-level modified time
    #[must_use]
    pub fn find_latest_modified_origin_bundle(&self) -> Option<OriginBundle> {
        self.state
            .load_full()
            .and_then(|state| state.merged.latest_modified_origin())
    }

    /// Whether no fetched bundle backed the cache when it was populated
    ///
    /// True for a cache that was never populated.
    #[must_use]
    pub fn was_initial_cache_empty(&self) -> bool {
        self.state
            .load_full()
            .map_or(true, |state| state.initial_empty)
    }

    /// Whether [`Self::put`] ran since the last [`Self::set`]
    #[must_use]
    pub fn is_locally_modified(&self) -> bool {
        self.state
            .load_full()
            .is_some_and(|state| state.locally_modified)
    }

    /// Number of cached keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.load_full().map_or(0, |state| state.merged.len())
    }

    /// Whether no key is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached key, e.g. on sign-out
    pub fn clear(&self) {
        self.state.store(None);
        Logging::log_cache_event("clear", 0);
    }
}
