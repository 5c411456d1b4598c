//! Most-recently-modified-wins merging of session key bundles
//!
//! Replacement is decided by the entry `modified` time and only when strictly
//! newer, so on equal timestamps the entry seen first (in bundle order, then
//! entry order) is kept. The winning entry remembers the bundle that supplied
//! it; that bundle's own `modified` time is provenance only and never takes
//! part in the comparison.

use crate::bundle::{DecryptedSessionKeysBundleModel, SessionKeyIdentifier};
use crate::timestamp::Timestamp;
use crate::validator::SessionKeysBundleValidator;
use keyward_common::Logging;
use log::{debug, warn};
use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Bundle that supplied a merged key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginBundle {
    /// Server id of the bundle
    pub bundle_id: Uuid,
    /// Bundle-level modified time
    pub modified: Timestamp,
}

/// Winning key for one identifier
#[derive(Clone, PartialEq, Eq)]
pub struct MergedSessionKey {
    /// Key as stored in the bundle
    pub session_key: String,
    /// Entry-level modified time used for replacement
    pub modified: Timestamp,
    /// Supplying bundle; `None` for keys obtained locally
    pub origin: Option<OriginBundle>,
}

impl fmt::Debug for MergedSessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergedSessionKey")
            .field("modified", &self.modified)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Exactly one key per [`SessionKeyIdentifier`]
///
/// Iteration is ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSessionKeys {
    keys: BTreeMap<SessionKeyIdentifier, MergedSessionKey>,
}

impl MergedSessionKeys {
    /// Empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key for `identifier`
    #[must_use]
    pub fn get(&self, identifier: &SessionKeyIdentifier) -> Option<&MergedSessionKey> {
        self.keys.get(identifier)
    }

    /// Whether `identifier` has a key
    #[must_use]
    pub fn contains(&self, identifier: &SessionKeyIdentifier) -> bool {
        self.keys.contains_key(identifier)
    }

    /// All identifiers with their keys
    pub fn iter(&self) -> btree_map::Iter<'_, SessionKeyIdentifier, MergedSessionKey> {
        self.keys.iter()
    }

    /// Unconditionally set the key for `identifier`
    pub fn insert(&mut self, identifier: SessionKeyIdentifier, key: MergedSessionKey) {
        self.keys.insert(identifier, key);
    }

    /// Keep `candidate` only if `identifier` is new or `candidate` is strictly newer
    ///
    /// Returns whether the candidate was stored.
    pub fn offer(&mut self, identifier: SessionKeyIdentifier, candidate: MergedSessionKey) -> bool {
        match self.keys.entry(identifier) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
                true
            }
            Entry::Occupied(mut slot) => {
                if candidate.modified > slot.get().modified {
                    slot.insert(candidate);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Origin bundle with the greatest bundle-level `modified` time
    ///
    /// Local keys have no origin and are skipped. On equal times the first
    /// origin in identifier order wins.
    #[must_use]
    pub fn latest_modified_origin(&self) -> Option<OriginBundle> {
        self.keys
            .values()
            .filter_map(|key| key.origin)
            .fold(None, |latest: Option<OriginBundle>, origin| match latest {
                Some(current) if origin.modified <= current.modified => Some(current),
                _ => Some(origin),
            })
    }
}

impl<'a> IntoIterator for &'a MergedSessionKeys {
    type Item = (&'a SessionKeyIdentifier, &'a MergedSessionKey);
    type IntoIter = btree_map::Iter<'a, SessionKeyIdentifier, MergedSessionKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Merges decrypted bundles into [`MergedSessionKeys`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionKeysBundleMerger {
    validator: SessionKeysBundleValidator,
}

impl SessionKeysBundleMerger {
    /// Create a merger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every bundle in input order
    #[must_use]
    pub fn merge(&self, bundles: &[DecryptedSessionKeysBundleModel]) -> MergedSessionKeys {
        let mut merged = MergedSessionKeys::new();
        for bundle in bundles {
            absorb(&mut merged, bundle);
        }
        debug!(
            "Merged {} session keys bundles into {} keys",
            bundles.len(),
            merged.len()
        );
        merged
    }

    /// Merge only the bundles that pass validation
    #[must_use]
    pub fn merge_valid(&self, bundles: &[DecryptedSessionKeysBundleModel]) -> MergedSessionKeys {
        let valid: Vec<DecryptedSessionKeysBundleModel> = bundles
            .iter()
            .filter(|bundle| match self.validator.validate(&bundle.bundle) {
                Ok(()) => true,
                Err(err) => {
                    let id = Logging::secure_hash(&bundle.bundle_id.to_string());
                    warn!("Skipping session keys bundle {id}: {err}");
                    false
                }
            })
            .cloned()
            .collect();
        self.merge(&valid)
    }

    /// Merge fetched bundles with keys already cached locally
    ///
    /// Local keys are considered after every fetched bundle and keep their
    /// entry time. A local key that wins does not point at any fetched bundle.
    #[must_use]
    pub fn merge_with_local(
        &self,
        fetched: &[DecryptedSessionKeysBundleModel],
        local: &MergedSessionKeys,
    ) -> MergedSessionKeys {
        let mut merged = self.merge_valid(fetched);
        let mut local_wins = 0usize;
        for (identifier, key) in local {
            let candidate = MergedSessionKey {
                session_key: key.session_key.clone(),
                modified: key.modified,
                origin: None,
            };
            if merged.offer(identifier.clone(), candidate) {
                local_wins += 1;
            }
        }
        debug!("Merged local cache: {local_wins} local keys kept");
        merged
    }
}

fn absorb(merged: &mut MergedSessionKeys, bundle: &DecryptedSessionKeysBundleModel) {
    let origin = OriginBundle {
        bundle_id: bundle.bundle_id,
        modified: bundle.modified,
    };
    for entry in &bundle.bundle.session_keys {
        merged.offer(
            entry.identifier(),
            MergedSessionKey {
                session_key: entry.session_key.clone(),
                modified: entry.modified,
                origin: Some(origin),
            },
        );
    }
}
