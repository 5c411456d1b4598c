//! Conversion of cached keys back into a pushable bundle

use crate::bundle::{SessionKeyEntry, SessionKeysBundle};
use crate::merger::MergedSessionKeys;
use crate::processor::marshal_for_push;

/// Bundle holding every merged key in push form (`9:<KEY>`)
#[must_use]
pub fn to_push_bundle(merged: &MergedSessionKeys) -> SessionKeysBundle {
    let entries = merged
        .iter()
        .map(|(identifier, key)| SessionKeyEntry {
            foreign_model_type: identifier.foreign_model_type.clone(),
            foreign_id: identifier.foreign_id,
            session_key: marshal_for_push(&key.session_key),
            modified: key.modified,
        })
        .collect();
    SessionKeysBundle::new(entries)
}
