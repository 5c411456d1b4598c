//! Session key bundle data model
//!
//! ```json
//! { "object_type": "PASSBOLT_SESSION_KEYS",
//!   "session_keys": [ { "foreign_model": "Resource", "foreign_id": "<uuid>",
//!                       "session_key": "9:...", "modified": "<ISO-8601>" } ] }
//! ```

use crate::error::Result;
use crate::timestamp::{self, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Required `object_type` of a session keys bundle
pub const SESSION_KEYS_KIND: &str = "PASSBOLT_SESSION_KEYS";

/// Item types a session key can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignModel {
    /// A password resource
    Resource,
}

impl ForeignModel {
    /// Wire value of the model type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resource => "Resource",
        }
    }
}

impl fmt::Display for ForeignModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item key inside a bundle
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeyEntry {
    /// Type discriminator of the item
    #[serde(rename = "foreign_model")]
    pub foreign_model_type: String,
    /// Id of the item
    pub foreign_id: Uuid,
    /// Raw or version-prefixed key
    pub session_key: String,
    /// Last change of this key
    #[serde(with = "timestamp")]
    pub modified: Timestamp,
}

impl SessionKeyEntry {
    /// Build an entry
    pub fn new(
        foreign_model_type: impl Into<String>,
        foreign_id: Uuid,
        session_key: impl Into<String>,
        modified: Timestamp,
    ) -> Self {
        Self {
            foreign_model_type: foreign_model_type.into(),
            foreign_id,
            session_key: session_key.into(),
            modified,
        }
    }

    /// Slot this entry fills
    #[must_use]
    pub fn identifier(&self) -> SessionKeyIdentifier {
        SessionKeyIdentifier::new(self.foreign_model_type.clone(), self.foreign_id)
    }
}

impl fmt::Debug for SessionKeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeyEntry")
            .field("foreign_model_type", &self.foreign_model_type)
            .field("foreign_id", &self.foreign_id)
            .field("modified", &self.modified)
            .finish_non_exhaustive()
    }
}

/// Decrypted content of one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeysBundle {
    /// Must equal [`SESSION_KEYS_KIND`]
    #[serde(rename = "object_type")]
    pub kind: String,
    /// Entries in wire order
    pub session_keys: Vec<SessionKeyEntry>,
}

impl SessionKeysBundle {
    /// Bundle of the standard kind
    #[must_use]
    pub fn new(session_keys: Vec<SessionKeyEntry>) -> Self {
        Self {
            kind: SESSION_KEYS_KIND.to_string(),
            session_keys,
        }
    }

    /// Decode bundle JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::SessionKeysError::Serialization`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode bundle JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::SessionKeysError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A fetched bundle after upstream decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedSessionKeysBundleModel {
    /// Server id of the bundle
    pub bundle_id: Uuid,
    /// Bundle creation
    pub created: Timestamp,
    /// Last change of the bundle as a whole
    pub modified: Timestamp,
    /// Decrypted content
    pub bundle: SessionKeysBundle,
}

/// Logical key slot: `(foreign model type, foreign id)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKeyIdentifier {
    /// Type discriminator of the item
    pub foreign_model_type: String,
    /// Id of the item
    pub foreign_id: Uuid,
}

impl SessionKeyIdentifier {
    /// Build an identifier
    pub fn new(foreign_model_type: impl Into<String>, foreign_id: Uuid) -> Self {
        Self {
            foreign_model_type: foreign_model_type.into(),
            foreign_id,
        }
    }

    /// Identifier of a resource key
    #[must_use]
    pub fn resource(foreign_id: Uuid) -> Self {
        Self::new(ForeignModel::Resource.as_str(), foreign_id)
    }
}
