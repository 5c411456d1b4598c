//! Structural checks on decrypted bundles

use crate::bundle::{SessionKeysBundle, SESSION_KEYS_KIND};
use crate::error::{Result, SessionKeysError};
use crate::processor::unmarshal_fetched;

/// Accepts bundles of the expected kind whose entries are complete
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionKeysBundleValidator;

impl SessionKeysBundleValidator {
    /// Create a validator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check `bundle`
    ///
    /// # Errors
    ///
    /// Returns [`SessionKeysError::InvalidBundle`] naming the first problem.
    pub fn validate(&self, bundle: &SessionKeysBundle) -> Result<()> {
        if bundle.kind != SESSION_KEYS_KIND {
            return Err(SessionKeysError::InvalidBundle(format!(
                "unexpected object type '{}'",
                bundle.kind
            )));
        }
        for (index, entry) in bundle.session_keys.iter().enumerate() {
            if entry.foreign_model_type.trim().is_empty() {
                return Err(SessionKeysError::InvalidBundle(format!(
                    "entry {index} has no foreign model"
                )));
            }
            if unmarshal_fetched(entry.session_key.trim()).trim().is_empty() {
                return Err(SessionKeysError::InvalidBundle(format!(
                    "entry {index} has no session key"
                )));
            }
        }
        Ok(())
    }

    /// Whether `bundle` passes [`Self::validate`]
    #[must_use]
    pub fn is_valid(&self, bundle: &SessionKeysBundle) -> bool {
        self.validate(bundle).is_ok()
    }
}
