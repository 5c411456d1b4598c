//! Verified account setup data

use serde::Serialize;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Account provisioning data produced only after the kit signature verified
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct AccountSetupDataModel {
    /// Server side user id
    pub server_user_id: String,
    /// Server url
    pub domain: String,
    /// Login name
    pub user_name: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Avatar location, never provided by an account kit
    pub avatar_url: Option<String>,
    /// Fingerprint of the key that signed the kit
    pub key_fingerprint: String,
    /// The user's armored private key
    pub armored_key: String,
}

impl fmt::Debug for AccountSetupDataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountSetupDataModel")
            .field("server_user_id", &self.server_user_id)
            .field("domain", &self.domain)
            .field("user_name", &self.user_name)
            .field("key_fingerprint", &self.key_fingerprint)
            .finish_non_exhaustive()
    }
}
