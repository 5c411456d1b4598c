//! Wire format of the account kit payload

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// JSON object embedded in the signed account kit message
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct AccountKitDto {
    /// Server side user id
    #[zeroize(skip)]
    pub user_id: Uuid,
    /// Server url
    pub domain: String,
    /// Login name
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// The user's armored public key, used to verify the kit signature
    pub public_key_armored: String,
    /// The user's armored private key
    pub private_key_armored: String,
}

impl fmt::Debug for AccountKitDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountKitDto")
            .field("user_id", &self.user_id)
            .field("domain", &self.domain)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
