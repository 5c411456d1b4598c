//! Session key wire normalization
//!
//! Keys travel either bare or as `<version>:<KEY>`. Fetched keys are read
//! without the prefix; keys pushed upstream always carry
//! [`SESSION_KEY_VERSION`] and an uppercase key.

/// Protocol version prefixed to pushed keys
pub const SESSION_KEY_VERSION: u32 = 9;

fn split_prefixed(raw: &str) -> Option<&str> {
    let (version, key) = raw.split_once(':')?;
    let numeric = !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit());
    numeric.then_some(key)
}

/// Strip a `<digits>:` prefix, if the key has one
///
/// A bare prefix such as `9:` unmarshals to the empty key.
#[must_use]
pub fn unmarshal_fetched(raw: &str) -> &str {
    split_prefixed(raw).unwrap_or(raw)
}

/// Emit `9:<UPPERCASE KEY>`, replacing any existing version prefix
#[must_use]
pub fn marshal_for_push(raw: &str) -> String {
    format!(
        "{SESSION_KEY_VERSION}:{}",
        unmarshal_fetched(raw).to_uppercase()
    )
}
