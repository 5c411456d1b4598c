//! Session key wire normalization

use keyward_sessionkeys::{marshal_for_push, unmarshal_fetched, SESSION_KEY_VERSION};
use proptest::prelude::*;

#[test]
fn test_unmarshal_fetched() {
    assert_eq!(unmarshal_fetched("key"), "key");
    assert_eq!(unmarshal_fetched("9:key"), "key");
    assert_eq!(unmarshal_fetched("18:A1B2"), "A1B2");
}

#[test]
fn test_marshal_for_push() {
    assert_eq!(marshal_for_push("key"), "9:KEY");
    assert_eq!(marshal_for_push("9:key"), "9:KEY");
    assert_eq!(marshal_for_push("3:c0ffee"), "9:C0FFEE");
    assert_eq!(SESSION_KEY_VERSION, 9);
}

#[test]
fn test_non_numeric_prefix_is_kept() {
    assert_eq!(unmarshal_fetched("v9:key"), "v9:key");
    assert_eq!(unmarshal_fetched(":key"), ":key");
    assert_eq!(marshal_for_push("aes:key"), "9:AES:KEY");
}

#[test]
fn test_empty_key() {
    assert_eq!(unmarshal_fetched(""), "");
    assert_eq!(unmarshal_fetched("9:"), "");
    assert_eq!(marshal_for_push(""), "9:");
}

#[test]
fn test_bare_prefix_is_never_prefixed_twice() {
    for raw in ["", "9:", "12:"] {
        let pushed = marshal_for_push(raw);
        assert_eq!(pushed, "9:");
        assert_eq!(marshal_for_push(&pushed), pushed);
        assert_eq!(marshal_for_push(unmarshal_fetched(raw)), pushed);
    }
}

proptest! {
    #[test]
    fn push_form_has_exactly_one_prefix(raw in "([0-9]{1,2}:)?[a-zA-Z0-9]{0,40}") {
        let pushed = marshal_for_push(&raw);
        prop_assert_eq!(marshal_for_push(&pushed), pushed.clone());
        prop_assert_eq!(marshal_for_push(unmarshal_fetched(&raw)), pushed.clone());
        prop_assert_eq!(unmarshal_fetched(&pushed), unmarshal_fetched(&raw).to_uppercase());
        prop_assert!(!unmarshal_fetched(&pushed).starts_with("9:"));
    }
}
