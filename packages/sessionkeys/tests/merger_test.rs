//! Bundle merger tests

use chrono::{Duration, TimeZone, Utc};
use keyward_sessionkeys::{
    DecryptedSessionKeysBundleModel, SessionKeyEntry, SessionKeyIdentifier, SessionKeysBundle,
    SessionKeysBundleMerger, Timestamp,
};
use uuid::Uuid;

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

fn entry(model: &str, id: Uuid, key: &str, modified: Timestamp) -> SessionKeyEntry {
    SessionKeyEntry::new(model, id, key, modified)
}

fn bundle(modified: Timestamp, entries: Vec<SessionKeyEntry>) -> DecryptedSessionKeysBundleModel {
    DecryptedSessionKeysBundleModel {
        bundle_id: Uuid::new_v4(),
        created: modified - Duration::days(30),
        modified,
        bundle: SessionKeysBundle::new(entries),
    }
}

fn key_of(merged: &keyward_sessionkeys::MergedSessionKeys, model: &str, id: Uuid) -> Option<String> {
    merged
        .get(&SessionKeyIdentifier::new(model, id))
        .map(|key| key.session_key.clone())
}

#[test]
fn test_single_bundle_is_kept_whole() {
    let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
    let input = bundle(
        now(),
        vec![
            entry("1", ids[0], "key1", now()),
            entry("2", ids[1], "key2", now()),
            entry("3", ids[2], "key3", now()),
        ],
    );

    let merged = SessionKeysBundleMerger::new().merge(&[input.clone()]);

    assert_eq!(merged.len(), 3);
    assert_eq!(key_of(&merged, "1", ids[0]).as_deref(), Some("key1"));
    assert_eq!(key_of(&merged, "2", ids[1]).as_deref(), Some("key2"));
    assert_eq!(key_of(&merged, "3", ids[2]).as_deref(), Some("key3"));
    assert!(merged
        .iter()
        .all(|(_, key)| key.origin.map(|o| o.bundle_id) == Some(input.bundle_id)));
}

#[test]
fn test_duplicate_in_single_bundle_keeps_latest() {
    let shared = Uuid::new_v4();
    let input = bundle(
        now(),
        vec![
            entry("1", Uuid::new_v4(), "key1", now()),
            entry("2", Uuid::new_v4(), "key2", now()),
            entry("3", shared, "key3", now()),
            entry("3", shared, "key4", now() - Duration::days(1)),
        ],
    );

    let merged = SessionKeysBundleMerger::new().merge(&[input]);

    assert_eq!(merged.len(), 3);
    assert_eq!(key_of(&merged, "3", shared).as_deref(), Some("key3"));
    assert!(merged.iter().all(|(_, key)| key.session_key != "key4"));
}

#[test]
fn test_later_duplicate_replaces_earlier() {
    let shared = Uuid::new_v4();
    let input = bundle(
        now(),
        vec![
            entry("3", shared, "old", now() - Duration::hours(2)),
            entry("3", shared, "new", now()),
        ],
    );

    let merged = SessionKeysBundleMerger::new().merge(&[input]);
    assert_eq!(key_of(&merged, "3", shared).as_deref(), Some("new"));
}

#[test]
fn test_same_id_different_model_are_distinct_slots() {
    let shared = Uuid::new_v4();
    let input = bundle(
        now(),
        vec![entry("1", shared, "a", now()), entry("2", shared, "b", now())],
    );

    let merged = SessionKeysBundleMerger::new().merge(&[input]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_disjoint_bundles_are_unioned() {
    let first = bundle(
        now(),
        vec![
            entry("1", Uuid::new_v4(), "key1", now()),
            entry("2", Uuid::new_v4(), "key2", now()),
            entry("3", Uuid::new_v4(), "key3", now()),
        ],
    );
    let second = bundle(
        now(),
        vec![
            entry("4", Uuid::new_v4(), "key4", now()),
            entry("5", Uuid::new_v4(), "key5", now()),
            entry("6", Uuid::new_v4(), "key6", now()),
        ],
    );

    let merged = SessionKeysBundleMerger::new().merge(&[first, second]);

    assert_eq!(merged.len(), 6);
    let mut keys: Vec<&str> = merged.iter().map(|(_, key)| key.session_key.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["key1", "key2", "key3", "key4", "key5", "key6"]);
}

#[test]
fn test_shared_identifier_across_bundles_keeps_latest_entry() {
    let shared = Uuid::new_v4();
    let first = bundle(
        now(),
        vec![
            entry("1", Uuid::new_v4(), "key1", now()),
            entry("2", shared, "key2", now() - Duration::days(1)),
            entry("3", Uuid::new_v4(), "key3", now()),
        ],
    );
    let second = bundle(
        now(),
        vec![
            entry("4", Uuid::new_v4(), "key4", now()),
            entry("2", shared, "key5", now()),
            entry("6", Uuid::new_v4(), "key6", now()),
        ],
    );
    let second_id = second.bundle_id;

    let merged = SessionKeysBundleMerger::new().merge(&[first, second]);

    assert_eq!(merged.len(), 5);
    let winner = merged
        .get(&SessionKeyIdentifier::new("2", shared))
        .expect("shared identifier should be merged");
    assert_eq!(winner.session_key, "key5");
    assert_eq!(winner.origin.map(|o| o.bundle_id), Some(second_id));
    assert!(merged.iter().all(|(_, key)| key.session_key != "key2"));
}

#[test]
fn test_equal_timestamps_keep_first_seen() {
    let shared = Uuid::new_v4();
    let first = bundle(now(), vec![entry("1", shared, "first", now())]);
    let second = bundle(now(), vec![entry("1", shared, "second", now())]);

    let merger = SessionKeysBundleMerger::new();
    assert_eq!(
        key_of(&merger.merge(&[first.clone(), second.clone()]), "1", shared).as_deref(),
        Some("first")
    );
    assert_eq!(
        key_of(&merger.merge(&[second, first]), "1", shared).as_deref(),
        Some("second")
    );
}

#[test]
fn test_older_bundle_can_supply_freshest_key() {
    let shared = Uuid::new_v4();
    let old_bundle = bundle(
        now() - Duration::days(10),
        vec![entry("1", shared, "fresh", now())],
    );
    let new_bundle = bundle(now(), vec![entry("1", shared, "stale", now() - Duration::days(20))]);
    let old_id = old_bundle.bundle_id;

    let merged = SessionKeysBundleMerger::new().merge(&[new_bundle, old_bundle]);
    let winner = merged
        .get(&SessionKeyIdentifier::new("1", shared))
        .expect("identifier should be merged");

    assert_eq!(winner.session_key, "fresh");
    assert_eq!(winner.origin.map(|o| o.bundle_id), Some(old_id));
    assert_eq!(winner.origin.map(|o| o.modified), Some(now() - Duration::days(10)));
}

#[test]
fn test_no_bundles() {
    assert!(SessionKeysBundleMerger::new().merge(&[]).is_empty());
}

#[test]
fn test_merge_valid_skips_invalid_bundles() {
    let good = bundle(now(), vec![entry("1", Uuid::new_v4(), "key1", now())]);
    let mut wrong_kind = bundle(now(), vec![entry("2", Uuid::new_v4(), "key2", now())]);
    wrong_kind.bundle.kind = "PASSBOLT_METADATA_KEYS".to_string();
    let empty_key = bundle(now(), vec![entry("3", Uuid::new_v4(), "", now())]);

    let merged = SessionKeysBundleMerger::new().merge_valid(&[good, wrong_kind, empty_key]);
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_merge_with_local_keeps_newer_local_keys() {
    let merger = SessionKeysBundleMerger::new();
    let local_only = Uuid::new_v4();
    let refreshed = Uuid::new_v4();
    let edited_locally = Uuid::new_v4();

    let cached = merger.merge(&[bundle(
        now(),
        vec![
            entry("1", local_only, "local-only", now()),
            entry("1", refreshed, "cached", now()),
            entry("1", edited_locally, "local-edit", now() + Duration::hours(1)),
        ],
    )]);

    let fetched = bundle(
        now() + Duration::minutes(30),
        vec![
            entry("1", refreshed, "server", now() + Duration::minutes(30)),
            entry("1", edited_locally, "server-old", now()),
        ],
    );
    let fetched_id = fetched.bundle_id;

    let merged = merger.merge_with_local(&[fetched], &cached);

    assert_eq!(merged.len(), 3);
    assert_eq!(key_of(&merged, "1", refreshed).as_deref(), Some("server"));
    assert_eq!(key_of(&merged, "1", edited_locally).as_deref(), Some("local-edit"));
    assert_eq!(key_of(&merged, "1", local_only).as_deref(), Some("local-only"));

    let local_winner = merged
        .get(&SessionKeyIdentifier::new("1", edited_locally))
        .expect("local key should be kept");
    assert!(local_winner.origin.is_none());
    assert_eq!(
        merged.latest_modified_origin().map(|o| o.bundle_id),
        Some(fetched_id)
    );
}
