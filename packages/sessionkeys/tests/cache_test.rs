//! Memory cache tests

use chrono::{Duration, TimeZone, Utc};
use keyward_sessionkeys::{
    DecryptedSessionKeysBundleModel, SessionKeyEntry, SessionKeyIdentifier, SessionKeysBundle,
    SessionKeysBundleMerger, SessionKeysMemoryCache, Timestamp,
};
use std::sync::Arc;
use uuid::Uuid;

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

fn bundle(modified: Timestamp, entries: Vec<SessionKeyEntry>) -> DecryptedSessionKeysBundleModel {
    DecryptedSessionKeysBundleModel {
        bundle_id: Uuid::new_v4(),
        created: modified,
        modified,
        bundle: SessionKeysBundle::new(entries),
    }
}

fn resource_entry(id: Uuid, key: &str, modified: Timestamp) -> SessionKeyEntry {
    SessionKeyEntry::new("Resource", id, key, modified)
}

#[test]
fn test_unpopulated_cache() {
    let cache = SessionKeysMemoryCache::new();

    assert!(cache.get().is_none());
    assert!(cache.is_empty());
    assert!(cache.find_latest_modified_origin_bundle().is_none());
    assert!(cache.was_initial_cache_empty());
    assert!(!cache.is_locally_modified());
    assert!(cache.session_key(&SessionKeyIdentifier::resource(Uuid::new_v4())).is_none());
}

#[test]
fn test_latest_origin_follows_bundle_modified_time() {
    let older = bundle(
        now() - Duration::days(1),
        vec![resource_entry(Uuid::new_v4(), "a", now() + Duration::days(5))],
    );
    let newer = bundle(now(), vec![resource_entry(Uuid::new_v4(), "b", now() - Duration::days(5))]);
    let newer_id = newer.bundle_id;

    let cache = SessionKeysMemoryCache::new();
    cache.set(SessionKeysBundleMerger::new().merge(&[older, newer]));

    let latest = cache
        .find_latest_modified_origin_bundle()
        .expect("cache should have an origin");
    assert_eq!(latest.bundle_id, newer_id);
    assert_eq!(latest.modified, now());
    assert!(!cache.was_initial_cache_empty());
}

#[test]
fn test_origin_of_dropped_keys_is_not_reported() {
    let shared = Uuid::new_v4();
    let newest_bundle = bundle(now(), vec![resource_entry(shared, "loser", now() - Duration::days(2))]);
    let older_bundle = bundle(
        now() - Duration::days(3),
        vec![resource_entry(shared, "winner", now())],
    );
    let older_id = older_bundle.bundle_id;

    let cache = SessionKeysMemoryCache::new();
    cache.set(SessionKeysBundleMerger::new().merge(&[newest_bundle, older_bundle]));

    assert_eq!(
        cache.find_latest_modified_origin_bundle().map(|o| o.bundle_id),
        Some(older_id)
    );
}

#[test]
fn test_equal_origin_times_pick_first_identifier() {
    let first_id = Uuid::from_u128(1);
    let second_id = Uuid::from_u128(2);
    // Input order is the reverse of identifier order
    let supplies_second = bundle(now(), vec![resource_entry(second_id, "second", now())]);
    let supplies_first = bundle(now(), vec![resource_entry(first_id, "first", now())]);
    let expected = supplies_first.bundle_id;

    let cache = SessionKeysMemoryCache::new();
    cache.set(SessionKeysBundleMerger::new().merge(&[supplies_second, supplies_first]));

    let latest = cache
        .find_latest_modified_origin_bundle()
        .expect("cache should have an origin");
    assert_eq!(latest.bundle_id, expected);
    assert_eq!(latest.modified, now());
}

#[test]
fn test_set_stores_shared_merge_without_copy() {
    let merged = Arc::new(SessionKeysBundleMerger::new().merge(&[bundle(
        now(),
        vec![resource_entry(Uuid::new_v4(), "key", now())],
    )]));

    let cache = SessionKeysMemoryCache::new();
    cache.set(Arc::clone(&merged));

    let cached = cache.get().expect("cache should be populated");
    assert!(Arc::ptr_eq(&cached, &merged));
}

#[test]
fn test_set_replaces_wholesale() {
    let merger = SessionKeysBundleMerger::new();
    let first_id = Uuid::new_v4();
    let second_id = Uuid::new_v4();

    let cache = SessionKeysMemoryCache::new();
    cache.set(merger.merge(&[bundle(now(), vec![resource_entry(first_id, "one", now())])]));
    cache.set(merger.merge(&[bundle(now(), vec![resource_entry(second_id, "two", now())])]));

    let cached = cache.get().expect("cache should be populated");
    assert_eq!(cached.len(), 1);
    assert!(cache.session_key(&SessionKeyIdentifier::resource(first_id)).is_none());
    assert_eq!(
        cache.session_key(&SessionKeyIdentifier::resource(second_id)).as_deref(),
        Some("two")
    );
}

#[test]
fn test_session_key_is_unmarshalled() {
    let id = Uuid::new_v4();
    let cache = SessionKeysMemoryCache::new();
    cache.set(
        SessionKeysBundleMerger::new().merge(&[bundle(now(), vec![resource_entry(id, "9:ABCDEF", now())])]),
    );

    assert_eq!(
        cache.session_key(&SessionKeyIdentifier::resource(id)).as_deref(),
        Some("ABCDEF")
    );
}

#[test]
fn test_put_marks_cache_locally_modified() {
    let fetched_id = Uuid::new_v4();
    let created_id = Uuid::new_v4();
    let input = bundle(now(), vec![resource_entry(fetched_id, "fetched", now())]);
    let origin_id = input.bundle_id;

    let cache = SessionKeysMemoryCache::new();
    cache.set(SessionKeysBundleMerger::new().merge(&[input]));
    let before = cache.get().expect("cache should be populated");

    cache.put(SessionKeyIdentifier::resource(created_id), "9:NEWKEY");

    assert!(cache.is_locally_modified());
    assert_eq!(cache.len(), 2);
    assert_eq!(before.len(), 1);
    assert_eq!(
        cache.session_key(&SessionKeyIdentifier::resource(created_id)).as_deref(),
        Some("NEWKEY")
    );
    assert_eq!(
        cache.find_latest_modified_origin_bundle().map(|o| o.bundle_id),
        Some(origin_id)
    );
}

#[test]
fn test_put_into_unpopulated_cache() {
    let cache = SessionKeysMemoryCache::new();
    cache.put(SessionKeyIdentifier::resource(Uuid::new_v4()), "key");

    assert_eq!(cache.len(), 1);
    assert!(cache.was_initial_cache_empty());
    assert!(cache.is_locally_modified());
    assert!(cache.find_latest_modified_origin_bundle().is_none());
}

#[test]
fn test_set_resets_local_modification() {
    let cache = SessionKeysMemoryCache::new();
    cache.put(SessionKeyIdentifier::resource(Uuid::new_v4()), "key");
    cache.set(SessionKeysBundleMerger::new().merge(&[]));

    assert!(!cache.is_locally_modified());
    assert!(cache.was_initial_cache_empty());
    assert!(cache.get().is_some());
}

#[test]
fn test_clear() {
    let cache = SessionKeysMemoryCache::new();
    cache.set(SessionKeysBundleMerger::new().merge(&[bundle(
        now(),
        vec![resource_entry(Uuid::new_v4(), "key", now())],
    )]));
    cache.clear();

    assert!(cache.get().is_none());
    assert!(cache.find_latest_modified_origin_bundle().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_never_see_partial_merge() {
    const KEYS: usize = 200;
    let cache = Arc::new(SessionKeysMemoryCache::new());
    let merger = SessionKeysBundleMerger::new();

    let writer = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move {
            for round in 0..50 {
                let entries = (0..KEYS)
                    .map(|i| resource_entry(Uuid::new_v4(), &format!("{round}-{i}"), now()))
                    .collect();
                cache.set(merger.merge(&[bundle(now(), entries)]));
                tokio::task::yield_now().await;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                for _ in 0..500 {
                    if let Some(merged) = cache.get() {
                        assert_eq!(merged.len(), KEYS);
                        let round = merged
                            .iter()
                            .next()
                            .and_then(|(_, key)| key.session_key.split('-').next().map(str::to_string));
                        assert!(merged
                            .iter()
                            .all(|(_, key)| key.session_key.split('-').next().map(str::to_string) == round));
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    writer.await.expect("writer should finish");
    for reader in readers {
        reader.await.expect("reader should finish");
    }
}
