//! Benchmarks for bundle merging

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keyward_sessionkeys::{
    DecryptedSessionKeysBundleModel, SessionKeyEntry, SessionKeysBundle, SessionKeysBundleMerger,
};
use uuid::Uuid;

/// `bundles` bundles with `keys` entries each; half of every bundle overlaps the first
fn fixture(bundles: usize, keys: usize) -> Vec<DecryptedSessionKeysBundleModel> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let shared: Vec<Uuid> = (0..keys / 2).map(|_| Uuid::new_v4()).collect();

    (0..bundles)
        .map(|b| {
            let modified = base + Duration::minutes(b as i64);
            let entries = (0..keys)
                .map(|k| {
                    let id = shared.get(k).copied().unwrap_or_else(Uuid::new_v4);
                    SessionKeyEntry::new(
                        "Resource",
                        id,
                        format!("9:{b:04X}{k:08X}"),
                        modified + Duration::seconds(k as i64),
                    )
                })
                .collect();
            DecryptedSessionKeysBundleModel {
                bundle_id: Uuid::new_v4(),
                created: modified,
                modified,
                bundle: SessionKeysBundle::new(entries),
            }
        })
        .collect()
}

fn benchmark_merge(c: &mut Criterion) {
    let merger = SessionKeysBundleMerger::new();
    let mut group = c.benchmark_group("merge");

    for (bundles, keys) in [(1, 1_000), (4, 1_000), (16, 1_000), (4, 10_000)] {
        let input = fixture(bundles, keys);
        group.throughput(Throughput::Elements((bundles * keys) as u64));
        group.bench_with_input(
            BenchmarkId::new("merge", format!("{bundles}x{keys}")),
            &input,
            |b, input| b.iter(|| std::hint::black_box(merger.merge(input))),
        );
        group.bench_with_input(
            BenchmarkId::new("merge_valid", format!("{bundles}x{keys}")),
            &input,
            |b, input| b.iter(|| std::hint::black_box(merger.merge_valid(input))),
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_merge);
criterion_main!(benches);
