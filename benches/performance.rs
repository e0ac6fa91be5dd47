//! Performance benchmarks for the feature state store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feature_state::{FeatureStateStore, TileFeatureState};
use serde_json::json;

/// Benchmark update conversion with varying member counts
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_state");

    for members in [1, 10, 100] {
        let input = serde_json::Value::Object(
            (0..members)
                .map(|i| (format!("key{}", i), json!(i)))
                .collect(),
        );

        group.bench_with_input(BenchmarkId::new("members", members), &input, |b, input| {
            let mut store = FeatureStateStore::new();
            b.iter(|| {
                store.update_state(Some("poi"), "1", black_box(input));
            });
        });
    }

    group.finish();
}

/// Benchmark one frame: pending updates coalesced and fanned out to tiles
fn bench_coalesce(c: &mut Criterion) {
    let mut group = c.benchmark_group("coalesce_changes");

    for tile_count in [1, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("tiles", tile_count),
            &tile_count,
            |b, &tile_count| {
                let mut store = FeatureStateStore::new();
                let mut tiles: Vec<TileFeatureState> =
                    (0..tile_count).map(|_| TileFeatureState::new()).collect();

                b.iter(|| {
                    for i in 0..100 {
                        store.update_state(
                            Some("poi"),
                            &i.to_string(),
                            &json!({"hover": i % 2 == 0}),
                        );
                    }
                    store.coalesce_changes(tiles.iter_mut());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark reads that merge pending and committed state
fn bench_get_state(c: &mut Criterion) {
    let mut store = FeatureStateStore::new();
    for i in 0..1000 {
        store.update_state(Some("poi"), &i.to_string(), &json!({"rank": i, "hover": true}));
    }
    store.coalesce_changes(std::iter::empty::<TileFeatureState>());
    for i in 0..1000 {
        store.update_state(Some("poi"), &i.to_string(), &json!({"selected": true}));
    }

    c.bench_function("get_state", |b| {
        b.iter(|| black_box(store.get_state(Some("poi"), black_box("500"))));
    });
}

criterion_group!(benches, bench_update, bench_coalesce, bench_get_state);
criterion_main!(benches);
