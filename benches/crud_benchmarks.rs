use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;
use wbtree::WBTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_insert_{order}"));

        group.bench_function(BenchmarkId::new("WBTreeMap", N), |b| {
            b.iter(|| {
                let mut map = WBTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let wb_map: WBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        let mut group = c.benchmark_group(format!("map_get_{order}"));

        group.bench_function(BenchmarkId::new("WBTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in &keys {
                    if let Some(&v) = wb_map.get(&k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in &keys {
                    if let Some(&v) = bt_map.get(&k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let wb_map: WBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        let mut group = c.benchmark_group(format!("map_remove_{order}"));

        group.bench_function(BenchmarkId::new("WBTreeMap", N), |b| {
            b.iter_batched(
                || wb_map.clone(),
                |mut map| {
                    for &k in &keys {
                        map.remove(&k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || bt_map.clone(),
                |mut map| {
                    for &k in &keys {
                        map.remove(&k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

fn bench_map_least(c: &mut Criterion) {
    let wb_map: WBTreeMap<i64, i64> = random_keys(N).into_iter().map(|k| (k, k)).collect();
    let mut group = c.benchmark_group("map_least");

    for n in [1, 16, 256] {
        group.bench_function(BenchmarkId::new("least_keys", n), |b| {
            b.iter(|| wb_map.least_keys(black_box(n)));
        });

        group.bench_function(BenchmarkId::new("keys_take", n), |b| {
            b.iter(|| wb_map.keys().take(black_box(n)).collect::<Vec<_>>());
        });
    }

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(map_benches, bench_map_insert, bench_map_get, bench_map_remove, bench_map_least,);

criterion_main!(map_benches);
