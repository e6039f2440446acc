//! Makani Benchmarks
//!
//! This module contains benchmarks for the two index backends. The
//! benchmarks are implemented using the Criterion framework, which
//! provides statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use makani_lib::data_structures::{AirportIndex, HiloHash, KoaTrie};
use makani_lib::model::DelayRecord;

/// Deterministic synthetic dataset: `n` records spread over distinct
/// 3-letter codes and 12 months.
fn synthetic_records(n: usize) -> Vec<DelayRecord> {
    use makani_lib::model::MONTHS;

    (0..n)
        .map(|i| {
            let code: String = [
                (b'A' + ((i / 676) % 26) as u8) as char,
                (b'A' + ((i / 26) % 26) as u8) as char,
                (b'A' + (i % 26) as u8) as char,
            ]
            .iter()
            .collect();
            DelayRecord {
                name: format!("{code} International"),
                code,
                month: MONTHS[i % 12].to_string(),
                year: "2015".to_string(),
                carrier: (i % 7) as u64,
                late: (i % 5) as u64,
                navis: (i % 3) as u64,
                security: 0,
                weather: (i % 2) as u64,
                canceled: (i % 4) as u64,
                delayed: (i % 30) as u64,
                total_flights: 100 + (i % 400) as u64,
            }
        })
        .collect()
}

/// Benchmark index construction for both backends.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1_000, 10_000] {
        let records = synthetic_records(size);

        group.bench_with_input(BenchmarkId::new("koa_trie", size), &records, |b, records| {
            b.iter(|| {
                let mut trie = KoaTrie::new();
                for record in records {
                    trie.insert(&record.code, record.clone()).unwrap();
                }
                black_box(trie.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("hilo_hash", size), &records, |b, records| {
            b.iter(|| {
                let mut hash = HiloHash::new();
                for record in records {
                    hash.insert(&record.code, record.clone()).unwrap();
                }
                black_box(hash.len())
            });
        });
    }

    group.finish();
}

/// Benchmark point lookups against both backends.
fn bench_index_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_lookup");

    let records = synthetic_records(10_000);
    let codes: Vec<String> = records.iter().map(|r| r.code.clone()).collect();

    let mut trie = KoaTrie::new();
    let mut hash = HiloHash::new();
    for record in &records {
        trie.insert(&record.code, record.clone()).unwrap();
        hash.insert(&record.code, record.clone()).unwrap();
    }

    group.bench_function("koa_trie", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(trie.lookup(code).unwrap());
            }
        });
    });

    group.bench_function("hilo_hash", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(hash.lookup(code).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_index_lookup);
criterion_main!(benches);
