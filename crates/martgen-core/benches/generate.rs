//! Benchmarks for the generation pipeline — the sales fact loop is the hot
//! path.
//!
//! Measures rows-per-second throughput for `generate_dataset` at different
//! transaction counts.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use martgen_core::{generate_dataset, GenerationParams};

fn bench_generate(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let mut group = c.benchmark_group("generate_dataset");
    for transactions in [1_000usize, 10_000, 50_000] {
        let params = GenerationParams {
            transactions,
            ..GenerationParams::new(42, today)
        };

        group.throughput(Throughput::Elements(transactions as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(transactions),
            &params,
            |b, params| {
                b.iter(|| generate_dataset(params, None).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
