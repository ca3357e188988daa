//! Benchmark for pair enumeration.
//!
//! Measures eager collection, counting, and early exit of the lazy scan.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fp_gym::pairs::{count_pairs, find_all_pairs, find_first_pair, solve_with_limit};
use std::hint::black_box;

fn benchmark_find_all_pairs(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_all_pairs");

    for size in [100_i64, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("size", size), &values, |bencher, values| {
            bencher.iter(|| black_box(find_all_pairs(values, black_box(size))));
        });
    }

    group.finish();
}

fn benchmark_count_pairs(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("count_pairs");

    for size in [100_i64, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("size", size), &values, |bencher, values| {
            bencher.iter(|| black_box(count_pairs(values, black_box(size))));
        });
    }

    group.finish();
}

fn benchmark_early_exit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("early_exit");
    let values: Vec<i64> = (0..100_000).collect();

    // The first pair completes near the start of the input.
    group.bench_function("find_first_pair", |bencher| {
        bencher.iter(|| black_box(find_first_pair(&values, black_box(11))));
    });

    group.bench_function("solve_with_limit_10", |bencher| {
        bencher.iter(|| {
            black_box(solve_with_limit(&values, black_box(101), Some(10)).count())
        });
    });

    group.bench_function("lazy_range", |bencher| {
        bencher.iter(|| black_box(find_first_pair(0_i64.., black_box(11))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_find_all_pairs,
    benchmark_count_pairs,
    benchmark_early_exit
);
criterion_main!(benches);
