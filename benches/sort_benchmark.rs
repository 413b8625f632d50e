//! Criterion benchmarks for the naive, bubble and reference sorts.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

#[path = "../src/bubble_sort.rs"]
mod bubble_sort;
#[path = "../src/naive_sort.rs"]
mod naive_sort;
#[path = "../src/reference_sort.rs"]
mod reference_sort;

const SCALES: [usize; 8] = [10, 20, 50, 100, 200, 500, 1000, 5000];

/// Generate random test data of given size
fn generate_random_data(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(0..=1000)).collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort");

    for size in SCALES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| {
                    reference_sort::sort(black_box(&mut data));
                    data
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |data| naive_sort::sort(black_box(data)),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("bubble", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| {
                    bubble_sort::sort(black_box(&mut data));
                    data
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
