//! # Content Addressing Benchmarks
//!
//! Measures cosine similarity and content lookup across memory sizes.
//! Lookup is O(N·W): one similarity per memory row.
//!
//! Run: `cargo bench --bench addressing_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use ndarray::{Array1, Array2};
use ntm_addressing::prelude::*;

fn memory(rows: usize, width: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, width), |(i, j)| ((i * 31 + j * 17) % 23) as f64 / 23.0 - 0.5)
}

/// Benchmark cosine similarity by vector width
fn bench_cosine_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosine_similarity");

    for width in [16, 64, 256, 1024].iter() {
        let a = Array1::from_shape_fn(*width, |i| (i as f64).sin());
        let b = Array1::from_shape_fn(*width, |i| (i as f64).cos());

        group.bench_with_input(
            BenchmarkId::new("width", width),
            &(a, b),
            |bench, (a, b)| {
                bench.iter(|| black_box(cosine_similarity(a, b)))
            }
        );
    }

    group.finish();
}

/// Benchmark content lookup by memory size
fn bench_content_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_lookup");
    let width = 64;

    for rows in [16, 128, 1024].iter() {
        let m = memory(*rows, width);
        let key = m.row(rows / 2).to_owned();

        group.throughput(Throughput::Elements((*rows * width) as u64));
        group.bench_with_input(
            BenchmarkId::new("rows", rows),
            &(m, key),
            |bench, (m, key)| {
                bench.iter(|| black_box(content_lookup(m, key, black_box(10.0))))
            }
        );
    }

    group.finish();
}

/// Benchmark lookup through an explicit context
fn bench_context_lookup(c: &mut Criterion) {
    let m = memory(128, 64);
    let key = m.row(3).to_owned();
    let ctx = AddressingContext::from_raw_strength(m.view(), key, 2.0);

    c.bench_function("context_lookup_128x64", |b| {
        b.iter(|| black_box(ctx.lookup()))
    });
}

criterion_group!(
    benches,
    bench_cosine_similarity,
    bench_content_lookup,
    bench_context_lookup,
);

criterion_main!(benches);
