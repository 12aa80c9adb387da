//! # Gate Function Benchmarks
//!
//! Measures sigmoid, one_plus, softmax and argsort over vectors.
//!
//! Run: `cargo bench --bench gates_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ndarray::{Array1, Array2, Axis};
use ntm_addressing::prelude::*;

/// Benchmark scalar gates
fn bench_scalar_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_gates");

    group.bench_function("sigmoid", |b| {
        b.iter(|| black_box(sigmoid(black_box(0.73))))
    });

    group.bench_function("one_plus", |b| {
        b.iter(|| black_box(one_plus(black_box(0.73))))
    });

    group.finish();
}

/// Benchmark vector gates by length
fn bench_vector_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_gates");

    for size in [16, 256, 4096].iter() {
        let x = Array1::from_shape_fn(*size, |i| ((i * 7) % 13) as f64 - 6.0);

        group.bench_with_input(BenchmarkId::new("sigmoid_array", size), &x, |b, x| {
            b.iter(|| black_box(sigmoid_array(x)))
        });

        group.bench_with_input(BenchmarkId::new("softmax", size), &x, |b, x| {
            b.iter(|| black_box(softmax(x)))
        });

        let values = x.to_vec();
        group.bench_with_input(BenchmarkId::new("argsort", size), &values, |b, v| {
            b.iter(|| black_box(argsort(v)))
        });
    }

    group.finish();
}

/// Benchmark row-wise softmax on a batch
fn bench_softmax_axis(c: &mut Criterion) {
    let x = Array2::from_shape_fn((64, 128), |(i, j)| ((i + j) % 9) as f64 * 0.5);

    c.bench_function("softmax_axis_64x128", |b| {
        b.iter(|| black_box(softmax_axis(&x, Axis(1))))
    });
}

criterion_group!(
    benches,
    bench_scalar_gates,
    bench_vector_gates,
    bench_softmax_axis,
);

criterion_main!(benches);
