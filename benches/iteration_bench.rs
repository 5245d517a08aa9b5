//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparseview::{DenseViewIterator, IndexValueIterator, SparseVector};

fn striped_input(len: usize, stride: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if i % stride == 0 { (i + 1) as f64 } else { 0.0 })
        .collect()
}

fn benchmark_dense_view(c: &mut Criterion) {
    let dense = striped_input(100_000, 10);

    c.bench_function("dense_view_10pct_density", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            let mut iter = DenseViewIterator::new(black_box(dense.as_slice()));
            while iter.is_valid() {
                sum += iter.get().value;
                iter.advance();
            }
            black_box(sum)
        });
    });

    let zeros = vec![0.0_f64; 100_000];
    c.bench_function("dense_view_all_zero_skip", |b| {
        b.iter(|| black_box(DenseViewIterator::new(black_box(zeros.as_slice())).is_valid()));
    });
}

fn benchmark_dot(c: &mut Criterion) {
    let dense = striped_input(100_000, 10);
    let vector = SparseVector::from_dense(&dense);
    let operand: Vec<f64> = (0..100_000).map(|i| i as f64).collect();

    c.bench_function("sparse_dot_100k", |b| {
        b.iter(|| black_box(vector.dot(black_box(&operand))));
    });
}

criterion_group!(benches, benchmark_dense_view, benchmark_dot);
criterion_main!(benches);
