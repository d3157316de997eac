use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linvec::core::{VectorArithmetic, VectorNorms};
use linvec::vector::{DenseVector, SparseVector};

fn bench_norms(c: &mut Criterion) {
    let n = 100_000;
    let dense = DenseVector::from_vec((0..n).map(|i| (i as f64).sin()).collect());
    let sparse =
        SparseVector::from_pairs(n, (0..n).step_by(100).map(|i| (i, (i as f64).cos()))).unwrap();

    c.bench_function("dense l2", |b| b.iter(|| black_box(&dense).l2_norm()));
    c.bench_function("sparse l2 (1% active)", |b| b.iter(|| black_box(&sparse).l2_norm()));
    c.bench_function("sparse cached l2", |b| b.iter(|| black_box(&sparse).compute_l2_norm()));
}

fn bench_axpy(c: &mut Criterion) {
    let n = 100_000;
    let sparse = SparseVector::from_pairs(n, (0..n).step_by(100).map(|i| (i, 1.0))).unwrap();
    let mut w = DenseVector::<f64>::new(n);

    c.bench_function("dense += 0.5 * sparse", |b| {
        b.iter(|| {
            w.plus_equals_vector_times(black_box(&sparse), 0.5).unwrap();
        })
    });
}

criterion_group!(benches, bench_norms, bench_axpy);
criterion_main!(benches);
