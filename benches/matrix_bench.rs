//! Matrix kernel benchmarks: elementwise, transpose, and multiply.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simdmat::matrix::matmul::matmul_reference;
use simdmat::Matrix;

fn square(n: usize) -> Matrix<f64> {
    let data: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_elementwise(c: &mut Criterion) {
    let a = square(1000);
    let b = square(1000);

    c.bench_function("matrix_add_1000", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)).unwrap())
    });
    c.bench_function("matrix_mul_scalar_1000", |bench| {
        bench.iter(|| black_box(&a).mul_scalar(black_box(2.0)))
    });
    c.bench_function("matrix_sum_1000", |bench| {
        bench.iter(|| black_box(&a).sum())
    });
}

fn bench_transpose(c: &mut Criterion) {
    for n in [256, 1024] {
        let a = square(n);
        c.bench_function(&format!("matrix_transpose_{n}"), |bench| {
            bench.iter(|| black_box(&a).transpose())
        });
    }
}

fn bench_matmul(c: &mut Criterion) {
    for n in [64, 256, 512] {
        let a = square(n);
        let b = square(n);

        c.bench_function(&format!("matmul_simd_{n}"), |bench| {
            bench.iter(|| black_box(&a).matmul(black_box(&b)).unwrap())
        });
        c.bench_function(&format!("matmul_scalar_{n}"), |bench| {
            bench.iter(|| {
                let mut out = vec![0.0; n * n];
                matmul_reference(a.as_slice(), b.as_slice(), &mut out, n, n, n);
                out
            })
        });
    }
}

criterion_group!(benches, bench_elementwise, bench_transpose, bench_matmul);
criterion_main!(benches);
