use simdmat::matrix::matmul::{matmul, matmul_reference};
use simdmat::matrix::transpose::{transpose, BLOCK};
use simdmat::Matrix;

fn assert_matrices_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-8,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

// ============================================================
// Matrix multiply: hand-checked results
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    let c = a.matmul(&b).unwrap();
    assert_eq!(
        c,
        Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap()
    );
}

#[test]
fn test_2x3_times_3x2() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();

    let c = a.matmul(&b).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_multiply_by_identity() {
    for n in [1, 3, 4, 5, 8, 17] {
        let data: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();
        let a = Matrix::from_vec(n, n, data).unwrap();

        assert_eq!(a.matmul(&Matrix::identity(n)).unwrap(), a, "size {}", n);
        assert_eq!(Matrix::identity(n).matmul(&a).unwrap(), a, "size {}", n);
    }
}

#[test]
fn test_integer_multiply_is_exact() {
    let a = Matrix::from_rows(&[vec![1i32, 2, 3], vec![4, 5, 6]]).unwrap();
    let b = Matrix::from_rows(&[vec![7i32, 8], vec![9, 10], vec![11, 12]]).unwrap();

    let c = a.matmul(&b).unwrap();
    assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
}

// ============================================================
// Matrix multiply: SIMD kernel vs scalar reference
// ============================================================

#[test]
fn test_small_odd_sizes() {
    let test_sizes = [
        (3, 3, 3),
        (5, 5, 5),
        (7, 7, 7),
        (3, 5, 7),
        (7, 3, 5),
        (11, 13, 17),
    ];

    for (m, n, k) in test_sizes {
        let a: Vec<f64> = (0..m * k).map(|i| (i % 10) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 10) as f64).collect();

        let mut c_ref = vec![0.0; m * n];
        let mut c_simd = vec![0.0; m * n];

        matmul_reference(&a, &b, &mut c_ref, m, n, k);
        matmul(&a, &b, &mut c_simd, m, n, k);

        assert_matrices_equal(&c_ref, &c_simd, &format!("{}x{}x{}", m, n, k));
    }
}

#[test]
fn test_lane_boundary_sizes() {
    // f64 lanes = 4: widths one below, at, and above lane multiples.
    let test_sizes = [3, 4, 5, 7, 8, 9, 15, 16, 17];

    for size in test_sizes {
        let a: Vec<f64> = (0..size * size).map(|i| (i % 10) as f64).collect();
        let b: Vec<f64> = (0..size * size).map(|i| (i % 10) as f64).collect();

        let mut c_ref = vec![0.0; size * size];
        let mut c_simd = vec![0.0; size * size];

        matmul_reference(&a, &b, &mut c_ref, size, size, size);
        matmul(&a, &b, &mut c_simd, size, size, size);

        assert_matrices_equal(&c_ref, &c_simd, &format!("lane_boundary_{}", size));
    }
}

#[test]
fn test_non_square_matrices() {
    let test_cases = [
        (32, 64, 48),  // wide result
        (64, 32, 48),  // tall result
        (100, 50, 75), // odd sizes
        (48, 48, 100), // deep k
        (13, 17, 19),  // primes
    ];

    for (m, n, k) in test_cases {
        let a: Vec<f64> = (0..m * k).map(|i| (i % 10) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 10) as f64).collect();

        let mut c_ref = vec![0.0; m * n];
        let mut c_simd = vec![0.0; m * n];

        matmul_reference(&a, &b, &mut c_ref, m, n, k);
        matmul(&a, &b, &mut c_simd, m, n, k);

        assert_matrices_equal(&c_ref, &c_simd, &format!("non_square_{}x{}x{}", m, n, k));
    }
}

#[test]
fn test_kernel_accumulates_into_c() {
    let size = 16;
    let a: Vec<f64> = (0..size * size).map(|i| (i % 10) as f64).collect();
    let b: Vec<f64> = (0..size * size).map(|i| (i % 7) as f64).collect();

    // Start with non-zero C
    let mut c_ref = vec![5.0; size * size];
    let mut c_simd = vec![5.0; size * size];

    matmul_reference(&a, &b, &mut c_ref, size, size, size);
    matmul(&a, &b, &mut c_simd, size, size, size);

    assert_matrices_equal(&c_ref, &c_simd, "accumulation");
    assert!(c_simd[0] > 5.0, "should accumulate, not overwrite");
}

#[test]
fn test_inner_dimension_mismatch_is_an_error() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let b: Matrix<f64> = Matrix::zeros(4, 2);

    assert!(a.matmul(&b).is_err());
}

// ============================================================
// Transpose
// ============================================================

#[test]
fn test_transpose_2x3() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let t = m.transpose();

    assert_eq!(t.shape(), (3, 2));
    assert_eq!(
        t,
        Matrix::from_rows(&[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap()
    );
}

#[test]
fn test_double_transpose_is_identity() {
    for (h, w) in [(1, 1), (2, 3), (4, 4), (5, 7), (31, 33)] {
        let data: Vec<f64> = (0..h * w).map(|i| i as f64).collect();
        let m = Matrix::from_vec(h, w, data).unwrap();

        assert_eq!(m.transpose().transpose(), m, "{}x{}", h, w);
    }
}

#[test]
fn test_blocked_transpose_matches_naive_across_tile_edges() {
    // Sizes straddling the block edge, where the tile clamping matters.
    let sizes = [
        (BLOCK - 1, BLOCK + 1),
        (BLOCK, BLOCK),
        (BLOCK + 1, BLOCK - 1),
        (2 * BLOCK + 3, 5),
        (5, 2 * BLOCK + 3),
    ];

    for (rows, cols) in sizes {
        let src: Vec<f64> = (0..rows * cols).map(|i| (i % 251) as f64).collect();

        let mut naive = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                naive[j * rows + i] = src[i * cols + j];
            }
        }

        let mut blocked = vec![0.0; rows * cols];
        transpose(&src, &mut blocked, rows, cols);

        assert_matrices_equal(&naive, &blocked, &format!("transpose_{}x{}", rows, cols));
    }
}

// ============================================================
// Combined properties
// ============================================================

#[test]
fn test_transpose_of_product() {
    // (A * B)^T == B^T * A^T
    let m = 9;
    let n = 7;
    let k = 5;
    let a_data: Vec<f64> = (0..m * k).map(|i| (i % 10) as f64).collect();
    let b_data: Vec<f64> = (0..k * n).map(|i| (i % 8) as f64).collect();
    let a = Matrix::from_vec(m, k, a_data).unwrap();
    let b = Matrix::from_vec(k, n, b_data).unwrap();

    let lhs = a.matmul(&b).unwrap().transpose();
    let rhs = b.transpose().matmul(&a.transpose()).unwrap();

    assert_matrices_equal(lhs.as_slice(), rhs.as_slice(), "product_transpose");
}
