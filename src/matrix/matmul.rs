//! SIMD matrix multiplication with i-k-j loop order.

use crate::simd::SimdNum;

/// Matrix multiply: `C += A * B`, SIMD over the columns of each result row.
///
/// Loop order is i-k-j: for each row `i` of A and each contraction index
/// `k`, `A[i,k]` is broadcast into a register and fused-multiply-added
/// across row `k` of B into row `i` of C. All three operands are walked
/// with unit stride, so no transpose of B is needed and every inner-loop
/// access is sequential; the `n % LANES` column remainder is finished by
/// a scalar tail. For each `(i,j)` the accumulation runs over `k`
/// ascending, which keeps float results reproducible for a fixed lane
/// width.
///
/// Matrices are row-major: A is m×k, B is k×n, C is m×n. Slice lengths
/// must match the dimensions.
pub fn matmul<T: SimdNum>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    let lanes = T::LANES;
    let n_main = n - n % lanes;

    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            let va = T::splat(a_ip);

            for j in (0..n_main).step_by(lanes) {
                let vb = T::load(&b_row[j..j + lanes]);
                let vc = T::load(&c_row[j..j + lanes]);
                T::store(T::lane_mul_add(va, vb, vc), &mut c_row[j..j + lanes]);
            }
            for j in n_main..n {
                c_row[j] += a_ip * b_row[j];
            }
        }
    }
}

/// Scalar i-k-j multiply: `C += A * B`.
///
/// The correctness baseline the SIMD kernel is tested against. Same loop
/// order and accumulation order, no lane split.
pub fn matmul_reference<T: SimdNum>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    k: usize,
) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            for j in 0..n {
                c[i * n + j] += a_ip * b[p * n + j];
            }
        }
    }
}
