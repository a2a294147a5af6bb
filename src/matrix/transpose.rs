//! Cache-blocked matrix transpose.

use crate::simd::SimdNum;

/// Square tile edge for the blocked traversal.
///
/// A tuning constant, not a semantic parameter: any edge produces the same
/// output. 128 keeps a source tile and a destination tile of f64 inside L2
/// on common parts.
pub const BLOCK: usize = 128;

/// Transpose a row-major matrix: `dst[j * rows + i] = src[i * cols + j]`.
///
/// A naive double loop writes `dst` with stride `rows`, missing cache on
/// nearly every store once the matrix outgrows L1. Walking the index space
/// tile by tile keeps both the source reads and the destination writes
/// inside a small working set.
///
/// `src` must hold `rows * cols` elements and `dst` the same.
///
/// # Example
///
/// ```
/// use simdmat::matrix::transpose::transpose;
///
/// let src = vec![1.0f64, 2.0, 3.0,   // 2×3 matrix
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];        // will be 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,     // 3×2 matrix
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose<T: SimdNum>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);

    for i0 in (0..rows).step_by(BLOCK) {
        let i_end = (i0 + BLOCK).min(rows);
        for j0 in (0..cols).step_by(BLOCK) {
            let j_end = (j0 + BLOCK).min(cols);
            for i in i0..i_end {
                for j in j0..j_end {
                    dst[j * rows + i] = src[i * cols + j];
                }
            }
        }
    }
}
