//! Reduction kernels: sum, dot, min, max.

use crate::simd::SimdNum;

/// Sum of all elements.
///
/// Partial sums accumulate lanewise in a single register over the vector
/// body; one horizontal reduction collapses them, then the scalar tail is
/// added. For a fixed length and lane width the summation order is
/// deterministic, but it is not the left-to-right scalar order, so float
/// comparisons against a scalar reference need a tolerance.
pub fn sum<T: SimdNum>(values: &[T]) -> T {
    let lanes = T::LANES;
    let main = values.len() - values.len() % lanes;

    let mut acc = T::lane_zero();
    for i in (0..main).step_by(lanes) {
        acc = T::lane_add(acc, T::load(&values[i..i + lanes]));
    }

    let mut total = T::lane_sum(acc);
    for &v in &values[main..] {
        total += v;
    }
    total
}

/// Dot product `Σ a[i] * b[i]`. Lengths must already match.
///
/// Same accumulation pattern as [`sum`]: lanewise multiply-accumulate over
/// the body, one horizontal reduction, scalar tail last.
pub fn dot<T: SimdNum>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());

    let lanes = T::LANES;
    let main = a.len() - a.len() % lanes;

    let mut acc = T::lane_zero();
    for i in (0..main).step_by(lanes) {
        let va = T::load(&a[i..i + lanes]);
        let vb = T::load(&b[i..i + lanes]);
        acc = T::lane_mul_add(va, vb, acc);
    }

    let mut total = T::lane_sum(acc);
    for i in main..a.len() {
        total += a[i] * b[i];
    }
    total
}

/// Smallest element. `values` must be non-empty.
///
/// A plain scalar scan seeded from element 0; min/max don't benefit from
/// the lane split the way the arithmetic reductions do.
pub fn min<T: SimdNum>(values: &[T]) -> T {
    debug_assert!(!values.is_empty());

    let mut m = values[0];
    for &v in &values[1..] {
        m = m.min(v);
    }
    m
}

/// Largest element. `values` must be non-empty.
pub fn max<T: SimdNum>(values: &[T]) -> T {
    debug_assert!(!values.is_empty());

    let mut m = values[0];
    for &v in &values[1..] {
        m = m.max(v);
    }
    m
}
