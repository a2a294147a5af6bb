//! In-place elementwise kernels: binary, scalar-broadcast, and unary.

use crate::simd::SimdNum;

/// Two-phase loop for `dst[i] = op(dst[i], src[i])`.
#[inline]
fn binary_assign<T, L, S>(dst: &mut [T], src: &[T], lane: L, scalar: S)
where
    T: SimdNum,
    L: Fn(T::Reg, T::Reg) -> T::Reg,
    S: Fn(&mut T, T),
{
    debug_assert_eq!(dst.len(), src.len());

    let lanes = T::LANES;
    let main = dst.len() - dst.len() % lanes;

    for i in (0..main).step_by(lanes) {
        let a = T::load(&dst[i..i + lanes]);
        let b = T::load(&src[i..i + lanes]);
        T::store(lane(a, b), &mut dst[i..i + lanes]);
    }
    for i in main..dst.len() {
        scalar(&mut dst[i], src[i]);
    }
}

/// Two-phase loop for `dst[i] = op(dst[i], value)`, broadcasting once.
#[inline]
fn broadcast_assign<T, L, S>(dst: &mut [T], value: T, lane: L, scalar: S)
where
    T: SimdNum,
    L: Fn(T::Reg, T::Reg) -> T::Reg,
    S: Fn(&mut T, T),
{
    let lanes = T::LANES;
    let main = dst.len() - dst.len() % lanes;
    let splat = T::splat(value);

    for i in (0..main).step_by(lanes) {
        let a = T::load(&dst[i..i + lanes]);
        T::store(lane(a, splat), &mut dst[i..i + lanes]);
    }
    for i in main..dst.len() {
        scalar(&mut dst[i], value);
    }
}

/// Two-phase loop for `dst[i] = op(dst[i])`.
#[inline]
fn unary_assign<T, L, S>(dst: &mut [T], lane: L, scalar: S)
where
    T: SimdNum,
    L: Fn(T::Reg) -> T::Reg,
    S: Fn(&mut T),
{
    let lanes = T::LANES;
    let main = dst.len() - dst.len() % lanes;

    for i in (0..main).step_by(lanes) {
        let a = T::load(&dst[i..i + lanes]);
        T::store(lane(a), &mut dst[i..i + lanes]);
    }
    for i in main..dst.len() {
        scalar(&mut dst[i]);
    }
}

/// `dst[i] += src[i]`. Lengths must already match.
pub fn add_assign<T: SimdNum>(dst: &mut [T], src: &[T]) {
    binary_assign(dst, src, T::lane_add, |d, s| *d += s);
}

/// `dst[i] -= src[i]`. Lengths must already match.
pub fn sub_assign<T: SimdNum>(dst: &mut [T], src: &[T]) {
    binary_assign(dst, src, T::lane_sub, |d, s| *d -= s);
}

/// `dst[i] *= src[i]`. Lengths must already match.
pub fn mul_assign<T: SimdNum>(dst: &mut [T], src: &[T]) {
    binary_assign(dst, src, T::lane_mul, |d, s| *d *= s);
}

/// `dst[i] += value`.
pub fn add_scalar_assign<T: SimdNum>(dst: &mut [T], value: T) {
    broadcast_assign(dst, value, T::lane_add, |d, s| *d += s);
}

/// `dst[i] -= value`.
pub fn sub_scalar_assign<T: SimdNum>(dst: &mut [T], value: T) {
    broadcast_assign(dst, value, T::lane_sub, |d, s| *d -= s);
}

/// `dst[i] *= value`.
pub fn mul_scalar_assign<T: SimdNum>(dst: &mut [T], value: T) {
    broadcast_assign(dst, value, T::lane_mul, |d, s| *d *= s);
}

/// `dst[i] = dst[i] * dst[i]`.
pub fn square_assign<T: SimdNum>(dst: &mut [T]) {
    unary_assign(dst, |r| T::lane_mul(r, r), |d| *d *= *d);
}

/// `dst[i] = |dst[i]|`.
pub fn abs_assign<T: SimdNum>(dst: &mut [T]) {
    unary_assign(dst, T::lane_abs, |d| *d = d.abs());
}
