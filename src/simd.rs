//! Portable lane-op abstraction over `std::simd`.
//!
//! Every kernel in this crate is written once against [`SimdNum`] and works
//! for any element type that implements it. The trait carries the lane width
//! for the type, the register type, and the handful of lane operations the
//! kernels need (broadcast, load/store, arithmetic, horizontal sum), plus the
//! scalar-side pieces used by reductions and tail loops.
//!
//! Lane counts are sized so one register spans 256 bits (4×f64, 8×f32,
//! 32×i8, ...). On targets with narrower vector units `std::simd` lowers a
//! register to multiple hardware ops; on wider ones the compiler can still
//! unroll. Either way the results are identical, only throughput changes.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};
use std::simd::num::{SimdFloat, SimdInt, SimdUint};
use std::simd::{Simd, StdFloat};

/// A numeric element type with a known SIMD lane width.
///
/// Implemented for `f32`, `f64` and the eight fixed-width integer types.
/// The `lane_*` methods operate on whole registers; the remaining methods
/// are the scalar operations the tail loops and reductions need.
pub trait SimdNum:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Debug
    + Display
{
    /// Number of scalars one register holds for this type.
    const LANES: usize;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// One hardware register's worth of lanes.
    type Reg: Copy;

    /// Broadcasts a scalar into every lane.
    fn splat(value: Self) -> Self::Reg;

    /// Loads the first `LANES` elements of `src` into a register.
    ///
    /// `src` must hold at least `LANES` elements.
    fn load(src: &[Self]) -> Self::Reg;

    /// Stores a register into the first `LANES` elements of `dst`.
    ///
    /// `dst` must hold at least `LANES` elements.
    fn store(reg: Self::Reg, dst: &mut [Self]);

    /// Lanewise `a + b`.
    fn lane_add(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Lanewise `a - b`.
    fn lane_sub(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Lanewise `a * b`.
    fn lane_mul(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Lanewise `acc + a * b`. Fused for floats, multiply-then-add for
    /// integers.
    fn lane_mul_add(a: Self::Reg, b: Self::Reg, acc: Self::Reg) -> Self::Reg;

    /// Lanewise absolute value. Identity for unsigned types; wraps at
    /// `MIN` for signed integers (`|i8::MIN|` is `i8::MIN`).
    fn lane_abs(reg: Self::Reg) -> Self::Reg;

    /// Horizontal sum of all lanes.
    fn lane_sum(reg: Self::Reg) -> Self;

    /// A register of zeros, the accumulator seed for reductions.
    #[inline]
    fn lane_zero() -> Self::Reg {
        Self::splat(Self::ZERO)
    }

    /// Scalar minimum.
    fn min(self, other: Self) -> Self;

    /// Scalar maximum.
    fn max(self, other: Self) -> Self;

    /// Scalar absolute value. Identity for unsigned types; wraps at `MIN`
    /// for signed integers, matching [`SimdNum::lane_abs`].
    fn abs(self) -> Self;

    /// True only for a floating-point NaN.
    fn is_nan(self) -> bool;

    /// Converts a length to `Self`, clamping at `Self`'s range limit.
    fn from_usize_saturating(n: usize) -> Self;

    /// Converts a length to `Self`, wrapping on overflow.
    fn from_usize_truncating(n: usize) -> Self;
}

macro_rules! simd_num_common {
    ($ty:ty, $lanes:expr) => {
        const LANES: usize = $lanes;

        type Reg = Simd<$ty, $lanes>;

        #[inline]
        fn splat(value: Self) -> Self::Reg {
            Simd::splat(value)
        }

        #[inline]
        fn load(src: &[Self]) -> Self::Reg {
            Simd::from_slice(src)
        }

        #[inline]
        fn store(reg: Self::Reg, dst: &mut [Self]) {
            reg.copy_to_slice(dst);
        }

        #[inline]
        fn lane_add(a: Self::Reg, b: Self::Reg) -> Self::Reg {
            a + b
        }

        #[inline]
        fn lane_sub(a: Self::Reg, b: Self::Reg) -> Self::Reg {
            a - b
        }

        #[inline]
        fn lane_mul(a: Self::Reg, b: Self::Reg) -> Self::Reg {
            a * b
        }

        #[inline]
        fn lane_sum(reg: Self::Reg) -> Self {
            reg.reduce_sum()
        }
    };
}

macro_rules! simd_num_int_common {
    ($ty:ty) => {
        #[inline]
        fn min(self, other: Self) -> Self {
            Ord::min(self, other)
        }

        #[inline]
        fn max(self, other: Self) -> Self {
            Ord::max(self, other)
        }

        #[inline]
        fn is_nan(self) -> bool {
            false
        }

        #[inline]
        fn from_usize_saturating(n: usize) -> Self {
            <$ty>::try_from(n).unwrap_or(<$ty>::MAX)
        }

        #[inline]
        fn from_usize_truncating(n: usize) -> Self {
            n as $ty
        }
    };
}

macro_rules! impl_simd_num_float {
    ($ty:ty, $lanes:expr) => {
        impl SimdNum for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            simd_num_common!($ty, $lanes);

            #[inline]
            fn lane_mul_add(a: Self::Reg, b: Self::Reg, acc: Self::Reg) -> Self::Reg {
                a.mul_add(b, acc)
            }

            #[inline]
            fn lane_abs(reg: Self::Reg) -> Self::Reg {
                SimdFloat::abs(reg)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }

            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline]
            fn from_usize_saturating(n: usize) -> Self {
                n as $ty
            }

            #[inline]
            fn from_usize_truncating(n: usize) -> Self {
                n as $ty
            }
        }
    };
}

macro_rules! impl_simd_num_int {
    ($ty:ty, $lanes:expr) => {
        impl SimdNum for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            simd_num_common!($ty, $lanes);

            #[inline]
            fn lane_mul_add(a: Self::Reg, b: Self::Reg, acc: Self::Reg) -> Self::Reg {
                a * b + acc
            }

            #[inline]
            fn lane_abs(reg: Self::Reg) -> Self::Reg {
                SimdInt::abs(reg)
            }

            #[inline]
            fn abs(self) -> Self {
                <$ty>::wrapping_abs(self)
            }

            simd_num_int_common!($ty);
        }
    };
}

macro_rules! impl_simd_num_uint {
    ($ty:ty, $lanes:expr) => {
        impl SimdNum for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            simd_num_common!($ty, $lanes);

            #[inline]
            fn lane_mul_add(a: Self::Reg, b: Self::Reg, acc: Self::Reg) -> Self::Reg {
                a * b + acc
            }

            #[inline]
            fn lane_abs(reg: Self::Reg) -> Self::Reg {
                reg
            }

            #[inline]
            fn abs(self) -> Self {
                self
            }

            simd_num_int_common!($ty);
        }
    };
}

impl_simd_num_float!(f32, 8);
impl_simd_num_float!(f64, 4);

impl_simd_num_int!(i8, 32);
impl_simd_num_int!(i16, 16);
impl_simd_num_int!(i32, 8);
impl_simd_num_int!(i64, 4);

impl_simd_num_uint!(u8, 32);
impl_simd_num_uint!(u16, 16);
impl_simd_num_uint!(u32, 8);
impl_simd_num_uint!(u64, 4);
