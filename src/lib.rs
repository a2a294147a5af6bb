//! Vector and matrix arithmetic with portable SIMD, generic over the
//! element type.
//!
//! The same two-phase loop drives every kernel: a SIMD body over
//! lane-width chunks, then a scalar tail for whatever `len % LANES`
//! leaves over. The lane width comes from the element type at compile
//! time through the [`SimdNum`] trait, so one generic kernel serves
//! `f32`, `f64` and all the fixed-width integers. Transpose is
//! cache-blocked and matrix multiply runs in i-k-j loop order, so every
//! inner-loop memory access stays sequential.
//!
//! ## Usage
//!
//! ```
//! use simdmat::{Matrix, Vector};
//!
//! let a = Vector::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0]);
//! let b = Vector::from_slice(&[5.0f64, 4.0, 3.0, 2.0, 1.0]);
//!
//! assert_eq!((&a + &b).as_slice(), &[6.0; 5]);
//! assert_eq!(a.dot(&b).unwrap(), 35.0);
//!
//! let m = Matrix::from_rows(&[vec![1.0f64, 2.0], vec![3.0, 4.0]]).unwrap();
//! let p = m.matmul(&Matrix::identity(2)).unwrap();
//! assert_eq!(p, m);
//! ```
//!
//! ## What's inside
//!
//! - [`Vector`] and [`Matrix`] containers over contiguous row-major
//!   buffers
//! - Elementwise add/sub/mul with both allocating and in-place families,
//!   plus operator sugar on top
//! - Reductions: sum, dot, min, max, mean
//! - Cache-blocked transpose and SIMD i-k-j matrix multiply
//! - Shape mismatches and empty-operand reductions reported as [`Error`]
//!   before anything is mutated
//!
//! Requires nightly for `portable_simd`.

#![feature(portable_simd)]

pub mod error;
pub mod kernels;
pub mod matrix;
pub mod simd;
pub mod vector;

pub use error::Error;
pub use matrix::Matrix;
pub use simd::SimdNum;
pub use vector::Vector;
