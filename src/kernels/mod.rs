//! SIMD slice kernels shared by vectors and matrices.
//!
//! Every kernel here follows the same two-phase shape: a vector body that
//! walks the slice in lane-width chunks, then a scalar tail for the
//! `len % LANES` leftover elements. The loop is written once per kernel
//! family (binary, scalar-broadcast, unary, reduction) and the concrete
//! operation is plugged in, so tail handling can't drift between
//! operations.
//!
//! Kernels operate on raw slices and assume their lengths already match;
//! shape validation happens in the `Vector`/`Matrix` layer before any
//! kernel is reached.

pub mod elementwise;
pub mod reduce;
