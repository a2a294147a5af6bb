//! Error types for shape and operand precondition failures.

use thiserror::Error;

/// Errors reported by vector and matrix operations.
///
/// Every variant is a precondition failure raised before any operand is
/// mutated; there is no partial computation to observe after an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes disagree: vector lengths differ, matrix dimensions
    /// differ, or a matrix product's inner dimensions do not line up.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape the operation required, e.g. `"len 3"` or `"2x3"`.
        expected: String,
        /// Shape it was given.
        actual: String,
    },

    /// A reduction that needs at least one element was given none.
    #[error("{op} requires a non-empty operand")]
    EmptyOperand {
        /// Name of the reduction, e.g. `"min"`.
        op: &'static str,
    },
}

impl Error {
    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        Error::ShapeMismatch {
            expected: format!("len {expected}"),
            actual: format!("len {actual}"),
        }
    }

    pub(crate) fn shape_mismatch(
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Error::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}
