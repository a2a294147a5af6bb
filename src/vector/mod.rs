//! Dense vector container.
//!
//! [`Vector`] owns a contiguous buffer of scalars. The container itself does
//! no arithmetic; all computation lives in the kernel layer and is surfaced
//! through the methods in [`ops`](self).

mod ops;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::simd::SimdNum;

/// A fixed-length vector of numeric values.
///
/// The length is set at construction and never changes; elements are
/// mutable by index. Cloning deep-copies the buffer.
///
/// # Examples
///
/// ```
/// use simdmat::Vector;
///
/// let v = Vector::from_slice(&[1.0f64, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: SimdNum> Vector<T> {
    /// Creates a zero-filled vector of the given length.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::ZERO; len],
        }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Creates a vector from an owned buffer without copying.
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        Self { data: values }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// The underlying buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The underlying buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: SimdNum> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: SimdNum> IndexMut<usize> for Vector<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T: SimdNum> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: SimdNum> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

/// Renders as a bracketed, comma-separated list: `[1, 2, 3]`.
///
/// Diagnostic output only, not a persisted format.
impl<T: SimdNum> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
