//! Dense row-major matrix container and its kernels.
//!
//! [`Matrix`] owns one flat buffer of `width * height` scalars interpreted
//! as `height` rows of `width` elements; `(row, col)` lives at
//! `buffer[row * width + col]`. Elementwise arithmetic and the flat-buffer
//! sum reuse the shared slice kernels; [`transpose`] and [`matmul`] carry
//! the cache-blocked and SIMD implementations.

pub mod matmul;
mod ops;
pub mod transpose;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::Error;
use crate::simd::SimdNum;
use crate::vector::Vector;

/// A dense matrix of numeric values, row-major.
///
/// Width and height are fixed at construction; elements are mutable by
/// `(row, col)` index. Cloning deep-copies the buffer.
///
/// # Examples
///
/// ```
/// use simdmat::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: SimdNum> Matrix<T> {
    /// Creates a zero-filled matrix with `height` rows and `width` columns.
    #[must_use]
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            data: vec![T::ZERO; width * height],
            width,
            height,
        }
    }

    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `data.len() != height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self, Error> {
        if data.len() != width * height {
            return Err(Error::ShapeMismatch {
                expected: format!("{} elements ({height}x{width})", width * height),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a matrix by copying a slice of equal-length rows.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the rows have differing lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, Error> {
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.len() != width {
                return Err(Error::length_mismatch(width, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            width,
            height: rows.len(),
        })
    }

    /// The `n`×`n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, i.e. (rows, columns).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Checked element access.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.height && col < self.width {
            Some(&mut self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Copies row `row` out as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[must_use]
    pub fn row(&self, row: usize) -> Vector<T> {
        assert!(
            row < self.height,
            "row {row} out of bounds for {} rows",
            self.height
        );
        Vector::from_slice(&self.data[row * self.width..(row + 1) * self.width])
    }

    /// The flat row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The flat row-major buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copies the buffer out as a [`Vector`] in row-major order.
    #[must_use]
    pub fn flatten(&self) -> Vector<T> {
        Vector::from_slice(&self.data)
    }
}

impl<T: SimdNum> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.height && col < self.width,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.height,
            self.width
        );
        &self.data[row * self.width + col]
    }
}

impl<T: SimdNum> IndexMut<(usize, usize)> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.height && col < self.width,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.height,
            self.width
        );
        &mut self.data[row * self.width + col]
    }
}

/// Renders one space-separated row per line. Diagnostic output only.
impl<T: SimdNum> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[row * self.width + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
