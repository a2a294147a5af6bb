//! Matrix arithmetic: kernel-backed methods plus operator sugar.
//!
//! Elementwise arithmetic and the sum reduction treat the backing buffer
//! as one long vector and reuse the shared slice kernels. The same
//! allocating / in-place duality as [`Vector`](crate::vector::Vector)
//! applies: allocating forms never mutate an operand, in-place forms
//! mutate `self` and return it for chaining. `A * B` on references is
//! the matrix product.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::{matmul, transpose, Matrix};
use crate::error::Error;
use crate::kernels::{elementwise, reduce};
use crate::simd::SimdNum;

impl<T: SimdNum> Matrix<T> {
    fn check_same_shape(&self, other: &Self) -> Result<(), Error> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(Error::shape_mismatch(self.shape(), other.shape()))
        }
    }

    /// Elementwise sum, allocating. Neither operand is mutated.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if width or height differ.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_shape(other)?;
        let mut out = self.clone();
        elementwise::add_assign(&mut out.data, &other.data);
        Ok(out)
    }

    /// Elementwise sum into `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if width or height differ; `self` is left
    /// unchanged on error.
    pub fn add_in_place(&mut self, other: &Self) -> Result<&mut Self, Error> {
        self.check_same_shape(other)?;
        elementwise::add_assign(&mut self.data, &other.data);
        Ok(self)
    }

    /// Elementwise difference, allocating.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if width or height differ.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_shape(other)?;
        let mut out = self.clone();
        elementwise::sub_assign(&mut out.data, &other.data);
        Ok(out)
    }

    /// Elementwise difference into `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if width or height differ.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<&mut Self, Error> {
        self.check_same_shape(other)?;
        elementwise::sub_assign(&mut self.data, &other.data);
        Ok(self)
    }

    /// Adds a scalar to every element, allocating.
    #[must_use]
    pub fn add_scalar(&self, value: T) -> Self {
        let mut out = self.clone();
        elementwise::add_scalar_assign(&mut out.data, value);
        out
    }

    /// Adds a scalar to every element of `self`.
    pub fn add_scalar_in_place(&mut self, value: T) -> &mut Self {
        elementwise::add_scalar_assign(&mut self.data, value);
        self
    }

    /// Subtracts a scalar from every element, allocating.
    #[must_use]
    pub fn sub_scalar(&self, value: T) -> Self {
        let mut out = self.clone();
        elementwise::sub_scalar_assign(&mut out.data, value);
        out
    }

    /// Subtracts a scalar from every element of `self`.
    pub fn sub_scalar_in_place(&mut self, value: T) -> &mut Self {
        elementwise::sub_scalar_assign(&mut self.data, value);
        self
    }

    /// Multiplies every element by a scalar, allocating.
    #[must_use]
    pub fn mul_scalar(&self, value: T) -> Self {
        let mut out = self.clone();
        elementwise::mul_scalar_assign(&mut out.data, value);
        out
    }

    /// Multiplies every element of `self` by a scalar.
    pub fn mul_scalar_in_place(&mut self, value: T) -> &mut Self {
        elementwise::mul_scalar_assign(&mut self.data, value);
        self
    }

    /// Sum of all elements, reducing the flat buffer with the vector sum
    /// kernel.
    #[must_use]
    pub fn sum(&self) -> T {
        reduce::sum(&self.data)
    }

    /// The transpose, as a new `width`×`height` matrix.
    ///
    /// Cache-blocked; see [`transpose::transpose`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simdmat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.width, self.height);
        transpose::transpose(&self.data, &mut out.data, self.height, self.width);
        out
    }

    /// Matrix product, as a new `self.height`×`other.width` matrix.
    ///
    /// SIMD i-k-j kernel; see [`matmul::matmul`].
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `self.width != other.height`. Checked
    /// before any computation; no result is produced on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdmat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[vec![1.0f64, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[vec![5.0f64, 6.0], vec![7.0, 8.0]]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c, Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap());
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self, Error> {
        if self.width != other.height {
            return Err(Error::ShapeMismatch {
                expected: format!("inner dimension {}", self.width),
                actual: format!("inner dimension {}", other.height),
            });
        }
        let mut out = Self::zeros(self.height, other.width);
        matmul::matmul(
            &self.data,
            &other.data,
            &mut out.data,
            self.height,
            other.width,
            self.width,
        );
        Ok(out)
    }
}

// Operator sugar, clone-then-mutate like the vector operators. `*` between
// matrices is the matrix product, `*` with a scalar broadcasts.

impl<T: SimdNum> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ.
    fn add(self, rhs: Self) -> Matrix<T> {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: SimdNum> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ.
    fn sub(self, rhs: Self) -> Matrix<T> {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: SimdNum> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// Matrix product.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree.
    fn mul(self, rhs: Self) -> Matrix<T> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: SimdNum> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: T) -> Matrix<T> {
        self.add_scalar(rhs)
    }
}

impl<T: SimdNum> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: T) -> Matrix<T> {
        self.sub_scalar(rhs)
    }
}

impl<T: SimdNum> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.mul_scalar(rhs)
    }
}

impl<T: SimdNum> AddAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if the shapes differ.
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.add_in_place(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: SimdNum> SubAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if the shapes differ.
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.sub_in_place(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: SimdNum> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, rhs: T) {
        self.add_scalar_in_place(rhs);
    }
}

impl<T: SimdNum> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_scalar_in_place(rhs);
    }
}

impl<T: SimdNum> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_scalar_in_place(rhs);
    }
}
