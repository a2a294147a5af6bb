//! Vector arithmetic: kernel-backed methods plus operator sugar.
//!
//! Each binary operation comes in two families. The allocating form
//! (`add`, `sub`, `mul`, ...) clones `self`, mutates the clone, and leaves
//! both inputs untouched. The in-place form (`*_in_place`, `square`,
//! `abs`) mutates `self` and returns `&mut Self` so calls can chain.
//! Operators on references are a thin layer over the allocating family;
//! compound assignment (`+=` and friends) maps to the in-place family.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::Vector;
use crate::error::Error;
use crate::kernels::{elementwise, reduce};
use crate::simd::SimdNum;

impl<T: SimdNum> Vector<T> {
    fn check_same_len(&self, other: &Self) -> Result<(), Error> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::length_mismatch(self.len(), other.len()))
        }
    }

    /// Elementwise sum, allocating. Neither operand is mutated.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_len(other)?;
        let mut out = self.clone();
        elementwise::add_assign(&mut out.data, &other.data);
        Ok(out)
    }

    /// Elementwise sum into `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ; `self` is left
    /// unchanged on error.
    pub fn add_in_place(&mut self, other: &Self) -> Result<&mut Self, Error> {
        self.check_same_len(other)?;
        elementwise::add_assign(&mut self.data, &other.data);
        Ok(self)
    }

    /// Elementwise difference, allocating.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_len(other)?;
        let mut out = self.clone();
        elementwise::sub_assign(&mut out.data, &other.data);
        Ok(out)
    }

    /// Elementwise difference into `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<&mut Self, Error> {
        self.check_same_len(other)?;
        elementwise::sub_assign(&mut self.data, &other.data);
        Ok(self)
    }

    /// Elementwise product, allocating.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_len(other)?;
        let mut out = self.clone();
        elementwise::mul_assign(&mut out.data, &other.data);
        Ok(out)
    }

    /// Elementwise product into `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    pub fn mul_in_place(&mut self, other: &Self) -> Result<&mut Self, Error> {
        self.check_same_len(other)?;
        elementwise::mul_assign(&mut self.data, &other.data);
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

    /// Squares every element in place, returning `self` for chaining.
    pub fn square(&mut self) -> &mut Self {
        elementwise::square_assign(&mut self.data);
        self
    }

    /// Replaces every element with its absolute value in place.
    pub fn abs(&mut self) -> &mut Self {
        elementwise::abs_assign(&mut self.data);
        self
    }

    /// Dot product `Σ self[i] * other[i]`.
    ///
    /// Accumulated lanewise with one horizontal reduction at the end, so
    /// the float summation order differs from a scalar left-to-right loop;
    /// compare with a tolerance.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdmat::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0]);
    /// let b = Vector::from_slice(&[5.0f64, 4.0, 3.0, 2.0, 1.0]);
    /// assert_eq!(a.dot(&b).unwrap(), 35.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T, Error> {
        self.check_same_len(other)?;
        Ok(reduce::dot(&self.data, &other.data))
    }

    /// Sum of all elements. Zero for an empty vector.
    #[must_use]
    pub fn sum(&self) -> T {
        reduce::sum(&self.data)
    }

    /// Smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyOperand`] on an empty vector.
    pub fn min(&self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyOperand { op: "min" });
        }
        Ok(reduce::min(&self.data))
    }

    /// Largest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyOperand`] on an empty vector.
    pub fn max(&self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyOperand { op: "max" });
        }
        Ok(reduce::max(&self.data))
    }

    /// Arithmetic mean, `sum / len`. Zero for an empty vector.
    ///
    /// The length is converted to `T` with a saturating conversion first;
    /// if that division produces NaN, the truncating conversion is tried
    /// instead. Integer element types use integer division.
    #[must_use]
    pub fn mean(&self) -> T {
        if self.is_empty() {
            return T::ZERO;
        }
        let total = self.sum();
        let mean = total / T::from_usize_saturating(self.len());
        if !mean.is_nan() {
            return mean;
        }
        total / T::from_usize_truncating(self.len())
    }
}

// Operator sugar. Reference operators clone then mutate the clone; they
// panic on a length mismatch (use the named methods for a Result).

impl<T: SimdNum> Add for &Vector<T> {
    type Output = Vector<T>;

    /// # Panics
    ///
    /// Panics if the lengths differ.
    fn add(self, rhs: Self) -> Vector<T> {
        Vector::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: SimdNum> Sub for &Vector<T> {
    type Output = Vector<T>;

    /// # Panics
    ///
    /// Panics if the lengths differ.
    fn sub(self, rhs: Self) -> Vector<T> {
        Vector::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: SimdNum> Mul for &Vector<T> {
    type Output = Vector<T>;

    /// Elementwise product.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    fn mul(self, rhs: Self) -> Vector<T> {
        Vector::mul(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: SimdNum> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: T) -> Vector<T> {
        self.add_scalar(rhs)
    }
}

impl<T: SimdNum> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: T) -> Vector<T> {
        self.sub_scalar(rhs)
    }
}

impl<T: SimdNum> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.mul_scalar(rhs)
    }
}

impl<T: SimdNum> AddAssign<&Vector<T>> for Vector<T> {
    /// # Panics
    ///
    /// Panics if the lengths differ.
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.add_in_place(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: SimdNum> SubAssign<&Vector<T>> for Vector<T> {
    /// # Panics
    ///
    /// Panics if the lengths differ.
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.sub_in_place(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: SimdNum> MulAssign<&Vector<T>> for Vector<T> {
    /// # Panics
    ///
    /// Panics if the lengths differ.
    fn mul_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.mul_in_place(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: SimdNum> AddAssign<T> for Vector<T> {
    fn add_assign(&mut self, rhs: T) {
        self.add_scalar_in_place(rhs);
    }
}

impl<T: SimdNum> SubAssign<T> for Vector<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_scalar_in_place(rhs);
    }
}

impl<T: SimdNum> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_scalar_in_place(rhs);
    }
}
