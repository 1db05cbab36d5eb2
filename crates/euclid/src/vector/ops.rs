//! Implementations of `std::ops`, and the checked compound operations backing them.

use std::ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::{approx::ApproxEq, Divisor, Error, Result, EPSILON};

use super::Vector;

impl Vector {
    #[track_caller]
    fn assert_in_bounds(&self, index: usize) {
        assert!(
            index < self.dimension(),
            "index {index} out of bounds for vector of dimension {}",
            self.dimension()
        );
    }

    fn check_dimensions(&self, rhs: &Vector) -> Result<()> {
        if self.dimension() == rhs.dimension() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                lhs: self.dimension(),
                rhs: rhs.dimension(),
            })
        }
    }

    fn zip_assign(&mut self, rhs: &Vector, mut f: impl FnMut(&mut f64, f64)) -> Result<&mut Self> {
        self.check_dimensions(rhs)?;
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.iter())
            .for_each(|(lhs, rhs)| f(lhs, *rhs));
        Ok(self)
    }

    /// Element-wise addition of `rhs` to `self`.
    ///
    /// Returns [`Error::DimensionMismatch`] and leaves `self` untouched if the dimensions differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let mut v = vector![1.0, 2.0];
    /// v.try_add_assign(&vector![10.0, 20.0])?;
    /// assert_eq!(v, [11.0, 22.0]);
    ///
    /// assert!(v.try_add_assign(&vector![1.0]).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn try_add_assign(&mut self, rhs: &Vector) -> Result<&mut Self> {
        self.zip_assign(rhs, |lhs, rhs| *lhs += rhs)
    }

    /// Element-wise subtraction of `rhs` from `self`.
    ///
    /// Returns [`Error::DimensionMismatch`] and leaves `self` untouched if the dimensions differ.
    pub fn try_sub_assign(&mut self, rhs: &Vector) -> Result<&mut Self> {
        self.zip_assign(rhs, |lhs, rhs| *lhs -= rhs)
    }

    /// Divides every component by `rhs`.
    ///
    /// Returns [`Error::DivisionByZero`] and leaves `self` untouched if `rhs` is closer to zero
    /// than [`EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let mut v = vector![2.0, 4.0];
    /// v.try_div_assign(2.0)?;
    /// assert_eq!(v, [1.0, 2.0]);
    ///
    /// assert_eq!(
    ///     v.try_div_assign(0.00001).unwrap_err(),
    ///     Error::DivisionByZero(Divisor::Scalar),
    /// );
    /// # Ok::<_, Error>(())
    /// ```
    pub fn try_div_assign(&mut self, rhs: f64) -> Result<&mut Self> {
        if rhs.abs() < EPSILON {
            return Err(Error::DivisionByZero(Divisor::Scalar));
        }
        self.as_mut_slice()
            .iter_mut()
            .for_each(|lhs| *lhs /= rhs);
        Ok(self)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.assert_in_bounds(index);
        &self.components[index]
    }
}

/// Mutable indexing invalidates the cached norm and dot product.
impl IndexMut<usize> for Vector {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.assert_in_bounds(index);
        &mut self.as_mut_slice()[index]
    }
}

/// Component-wise comparison with an absolute tolerance of [`EPSILON`].
///
/// Vectors of different dimensions are never equal.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        components_eq(self.as_slice(), other.as_slice())
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        components_eq(self.as_slice(), other)
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        components_eq(self.as_slice(), other)
    }
}

impl<const N: usize> PartialEq<Vector> for [f64; N] {
    fn eq(&self, other: &Vector) -> bool {
        components_eq(self, other.as_slice())
    }
}

fn components_eq(lhs: &[f64], rhs: &[f64]) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs)
            .all(|(lhs, rhs)| (lhs - rhs).abs() < EPSILON)
}

impl ApproxEq for Vector {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.clone() * -1.0
    }
}

/// Implements a dimension-checked element-wise operator for every combination of owned and
/// borrowed operands, as well as for a `Result<Vector>` on the left-hand side (to allow chaining).
macro_rules! elementwise_op {
    ($trait:ident :: $method:ident => $assign:ident) => {
        impl $trait<&Vector> for Vector {
            type Output = Result<Vector>;

            fn $method(mut self, rhs: &Vector) -> Self::Output {
                self.$assign(rhs)?;
                Ok(self)
            }
        }

        impl $trait<Vector> for Vector {
            type Output = Result<Vector>;

            fn $method(mut self, rhs: Vector) -> Self::Output {
                self.$assign(&rhs)?;
                Ok(self)
            }
        }

        impl $trait<&Vector> for &Vector {
            type Output = Result<Vector>;

            fn $method(self, rhs: &Vector) -> Self::Output {
                self.check_dimensions(rhs)?;
                let mut out = self.clone();
                out.$assign(rhs)?;
                Ok(out)
            }
        }

        impl $trait<Vector> for &Vector {
            type Output = Result<Vector>;

            fn $method(self, rhs: Vector) -> Self::Output {
                self.check_dimensions(&rhs)?;
                let mut out = self.clone();
                out.$assign(&rhs)?;
                Ok(out)
            }
        }

        impl $trait<&Vector> for Result<Vector> {
            type Output = Result<Vector>;

            fn $method(self, rhs: &Vector) -> Self::Output {
                let mut lhs = self?;
                lhs.$assign(rhs)?;
                Ok(lhs)
            }
        }

        impl $trait<Vector> for Result<Vector> {
            type Output = Result<Vector>;

            fn $method(self, rhs: Vector) -> Self::Output {
                let mut lhs = self?;
                lhs.$assign(&rhs)?;
                Ok(lhs)
            }
        }
    };
}

elementwise_op!(Add::add => try_add_assign);
elementwise_op!(Sub::sub => try_sub_assign);

/// Vector-Scalar multiplication (scaling).
impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.clone() * rhs
    }
}

/// Scalar-Vector multiplication (scaling).
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

/// Scalar-Vector multiplication (scaling).
impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs * self
    }
}

/// Vector-Scalar division. Fails if the divisor is closer to zero than [`EPSILON`].
impl Div<f64> for Vector {
    type Output = Result<Vector>;

    fn div(mut self, rhs: f64) -> Self::Output {
        self.try_div_assign(rhs)?;
        Ok(self)
    }
}

/// Vector-Scalar division. Fails if the divisor is closer to zero than [`EPSILON`].
impl Div<f64> for &Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Self::Output {
        self.clone() / rhs
    }
}

// NB: `AddAssign`, `SubAssign` and `DivAssign` are deliberately missing: they cannot report
// errors, so the `try_*_assign` methods take their place.

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vector};

    use super::*;

    #[test]
    fn add_sub() {
        let a = vector![1.0, 2.0, 3.0];
        let b = vector![0.5, 0.5, -3.0];

        assert_eq!((&a + &b).unwrap(), [1.5, 2.5, 0.0]);
        assert_eq!((&a - &b).unwrap(), [0.5, 1.5, 6.0]);
        assert_eq!((a.clone() + b.clone()).unwrap(), [1.5, 2.5, 0.0]);
        assert_eq!((&a + b.clone()).unwrap(), [1.5, 2.5, 0.0]);
        assert_eq!((a.clone() - &b).unwrap(), [0.5, 1.5, 6.0]);

        assert_eq!((vector![] + vector![]).unwrap(), vector![]);
    }

    #[test]
    fn chaining() {
        let three = Vector::splat(3, 3.0);
        let sum = (&three + &three + &three).unwrap();
        assert_eq!(sum.to_string(), "[9 9 9]");

        let mixed = (&three + &three - &three).unwrap() * 2.0 / 3.0;
        assert_eq!(mixed.unwrap(), [2.0, 2.0, 2.0]);
    }

    #[test]
    fn dimension_mismatch() {
        let err = Error::DimensionMismatch { lhs: 4, rhs: 3 };
        assert_eq!(Vector::new(4) + Vector::new(3), Err(err));
        assert_eq!(&Vector::new(4) - &Vector::new(3), Err(err));

        // The first error is carried through the rest of the expression.
        let chained = Vector::new(4) + Vector::new(3) + Vector::new(2);
        assert_eq!(chained, Err(err));

        let mut v = vector![1.0, 2.0, 3.0, 4.0];
        assert_eq!(v.try_sub_assign(&Vector::new(3)).unwrap_err(), err);
        assert_eq!(v, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn compound_returns_self() {
        let mut v = vector![1.0, 1.0];
        v.try_add_assign(&vector![1.0, 2.0])
            .unwrap()
            .try_sub_assign(&vector![0.5, 0.5])
            .unwrap()
            .try_div_assign(0.5)
            .unwrap();
        assert_eq!(v, [3.0, 5.0]);
    }

    #[test]
    fn scale() {
        let v = vector![1.0, -2.0];
        assert_eq!(&v * 3.0, [3.0, -6.0]);
        assert_eq!(3.0 * &v, [3.0, -6.0]);
        assert_eq!(-0.5 * v.clone(), [-0.5, 1.0]);

        let mut w = v.clone();
        w *= 0.0;
        assert_eq!(w, [0.0, 0.0]);

        assert_eq!((&v / 2.0).unwrap(), [0.5, -1.0]);
        assert_eq!(vector![] * 5.0, vector![]);
    }

    #[test]
    fn division_by_zero() {
        let err = Err(Error::DivisionByZero(Divisor::Scalar));
        let v = vector![1.0, 2.0];
        assert_eq!(&v / 0.0, err);
        assert_eq!(&v / 0.00009, err);
        assert_eq!(&v / -0.00009, err);
        assert_eq!(vector![] / 0.0, err);
        assert!((&v / 0.0001).is_ok());
    }

    #[test]
    fn neg() {
        let v = vector![1.0, -2.0, 0.0];
        assert_eq!(-&v, [-1.0, 2.0, 0.0]);
        assert_eq!(-v, [-1.0, 2.0, 0.0]);
        assert_eq!(-vector![], vector![]);
    }

    #[test]
    fn eq() {
        assert_eq!(vector![1.0, 2.0], vector![1.00009, 1.99991]);
        assert_ne!(vector![1.0, 2.0], vector![1.0002, 2.0]);
        assert_ne!(vector![1.0, 2.0], vector![1.0, 2.0, 3.0]);
        assert_ne!(vector![], vector![0.0]);
        assert_eq!(vector![], vector![]);
        assert_ne!(vector![f64::NAN], vector![f64::NAN]);

        let rounding = (0..10).fold(0.0, |acc, _| acc + 0.1);
        assert_eq!(vector![rounding], vector![1.0]);
    }

    #[test]
    fn approx() {
        assert_approx_eq!(vector![1.0, 2.0], vector![1.00001, 2.0]);
        assert_approx_eq!(vector![100.0], vector![101.0], rel = 0.01);
        crate::assert_approx_ne!(vector![1.0], vector![1.0, 1.0], abs = 1000.0);
    }
}
