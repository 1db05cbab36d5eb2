//! Approximate equality.
//!
//! [`Vector`][crate::Vector]'s [`PartialEq`] impl already compares components with a fixed
//! absolute tolerance of [`EPSILON`]. This module provides the configurable version of that
//! comparison, mostly for use in tests via [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne].

mod impls;

use std::fmt;

use crate::EPSILON;

/// Method and tolerance of an approximate comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Values are equal if their absolute difference is at most the given value.
    ///
    /// Suited to values close to zero, and to values that may have opposing signs.
    Abs(f64),
    /// Values are equal if their absolute difference is at most the given value times the larger
    /// of their magnitudes.
    ///
    /// Suited to values far away from zero. Any non-zero value only compares equal to `0.0` with a
    /// relative tolerance of at least 1.0.
    Rel(f64),
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Abs(tol) => write!(f, "absolute tolerance {tol}"),
            Tolerance::Rel(tol) => write!(f, "relative tolerance {tol}"),
        }
    }
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their components are,
/// and if they have the same shape.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The tolerance used by [`assert_approx_eq!`][crate::assert_approx_eq] when none is given.
    const DEFAULT_TOLERANCE: Tolerance = Tolerance::Abs(EPSILON);

    /// Performs an *absolute comparison* of `self` and `other`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: f64) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: f64) -> bool;

    /// Compares `self` and `other` using the method and tolerance described by `tolerance`.
    fn approx_eq(&self, other: &Rhs, tolerance: Tolerance) -> bool {
        match tolerance {
            Tolerance::Abs(tol) => self.abs_diff_eq(other, tol),
            Tolerance::Rel(tol) => self.rel_diff_eq(other, tol),
        }
    }
}

#[doc(hidden)]
pub fn default_tolerance<T: ApproxEq + ?Sized>(_: &T) -> Tolerance {
    T::DEFAULT_TOLERANCE
}

#[doc(hidden)]
#[track_caller]
pub fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    op: &str,
    tolerance: Tolerance,
) -> ! {
    panic!(
        r#"assertion `left {op} right` failed ({tolerance})
  left: {left:?}
 right: {right:?}"#
    )
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_approx {
    ($expect_equal:literal, $op:literal, $lhs:expr, $rhs:expr, $tolerance:expr) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                let tolerance = $tolerance(lhs);
                if $crate::approx::ApproxEq::approx_eq(lhs, rhs, tolerance) != $expect_equal {
                    $crate::approx::assert_failed(&lhs, &rhs, $op, tolerance);
                }
            }
        }
    };
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Without a tolerance argument, the type's [`ApproxEq::DEFAULT_TOLERANCE`] is used. `abs = x`
/// and `rel = x` select an absolute or relative comparison with tolerance `x` instead.
///
/// Also see [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// # Examples
///
/// ```
/// # use euclid::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0, abs = 1.0);
/// assert_approx_eq!(100.0, 99.0, rel = 0.01);
/// assert_approx_eq!(vector![0.6, 0.8], vector![3.0, 4.0].unit()?);
/// # Ok::<_, Error>(())
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__assert_approx!(true, "==", $lhs, $rhs, $crate::approx::default_tolerance)
    };
    ($lhs:expr, $rhs:expr, abs = $tol:expr $(,)?) => {
        $crate::__assert_approx!(true, "==", $lhs, $rhs, |_| $crate::approx::Tolerance::Abs($tol))
    };
    ($lhs:expr, $rhs:expr, rel = $tol:expr $(,)?) => {
        $crate::__assert_approx!(true, "==", $lhs, $rhs, |_| $crate::approx::Tolerance::Rel($tol))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using
/// [`ApproxEq`]).
///
/// Accepts the same tolerance arguments as [`assert_approx_eq!`][crate::assert_approx_eq].
///
/// # Examples
///
/// ```
/// # use euclid::*;
/// assert_approx_ne!(100.0, 99.0, abs = 0.5);
/// assert_approx_ne!(100.0, 99.0, rel = 0.005);
/// assert_approx_ne!(vector![1.0], vector![1.0, 0.0]);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__assert_approx!(false, "!=", $lhs, $rhs, $crate::approx::default_tolerance)
    };
    ($lhs:expr, $rhs:expr, abs = $tol:expr $(,)?) => {
        $crate::__assert_approx!(false, "!=", $lhs, $rhs, |_| $crate::approx::Tolerance::Abs($tol))
    };
    ($lhs:expr, $rhs:expr, rel = $tol:expr $(,)?) => {
        $crate::__assert_approx!(false, "!=", $lhs, $rhs, |_| $crate::approx::Tolerance::Rel($tol))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed (absolute tolerance 0.0001)")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn abs() {
        assert_approx_eq!(1.0, 1.00005);
        assert_approx_eq!(1.0, -1.0, abs = 2.0);
        assert_approx_ne!(1.0, -1.0, abs = 1.0);
        assert_approx_eq!(-1.0, -1.0, abs = 0.0);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001, rel = 0.01);
        assert_approx_eq!(1.0, -1.0, rel = 2.0);
        assert_approx_eq!(0.0, 0.00001, rel = 1.0);
        assert_approx_ne!(1000.0, 1001.0, rel = 0.0001);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f64::NAN, f64::NAN, abs = 0.0);
        assert_approx_ne!(f64::NAN, f64::NAN, rel = 1.0);
        assert_approx_ne!(f64::NAN, 0.0, abs = 1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f64::INFINITY, f64::INFINITY, abs = 0.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY, rel = 0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY, abs = 10000.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX, abs = 10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY, rel = 10000.0);
    }

    #[test]
    fn slices() {
        let a: &[f64] = &[1.0, 2.0];
        let b: &[f64] = &[1.0, 2.00001];
        assert_approx_eq!(*a, *b);
        assert_approx_ne!(*a, [1.0][..]);
    }
}
