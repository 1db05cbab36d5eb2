//! Dot product, norm and unit vector.

use std::ptr;

use crate::{vector::Derived, Divisor, Error, Result, Vector, EPSILON};

/// Computes the dot product (inner product) of `x` and `y`.
///
/// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions. The dot product
/// of two empty vectors is `0.0`.
///
/// If `x` and `y` are the *same* vector (not merely equal ones), the result is cached in that
/// vector and reused by later calls until the vector is mutated.
///
/// # Examples
///
/// ```
/// # use euclid::*;
/// let a = vector![1.0, 1.0, 1.0];
/// let b = vector![2.0, 2.0, 2.0];
/// assert_eq!(dot(&a, &b)?, 6.0);
/// assert_eq!(dot(&a, &a)?, 3.0);
/// assert_eq!(dot(&vector![], &vector![])?, 0.0);
///
/// assert!(dot(&a, &vector![1.0]).is_err());
/// # Ok::<_, Error>(())
/// ```
pub fn dot(x: &Vector, y: &Vector) -> Result<f64> {
    if x.dimension() != y.dimension() {
        return Err(Error::DimensionMismatch {
            lhs: x.dimension(),
            rhs: y.dimension(),
        });
    }

    if ptr::eq(x, y) {
        return Ok(derived(x).dot);
    }

    Ok(inner_product(x.as_slice(), y.as_slice()))
}

/// Returns the Euclidean norm of `v`, the square root of its dot product with itself.
///
/// The norm of an empty vector is `0.0`. The result is cached in `v` until it is mutated.
///
/// # Examples
///
/// ```
/// # use euclid::*;
/// assert_eq!(norm(&vector![3.0, 4.0]), 5.0);
/// assert_eq!(norm(&vector![]), 0.0);
/// ```
pub fn norm(v: &Vector) -> f64 {
    derived(v).norm
}

/// Returns the unit vector pointing in the same direction as `v`.
///
/// # Errors
///
/// - [`Error::NoDimensions`] if `v` is empty.
/// - [`Error::DivisionByZero`] with [`Divisor::Norm`] if the norm of `v` is closer to zero than
///   [`EPSILON`].
///
/// # Examples
///
/// ```
/// # use euclid::*;
/// assert_eq!(unit(&vector![3.0, 4.0])?, [0.6, 0.8]);
///
/// assert_eq!(unit(&vector![]), Err(Error::NoDimensions));
/// assert_eq!(unit(&vector![0.0, 0.0]), Err(Error::DivisionByZero(Divisor::Norm)));
/// # Ok::<_, Error>(())
/// ```
pub fn unit(v: &Vector) -> Result<Vector> {
    if v.is_empty() {
        log::debug!("rejecting unit vector of empty vector");
        return Err(Error::NoDimensions);
    }

    let norm = norm(v);
    if norm.abs() < EPSILON {
        log::debug!("rejecting unit vector of {v} (norm={norm})");
        return Err(Error::DivisionByZero(Divisor::Norm));
    }

    let mut unit = v.clone();
    unit.try_div_assign(norm)?;
    Ok(unit)
}

/// Returns the cached [`Derived`] values of `v`, computing and storing them first if needed.
fn derived(v: &Vector) -> Derived {
    if let Some(derived) = v.cache().get() {
        log::trace!("cache hit: dot={} norm={}", derived.dot, derived.norm);
        return derived;
    }

    let derived = Derived::from_dot(inner_product(v.as_slice(), v.as_slice()));
    log::trace!(
        "computed dot={} norm={} for dimension {}",
        derived.dot,
        derived.norm,
        v.dimension()
    );
    v.cache().set(derived);
    derived
}

fn inner_product(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}
