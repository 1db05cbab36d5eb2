use std::{collections::LinkedList, fmt, mem, slice};

use crate::{products, Error, Result};

mod cache;
mod ops;

pub(crate) use cache::{Cache, Derived};

/// A dense, owning vector of [`f64`] components with a dimension chosen at runtime.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The [`Default`] implementation creates a 1-dimensional vector containing `0.0`.
/// - [`Vector::new`] creates a vector of the given dimension with all components set to `0.0`.
/// - [`Vector::splat`] creates a vector by copying the given value into each component.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each component.
/// - [`Vector::empty`] creates a vector with no components.
/// - The [`vector!`][crate::vector!] macro creates a vector from a list of values.
/// - Vectors can be collected from iterators of `f64` or `&f64`, and converted from slices, arrays
///   and [`Vec`]s using their [`From`] implementations.
///
/// [`Clone`] creates an independent deep copy. [`Vector::take`] moves the components out of a
/// vector, leaving it empty.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls work like on slices, and panic when the index is out of
///   bounds.
/// - [`Vector::at`] and [`Vector::at_mut`] are the checked counterparts and return
///   [`Error::Index`] instead.
/// - [`Vector::as_slice`], [`Vector::iter`] and [`Vector::to_vec`] give read access to all
///   components at once.
///
/// # Caching
///
/// The norm and the dot product of a vector with itself are cached inside the vector the first time
/// they are computed, and reused until the vector is mutated. Every mutable access (including
/// `IndexMut`, [`Vector::at_mut`] and [`Vector::as_mut_slice`]) invalidates the cache, whether or not
/// it actually changes a component.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
pub struct Vector {
    components: Box<[f64]>,
    cache: Cache,
}

impl Vector {
    /// Creates a vector with `dimension` components, all set to `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let v = Vector::new(3);
    /// assert_eq!(v.dimension(), 3);
    /// assert_eq!(v, [0.0, 0.0, 0.0]);
    /// ```
    #[inline]
    pub fn new(dimension: usize) -> Self {
        Self::splat(dimension, 0.0)
    }

    /// Creates a vector with no components.
    #[inline]
    pub fn empty() -> Self {
        Self::from_boxed(Box::default())
    }

    /// Creates a vector with `dimension` components, each initialized to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let v = Vector::splat(3, 2.5);
    /// assert_eq!(v, vector![2.5, 2.5, 2.5]);
    /// ```
    pub fn splat(dimension: usize, value: f64) -> Self {
        Self::from_boxed(vec![value; dimension].into_boxed_slice())
    }

    /// Creates a vector where each component is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let v = Vector::from_fn(3, |i| i as f64 * 10.0);
    /// assert_eq!(v, vector![0.0, 10.0, 20.0]);
    /// ```
    pub fn from_fn<F>(dimension: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        (0..dimension).map(cb).collect()
    }

    fn from_boxed(components: Box<[f64]>) -> Self {
        Self {
            components,
            cache: Cache::default(),
        }
    }

    /// Moves the components (and cached values) out of `self`, leaving it with dimension 0.
    ///
    /// This is the equivalent of a move that keeps the source alive: the returned vector is
    /// identical to what `self` was, and `self` is still usable as an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let mut v = vector![1.0, 2.0];
    /// let moved = v.take();
    /// assert_eq!(moved, [1.0, 2.0]);
    /// assert_eq!(v.dimension(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        Self {
            components: mem::take(&mut self.components),
            cache: self.cache.take(),
        }
    }

    /// Returns the number of components in this vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if this vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Returns the components as a mutable slice.
    ///
    /// This invalidates the cached norm and dot product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let mut v = vector![3.0, 4.0];
    /// assert_eq!(v.norm(), 5.0);
    /// v.as_mut_slice().fill(0.0);
    /// assert_eq!(v.norm(), 0.0);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.cache.invalidate();
        &mut self.components
    }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Copies the components into a new [`Vec`].
    #[inline]
    pub fn to_vec(&self) -> Vec<f64> {
        self.components.to_vec()
    }

    /// Returns the component at `index`, or an error if `index` is outside of `0..dimension`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use euclid::*;
    /// let v = vector![1.0, 2.0, 3.0];
    /// assert_eq!(v.at(2), Ok(3.0));
    /// assert_eq!(v.at(3), Err(Error::Index { index: 3, dimension: 3 }));
    /// assert_eq!(v.at(-1), Err(Error::Index { index: -1, dimension: 3 }));
    /// ```
    pub fn at(&self, index: isize) -> Result<f64> {
        let i = self.checked_index(index)?;
        Ok(self.components[i])
    }

    /// Returns a mutable reference to the component at `index`, or an error if `index` is outside
    /// of `0..dimension`.
    ///
    /// A successful call invalidates the cached norm and dot product, even if nothing is written
    /// through the returned reference.
    pub fn at_mut(&mut self, index: isize) -> Result<&mut f64> {
        let i = self.checked_index(index)?;
        self.cache.invalidate();
        Ok(&mut self.components[i])
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.dimension())
            .ok_or(Error::Index {
                index,
                dimension: self.dimension(),
            })
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Equivalent to [`dot(self, other)`][crate::dot].
    #[inline]
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        products::dot(self, other)
    }

    /// Returns the Euclidean norm (length) of this vector.
    ///
    /// Equivalent to [`norm(self)`][crate::norm].
    #[inline]
    pub fn norm(&self) -> f64 {
        products::norm(self)
    }

    /// Returns a vector with the same direction as `self` and a norm of 1.
    ///
    /// Equivalent to [`unit(self)`][crate::unit].
    #[inline]
    pub fn unit(&self) -> Result<Vector> {
        products::unit(self)
    }

    #[inline]
    pub(crate) fn cache(&self) -> &Cache {
        &self.cache
    }
}

impl Default for Vector {
    /// Returns a 1-dimensional vector containing `0.0`.
    #[inline]
    fn default() -> Self {
        Self::new(1)
    }
}

impl Clone for Vector {
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
            cache: self.cache.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.dimension() == source.dimension() {
            self.components.copy_from_slice(&source.components);
        } else {
            self.components = source.components.clone();
        }
        self.cache = source.cache.clone();
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_boxed(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a f64> for Vector {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&[f64]> for Vector {
    #[inline]
    fn from(value: &[f64]) -> Self {
        Self::from_boxed(value.into())
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(value: Vec<f64>) -> Self {
        Self::from_boxed(value.into_boxed_slice())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(value: [f64; N]) -> Self {
        Self::from_boxed(Box::new(value))
    }
}

impl From<&Vector> for Vec<f64> {
    #[inline]
    fn from(value: &Vector) -> Self {
        value.to_vec()
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.components.into_vec()
    }
}

impl From<&Vector> for LinkedList<f64> {
    fn from(value: &Vector) -> Self {
        value.iter().copied().collect()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the components in square brackets, separated by single spaces (eg. `[1 2.5 3]`).
///
/// Formatting options like precision are applied to every component.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, component) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        f.write_str("]")
    }
}

/// Creates a [`Vector`] containing the given `f64` components.
///
/// # Examples
///
/// ```
/// # use euclid::*;
/// let v = vector![1.0, 2.0, 3.0];
/// assert_eq!(v.dimension(), 3);
///
/// let empty = vector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::empty()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::Vector::from([$($component),+])
    };
}

#[cfg(test)]
mod tests {
    use std::iter;

    use super::*;

    #[test]
    fn construction() {
        let v = Vector::default();
        assert_eq!(v.dimension(), 1);
        assert_eq!(v[0], 0.0);

        assert_eq!(Vector::new(0).dimension(), 0);
        assert_eq!(Vector::new(3).as_slice(), &[0.0; 3]);
        assert_eq!(Vector::splat(2, -1.5).as_slice(), &[-1.5, -1.5]);

        let source = vec![1.1, 2.2, 3.3];
        let v: Vector = source.iter().collect();
        assert_eq!(v.as_slice(), &source[..]);

        let v: Vector = source[1..].iter().collect();
        assert_eq!(v.as_slice(), &[2.2, 3.3]);

        let v: Vector = iter::empty::<f64>().collect();
        assert!(v.is_empty());

        let v = vector![1.2, 2.3, 4.5];
        assert_eq!(v.dimension(), 3);
        assert_eq!(v[2], 4.5);
        assert_eq!(vector![].dimension(), 0);
    }

    #[test]
    fn clone_is_deep() {
        let a = vector![1.0, 2.0, 3.0];
        let mut b = a.clone();
        assert_eq!(a, b);

        b[0] = 100.0;
        assert_eq!(a[0], 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn clone_copies_cache() {
        let a = vector![3.0, 4.0];
        assert_eq!(a.norm(), 5.0);

        let b = a.clone();
        assert_eq!(b.cache().get().map(|d| d.norm), Some(5.0));
    }

    #[test]
    fn clone_from() {
        let source = vector![3.0, 4.0];
        source.norm();

        let mut same_dim = vector![0.0, 0.0];
        same_dim.clone_from(&source);
        assert_eq!(same_dim, source);
        assert_eq!(same_dim.cache().get().map(|d| d.norm), Some(5.0));

        let mut other_dim = vector![1.0];
        other_dim.clone_from(&source);
        assert_eq!(other_dim.dimension(), 2);
        assert_eq!(other_dim, source);
    }

    #[test]
    fn take() {
        let mut a = vector![3.0, 4.0];
        a.norm();

        let b = a.take();
        assert_eq!(b, [3.0, 4.0]);
        assert_eq!(b.cache().get().map(|d| d.norm), Some(5.0));

        assert_eq!(a.dimension(), 0);
        assert!(a.cache().get().is_none());
        assert_eq!(a.norm(), 0.0);
        assert_eq!(a.to_string(), "[]");

        let mut c = vector![9.0];
        assert_eq!(c.dimension(), 1);
        c = a.take();
        assert!(c.is_empty());
    }

    #[test]
    fn checked_access() {
        let mut v = vector![1.0, 2.0, 3.0];
        assert_eq!(v.at(0), Ok(1.0));
        assert_eq!(
            v.at(4),
            Err(Error::Index {
                index: 4,
                dimension: 3
            })
        );
        assert_eq!(
            v.at(-1),
            Err(Error::Index {
                index: -1,
                dimension: 3
            })
        );

        *v.at_mut(1).unwrap() = 7.0;
        assert_eq!(v, [1.0, 7.0, 3.0]);
        assert!(v.at_mut(3).is_err());

        assert!(Vector::empty().at(0).is_err());
    }

    #[test]
    fn mutable_access_invalidates() {
        let mut v = vector![3.0, 4.0];
        v.norm();
        assert!(v.cache().get().is_some());

        let _ = v[0];
        assert!(v.cache().get().is_some());

        v[0] = 3.0;
        assert!(v.cache().get().is_none());

        v.norm();
        v.at_mut(0).unwrap();
        assert!(v.cache().get().is_none());

        v.norm();
        v.at_mut(10).unwrap_err();
        assert!(v.cache().get().is_some());

        v.as_mut_slice();
        assert!(v.cache().get().is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let v = vector![1.0, 2.0, 3.0];
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_mut_out_of_bounds() {
        let mut v = Vector::empty();
        v[0] = 1.0;
    }

    #[test]
    fn conversions() {
        let v = vector![1.0, 2.0, 3.0];

        let mut as_vec = Vec::from(&v);
        assert_eq!(as_vec, [1.0, 2.0, 3.0]);
        as_vec[0] = 10.0;
        assert_eq!(v[0], 1.0);

        let as_list = LinkedList::from(&v);
        assert_eq!(as_list.into_iter().collect::<Vec<_>>(), [1.0, 2.0, 3.0]);

        assert_eq!(Vec::from(v), [1.0, 2.0, 3.0]);
        assert!(Vec::from(&Vector::empty()).is_empty());
        assert!(LinkedList::from(&Vector::empty()).is_empty());

        assert_eq!(Vector::from(&[1.0, 2.0][..]), [1.0, 2.0]);
        assert_eq!(Vector::from(vec![5.0]), [5.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(vector![].to_string(), "[]");
        assert_eq!(vector![9.0, 9.0, 9.0].to_string(), "[9 9 9]");
        assert_eq!(vector![1.5, -2.0].to_string(), "[1.5 -2]");
        assert_eq!(format!("{:.1}", vector![1.0, 2.26]), "[1.0 2.3]");
        assert_eq!(format!("{:?}", vector![1.0, 2.5]), "[1.0, 2.5]");
    }
}
