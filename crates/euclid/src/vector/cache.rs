use std::cell::Cell;

/// Quantities derived from a vector's components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Derived {
    /// Dot product of the vector with itself.
    pub(crate) dot: f64,
    /// Euclidean norm, `dot.sqrt()`.
    pub(crate) norm: f64,
}

impl Derived {
    pub(crate) fn from_dot(dot: f64) -> Self {
        Self {
            dot,
            norm: dot.sqrt(),
        }
    }
}

/// Memoized [`Derived`] values.
///
/// `None` means the cache is invalid. Writes go through a [`Cell`], so the cache can be filled
/// through a shared reference to the owning vector; that is also what makes the owner `!Sync`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cache(Cell<Option<Derived>>);

impl Cache {
    #[inline]
    pub(crate) fn get(&self) -> Option<Derived> {
        self.0.get()
    }

    #[inline]
    pub(crate) fn set(&self, derived: Derived) {
        self.0.set(Some(derived));
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        *self.0.get_mut() = None;
    }

    /// Moves the cached state out, leaving this cache invalid.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        Self(Cell::new(self.0.take()))
    }
}
