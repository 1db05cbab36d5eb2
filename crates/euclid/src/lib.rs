//! Dense Euclidean vectors of `f64` with memoized norms.
//!
//! # Overview
//!
//! The central type is [`Vector`]: an owning, fixed-length buffer of [`f64`] components whose
//! dimension is chosen at runtime. It has value semantics ([`Clone`] performs a deep copy), supports
//! the usual element-wise arithmetic, and caches its Euclidean norm and self dot product until the
//! next mutation.
//!
//! The derived quantities are exposed as free functions, [`dot`], [`norm`] and [`unit`], mirrored by
//! methods of the same name on [`Vector`].
//!
//! # Errors
//!
//! Operations that can fail for data-dependent reasons return [`Result`]. This includes binary
//! arithmetic operators: `a + b` evaluates to a `Result<Vector>`, and `Result<Vector>` itself
//! implements the operators so that expressions chain and carry the first error forward.
//!
//! ```
//! # use euclid::*;
//! let sum = Vector::splat(3, 3.0) + Vector::splat(3, 3.0) + Vector::splat(3, 3.0);
//! assert_eq!(sum?.to_string(), "[9 9 9]");
//!
//! let mismatch = Vector::new(4) + Vector::new(3);
//! assert_eq!(mismatch, Err(Error::DimensionMismatch { lhs: 4, rhs: 3 }));
//! # Ok::<_, Error>(())
//! ```
//!
//! Indexing with `v[i]` is always bounds-checked and panics on violation. Use [`Vector::at`] and
//! [`Vector::at_mut`] for recoverable access.
//!
//! # Thread Safety
//!
//! Computing [`norm`] or [`dot`] writes to a cache through a shared reference, so [`Vector`] is
//! [`Send`] but not [`Sync`]. Wrap it in a lock to read one instance from several threads.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade. Applications can install a logger with
//! [`init_logger!`].

pub mod approx;
mod error;
mod products;
mod vector;

use log::LevelFilter;

pub use error::*;
pub use products::*;
pub use vector::*;

/// Absolute tolerance used when comparing components and when rejecting near-zero divisors.
pub const EPSILON: f64 = 0.0001;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `euclid` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
