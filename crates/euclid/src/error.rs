use std::fmt;

/// Convenience alias for results of fallible [`Vector`][crate::Vector] operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by fallible vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operands of an element-wise operation (or of [`dot`][crate::dot]) have different
    /// dimensions.
    #[error("Dimensions of LHS({lhs}) and RHS({rhs}) do not match")]
    DimensionMismatch { lhs: usize, rhs: usize },

    /// A checked accessor was called with an index outside of `0..dimension`.
    #[error("index {index} is not valid for a vector of dimension {dimension}")]
    Index { index: isize, dimension: usize },

    /// A divisor was closer to zero than [`EPSILON`][crate::EPSILON].
    #[error("{0}")]
    DivisionByZero(Divisor),

    /// [`unit`][crate::unit] was called on a vector without any components.
    #[error("vector with no dimensions does not have a unit vector")]
    NoDimensions,
}

/// The divisor that caused an [`Error::DivisionByZero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    /// A scalar passed to `/` or [`Vector::try_div_assign`][crate::Vector::try_div_assign].
    Scalar,
    /// The norm of a vector passed to [`unit`][crate::unit].
    Norm,
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divisor::Scalar => f.write_str("invalid vector division by 0"),
            Divisor::Norm => f.write_str("vector with zero norm does not have a unit vector"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::DimensionMismatch { lhs: 4, rhs: 3 }.to_string(),
            "Dimensions of LHS(4) and RHS(3) do not match"
        );
        assert_eq!(
            Error::Index {
                index: -1,
                dimension: 3
            }
            .to_string(),
            "index -1 is not valid for a vector of dimension 3"
        );
        assert_eq!(
            Error::DivisionByZero(Divisor::Scalar).to_string(),
            "invalid vector division by 0"
        );
        assert_eq!(
            Error::DivisionByZero(Divisor::Norm).to_string(),
            "vector with zero norm does not have a unit vector"
        );
        assert_eq!(
            Error::NoDimensions.to_string(),
            "vector with no dimensions does not have a unit vector"
        );
    }
}
