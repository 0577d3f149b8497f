// src/core/error.rs

use num::BigInt;
use std::fmt;

/// Errors surfaced by the factorization engine and its arithmetic helpers.
#[derive(Clone, Debug, PartialEq)]
pub enum ShorError {
    /// The caller handed in a value outside the algorithm's domain
    /// (N = 0, a zero argument to period finding, a non-coprime witness).
    InvalidParameter(String),
    /// A search exhausted a range that cannot run dry while the
    /// preconditions hold. Signals a bug, not a runtime condition.
    InternalInvariantViolation(String),
    /// A big-integer value did not fit the requested machine-integer width.
    Narrowing(BigInt),
}

impl fmt::Display for ShorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(message) => {
                write!(f, "invalid parameter: {}", message)
            }
            Self::InternalInvariantViolation(message) => {
                write!(f, "internal invariant violated: {}", message)
            }
            Self::Narrowing(value) => {
                write!(f, "value {} does not fit in a machine integer", value)
            }
        }
    }
}

impl std::error::Error for ShorError {}
