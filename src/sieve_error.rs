//! SieveError: Unified error type for prime-sieve public APIs
//!
//! Every fallible query on the engine reports one of these variants. Callers
//! that need to branch on the failure class (supply different input, or grow
//! the sieve and retry) should match on [`SieveError::kind`] rather than on
//! the message text.

use thiserror::Error;

/// Broad failure class of a [`SieveError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value or index lies outside the bounds of the current sieve.
    Range,
    /// A value is semantically invalid for the operation.
    Domain,
    /// The computation cannot be certified against the known primes; resize.
    Capacity,
    /// Reading or writing a prime list failed.
    Io,
    /// An internal consistency check failed.
    Internal,
}

/// Unified error type for prime-sieve operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// Primality was queried for a value outside `[1, bound]`.
    #[error("{value} is outside defined range (1 to {bound})")]
    ValueOutOfRange { value: u64, bound: usize },
    /// A 1-based prime index was zero or larger than the number of primes found.
    #[error("Only {count} primes in sieve - can't identify prime #{index}")]
    IndexOutOfRange { index: usize, count: usize },
    /// Factorization was requested for a value below 1.
    #[error("Cannot factorise {value}: value must be at least 1")]
    NotFactorizable { value: u64 },
    /// The value exceeds the square of the largest known prime.
    #[error("Cannot factorise {value}: largest certifiable value is {limit}, resize the sieve")]
    BeyondCapacity { value: u64, limit: u64 },
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// A token in a prime list was not an unsigned integer.
    #[error("Prime list parse error on line {line}: `{token}` is not an unsigned integer")]
    Parse { line: usize, token: String },
    /// Snapshot or factorization invariants were violated.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl SieveError {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SieveError::ValueOutOfRange { .. } | SieveError::IndexOutOfRange { .. } => {
                ErrorKind::Range
            }
            SieveError::NotFactorizable { .. } => ErrorKind::Domain,
            SieveError::BeyondCapacity { .. } => ErrorKind::Capacity,
            SieveError::Io(_) | SieveError::Parse { .. } => ErrorKind::Io,
            SieveError::InvariantViolation(_) => ErrorKind::Internal,
        }
    }
}

impl From<std::io::Error> for SieveError {
    fn from(e: std::io::Error) -> Self {
        SieveError::Io(e.to_string())
    }
}
