//! Structural self-checks for sieve snapshots and factorizations.
//!
//! Builders call [`DebugInvariants::debug_assert_invariants`] on what they
//! produce; the check compiles away in release builds unless the
//! `check-invariants` or `strict-invariants` feature is on. Callers that want
//! a recoverable result use [`DebugInvariants::validate_invariants`].

use crate::sieve_error::SieveError;

/// Types whose internal consistency can be verified after construction.
pub trait DebugInvariants {
    /// Panic on the first violation, when invariant checking is compiled in.
    fn debug_assert_invariants(&self);
    /// Report the first violation as [`SieveError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), SieveError>;
}

/// `Ok(())` when `holds`, otherwise an [`SieveError::InvariantViolation`]
/// carrying the lazily formatted message.
#[inline]
pub(crate) fn ensure(holds: bool, msg: impl FnOnce() -> String) -> Result<(), SieveError> {
    if holds {
        Ok(())
    } else {
        Err(SieveError::InvariantViolation(msg()))
    }
}

/// Panic with `ctx` when a fallible check fails and invariant checking is on.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
