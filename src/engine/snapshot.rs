//! Immutable sieve state: the marking array and the prime list derived from it.
//!
//! A [`SieveSnapshot`] is produced by [`build_snapshot`](super::construction::build_snapshot)
//! and never mutated afterwards. Both arrays live behind `Arc`, so cloning a
//! snapshot is cheap and a clone stays valid after the owning engine resizes.
//!
//! # Errors
//! * [`SieveError::ValueOutOfRange`]: primality queried outside `[1, bound]`.
//! * [`SieveError::IndexOutOfRange`]: prime index 0 or beyond [`SieveSnapshot::count`].

use std::sync::Arc;

use itertools::Itertools;

use super::primes::Primes;
use crate::debug_invariants::{DebugInvariants, ensure};
use crate::sieve_error::SieveError;

/// Marks and primes for one construction of the sieve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SieveSnapshot {
    bound: usize,
    /// `marks[i]` is `true` iff `i` is prime; length `bound + 1`.
    marks: Arc<[bool]>,
    /// Ascending primes `<= bound`.
    primes: Arc<[u64]>,
}

impl SieveSnapshot {
    pub(crate) fn from_parts(bound: usize, marks: Arc<[bool]>, primes: Arc<[u64]>) -> Self {
        let snapshot = Self {
            bound,
            marks,
            primes,
        };
        snapshot.debug_assert_invariants();
        snapshot
    }

    /// Assemble a snapshot without running any checks.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        bound: usize,
        marks: Arc<[bool]>,
        primes: Arc<[u64]>,
    ) -> Self {
        Self {
            bound,
            marks,
            primes,
        }
    }

    /// Upper bound `N` this snapshot was built for.
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Whether `x` is prime.
    ///
    /// # Errors
    /// [`SieveError::ValueOutOfRange`] unless `1 <= x <= bound`.
    #[inline]
    pub fn is_prime(&self, x: u64) -> Result<bool, SieveError> {
        if x < 1 || x > self.bound as u64 {
            return Err(SieveError::ValueOutOfRange {
                value: x,
                bound: self.bound,
            });
        }
        Ok(self.marks[x as usize])
    }

    /// The `n`th prime, counting from 1.
    ///
    /// # Errors
    /// [`SieveError::IndexOutOfRange`] if `n == 0` or `n > count()`.
    #[inline]
    pub fn nth_prime(&self, n: usize) -> Result<u64, SieveError> {
        n.checked_sub(1)
            .and_then(|i| self.primes.get(i).copied())
            .ok_or(SieveError::IndexOutOfRange {
                index: n,
                count: self.primes.len(),
            })
    }

    /// Number of primes `<= bound`.
    #[inline]
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    /// Ascending iterator over the primes of this snapshot.
    pub fn primes(&self) -> Primes {
        Primes::new(Arc::clone(&self.primes))
    }

    /// The prime list as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    /// Largest prime `<= bound`, if any.
    #[inline]
    pub fn largest_prime(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    /// Largest value whose factorization can be certified: the square of the
    /// largest prime, saturating at `u64::MAX`. Without primes only 1 qualifies.
    pub fn factor_limit(&self) -> u64 {
        match self.largest_prime() {
            Some(p) => p.checked_mul(p).unwrap_or(u64::MAX),
            None => 1,
        }
    }

    /// `true` if `x` is one of the known primes. Never fails; values past the
    /// bound are simply unknown.
    #[inline]
    pub(crate) fn is_known_prime(&self, x: u64) -> bool {
        usize::try_from(x)
            .ok()
            .and_then(|i| self.marks.get(i).copied())
            .unwrap_or(false)
    }
}

impl DebugInvariants for SieveSnapshot {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SieveSnapshot");
    }

    fn validate_invariants(&self) -> Result<(), SieveError> {
        ensure(self.marks.len() == self.bound + 1, || {
            format!(
                "marks length {} does not match bound {}",
                self.marks.len(),
                self.bound
            )
        })?;
        ensure(!self.is_known_prime(0) && !self.is_known_prime(1), || {
            "0 and 1 must not be marked prime".into()
        })?;
        if let Some((a, b)) = self
            .primes
            .iter()
            .tuple_windows()
            .find(|(a, b)| a >= b)
        {
            return Err(SieveError::InvariantViolation(format!(
                "prime list not strictly increasing at {a}, {b}"
            )));
        }
        if let Some(p) = self.primes.iter().find(|&&p| !self.is_known_prime(p)) {
            return Err(SieveError::InvariantViolation(format!(
                "prime {p} is not marked in the sieve"
            )));
        }
        let marked = self.marks.iter().filter(|&&m| m).count();
        ensure(marked == self.primes.len(), || {
            format!(
                "{marked} marked slots but {} listed primes",
                self.primes.len()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::construction::build_snapshot;

    #[test]
    fn queries_at_thirty() {
        let s = build_snapshot(30);
        assert_eq!(s.count(), 10);
        assert_eq!(s.is_prime(17), Ok(true));
        assert_eq!(s.is_prime(1), Ok(false));
        assert_eq!(s.is_prime(30), Ok(false));
        assert_eq!(s.nth_prime(5), Ok(11));
        assert_eq!(s.largest_prime(), Some(29));
        assert_eq!(s.factor_limit(), 841);
    }

    #[test]
    fn range_errors() {
        let s = build_snapshot(30);
        assert_eq!(
            s.is_prime(0),
            Err(SieveError::ValueOutOfRange { value: 0, bound: 30 })
        );
        assert_eq!(
            s.is_prime(31),
            Err(SieveError::ValueOutOfRange { value: 31, bound: 30 })
        );
        assert_eq!(
            s.nth_prime(0),
            Err(SieveError::IndexOutOfRange { index: 0, count: 10 })
        );
        assert_eq!(
            s.nth_prime(11),
            Err(SieveError::IndexOutOfRange { index: 11, count: 10 })
        );
    }

    #[test]
    fn empty_snapshot() {
        let s = build_snapshot(1);
        assert_eq!(s.count(), 0);
        assert_eq!(s.largest_prime(), None);
        assert_eq!(s.factor_limit(), 1);
        assert!(s.is_prime(0).is_err());
        assert_eq!(s.is_prime(1), Ok(false));
        assert!(s.validate_invariants().is_ok());
    }

    #[test]
    fn known_prime_lookup_past_bound() {
        let s = build_snapshot(10);
        assert!(s.is_known_prime(7));
        assert!(!s.is_known_prime(11));
        assert!(!s.is_known_prime(u64::MAX));
    }

    #[test]
    fn corrupted_snapshot_is_reported() {
        let bad = SieveSnapshot::from_parts_unchecked(
            10,
            Arc::from(vec![false; 11]),
            Arc::from(vec![4u64]),
        );
        assert!(matches!(
            bad.validate_invariants(),
            Err(SieveError::InvariantViolation(_))
        ));

        let unordered = SieveSnapshot::from_parts_unchecked(
            3,
            Arc::from(vec![false, false, true, true]),
            Arc::from(vec![3u64, 2]),
        );
        assert!(unordered.validate_invariants().is_err());
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    #[should_panic(expected = "[invariants] SieveSnapshot")]
    fn builder_asserts_invariants() {
        let _ = SieveSnapshot::from_parts(
            4,
            Arc::from(vec![false, false, true]),
            Arc::from(vec![2u64]),
        );
    }
}
