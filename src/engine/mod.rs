//! The sieve engine: a resizable Sieve of Eratosthenes and the queries built on it.
//!
//! [`PrimeSieve`] owns exactly one [`SieveSnapshot`]. Construction and
//! [`PrimeSieve::resize`] build a brand-new snapshot and swap it in; queries
//! always read the current snapshot. Anything handed out earlier (a cloned
//! snapshot, a [`Primes`] iterator) keeps referring to the snapshot it came from.
//!
//! ```rust
//! use prime_sieve::engine::PrimeSieve;
//!
//! let sieve = PrimeSieve::new(30);
//! assert_eq!(sieve.count(), 10);
//! assert_eq!(sieve.nth_prime(5).unwrap(), 11);
//! assert_eq!(sieve.divisors(28).unwrap(), vec![1, 2, 4, 7, 14]);
//! ```

pub mod construction;
pub mod primes;
pub mod snapshot;

pub use primes::Primes;
pub use snapshot::SieveSnapshot;

use crate::config::SieveConfig;
use crate::debug_invariants::DebugInvariants;
use crate::factor::{self, Factorization};
use crate::sieve_error::SieveError;

/// Resizable prime oracle over `[1, bound]`.
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    snapshot: SieveSnapshot,
    validate_on_build: bool,
}

impl PrimeSieve {
    /// Build a sieve for `[0, bound]` with default settings.
    pub fn new(bound: usize) -> Self {
        Self::from_config(&SieveConfig::default().with_bound(bound))
    }

    /// Build a sieve from explicit settings.
    ///
    /// `validate_on_build` is only honoured by the `try_` constructors;
    /// this one relies on the debug-build invariant assertions.
    pub fn from_config(cfg: &SieveConfig) -> Self {
        Self {
            snapshot: construction::build_snapshot(cfg.bound),
            validate_on_build: cfg.validate_on_build,
        }
    }

    /// Build a sieve and, if `cfg.validate_on_build` is set, run the full
    /// invariant check on it.
    ///
    /// # Errors
    /// [`SieveError::InvariantViolation`] if the new snapshot is inconsistent.
    pub fn try_from_config(cfg: &SieveConfig) -> Result<Self, SieveError> {
        let snapshot = construction::build_snapshot(cfg.bound);
        Self::checked(cfg.validate_on_build, &snapshot)?;
        Ok(Self {
            snapshot,
            validate_on_build: cfg.validate_on_build,
        })
    }

    /// Discard the current sieve and rebuild it for `[0, new_bound]`.
    ///
    /// Growing and shrinking both rebuild from scratch.
    pub fn resize(&mut self, new_bound: usize) {
        log::debug!(
            "resizing sieve: {} -> {new_bound}",
            self.snapshot.bound()
        );
        self.snapshot = construction::build_snapshot(new_bound);
    }

    /// Like [`resize`](Self::resize), validating the new snapshot when the
    /// engine was configured with `validate_on_build`. On error the previous
    /// snapshot stays in place.
    ///
    /// # Errors
    /// [`SieveError::InvariantViolation`] if the new snapshot is inconsistent.
    pub fn try_resize(&mut self, new_bound: usize) -> Result<(), SieveError> {
        let snapshot = construction::build_snapshot(new_bound);
        Self::checked(self.validate_on_build, &snapshot)?;
        log::debug!(
            "resizing sieve: {} -> {new_bound}",
            self.snapshot.bound()
        );
        self.snapshot = snapshot;
        Ok(())
    }

    fn checked(validate: bool, snapshot: &SieveSnapshot) -> Result<(), SieveError> {
        if !validate {
            return Ok(());
        }
        snapshot.validate_invariants().inspect_err(|e| {
            log::error!("sieve snapshot failed validation: {e}");
        })
    }

    /// Upper bound `N` of the current sieve.
    #[inline]
    pub fn bound(&self) -> usize {
        self.snapshot.bound()
    }

    /// Whether `x` is prime. See [`SieveSnapshot::is_prime`].
    #[inline]
    pub fn is_prime(&self, x: u64) -> Result<bool, SieveError> {
        self.snapshot.is_prime(x)
    }

    /// The `n`th prime, counting from 1. See [`SieveSnapshot::nth_prime`].
    #[inline]
    pub fn nth_prime(&self, n: usize) -> Result<u64, SieveError> {
        self.snapshot.nth_prime(n)
    }

    /// Iterate the primes of the current sieve in ascending order.
    pub fn primes(&self) -> Primes {
        self.snapshot.primes()
    }

    /// Number of primes `<= bound`.
    #[inline]
    pub fn count(&self) -> usize {
        self.snapshot.count()
    }

    /// Largest prime `<= bound`, if any.
    pub fn largest_prime(&self) -> Option<u64> {
        self.snapshot.largest_prime()
    }

    /// Largest value [`factors`](Self::factors) accepts.
    pub fn factor_limit(&self) -> u64 {
        self.snapshot.factor_limit()
    }

    /// A handle on the current snapshot, unaffected by later resizes.
    pub fn snapshot(&self) -> SieveSnapshot {
        self.snapshot.clone()
    }

    /// Prime factorization of `x` by trial division.
    ///
    /// # Errors
    /// * [`SieveError::NotFactorizable`] if `x == 0`.
    /// * [`SieveError::BeyondCapacity`] if `x > factor_limit()`.
    pub fn factors(&self, x: u64) -> Result<Factorization, SieveError> {
        factor::factorize(&self.snapshot, x)
    }

    /// Proper divisors of `n` (every divisor strictly below `n`), ascending.
    ///
    /// # Errors
    /// Same as [`factors`](Self::factors).
    pub fn divisors(&self, n: u64) -> Result<Vec<u64>, SieveError> {
        factor::divisors::proper_divisors(&self.snapshot, n)
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::from_config(&SieveConfig::default())
    }
}

static_assertions::assert_impl_all!(PrimeSieve: Send, Sync, Clone);
static_assertions::assert_impl_all!(SieveSnapshot: Send, Sync, Clone);
static_assertions::assert_impl_all!(Primes: Send, Sync, Clone, ExactSizeIterator);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_grows_and_shrinks() {
        let mut s = PrimeSieve::new(30);
        s.resize(100);
        assert_eq!(s.bound(), 100);
        assert_eq!(s.count(), 25);
        assert_eq!(s.is_prime(97), Ok(true));
        s.resize(10);
        assert_eq!(s.count(), 4);
        assert!(s.is_prime(11).is_err());
    }

    #[test]
    fn validated_build_accepts_real_sieve() {
        let cfg = SieveConfig::default().with_bound(500).with_validation(true);
        let mut s = PrimeSieve::try_from_config(&cfg).unwrap();
        assert_eq!(s.count(), 95);
        s.try_resize(0).unwrap();
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn validation_failure_is_returned() {
        let bad = SieveSnapshot::from_parts_unchecked(
            10,
            std::sync::Arc::from(vec![false; 11]),
            std::sync::Arc::from(vec![4u64]),
        );
        assert!(matches!(
            PrimeSieve::checked(true, &bad),
            Err(SieveError::InvariantViolation(_))
        ));
        assert_eq!(PrimeSieve::checked(false, &bad), Ok(()));
    }

    #[test]
    fn default_uses_config_bound() {
        let s = PrimeSieve::default();
        assert_eq!(s.bound(), 1000);
        assert_eq!(s.count(), 168);
    }

    #[test]
    fn iterator_survives_resize() {
        let mut s = PrimeSieve::new(10);
        let before = s.primes();
        s.resize(20);
        assert_eq!(before.collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(s.primes().count(), 8);
    }
}
