//! Trial-division factorization against a sieve snapshot.
//!
//! [`factorize`] divides by the snapshot's primes in ascending order. It only
//! accepts values up to the square of the largest known prime: past that
//! bound a leftover quotient could be composite with no known factor, and
//! the result could not be trusted.
//!
//! # Errors
//! * [`SieveError::NotFactorizable`]: the value is 0.
//! * [`SieveError::BeyondCapacity`]: the value exceeds [`SieveSnapshot::factor_limit`].

pub mod divisors;
pub mod primality;

use num_traits::{CheckedMul, checked_pow};
use serde::{Deserialize, Serialize};

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::engine::SieveSnapshot;
use crate::sieve_error::SieveError;
use primality::is_prime_u64;

/// Prime factorization as two parallel ascending sequences.
///
/// `exponents()[i]` is the multiplicity of `primes()[i]`. The factorization
/// of 1 is empty. Deserialization goes through the same checks as
/// [`Factorization::from_parts`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFactorization")]
pub struct Factorization {
    primes: Vec<u64>,
    exponents: Vec<u32>,
}

/// Unchecked wire form of a [`Factorization`].
#[derive(Deserialize)]
struct RawFactorization {
    primes: Vec<u64>,
    exponents: Vec<u32>,
}

impl TryFrom<RawFactorization> for Factorization {
    type Error = SieveError;

    fn try_from(raw: RawFactorization) -> Result<Self, SieveError> {
        Factorization::from_parts(raw.primes, raw.exponents)
    }
}

impl Factorization {
    /// Build from parallel vectors.
    ///
    /// # Errors
    /// [`SieveError::InvariantViolation`] unless the lengths match, every
    /// base is prime, the bases strictly increase and every exponent is at
    /// least 1.
    pub fn from_parts(primes: Vec<u64>, exponents: Vec<u32>) -> Result<Self, SieveError> {
        let f = Self { primes, exponents };
        f.validate_invariants()?;
        Ok(f)
    }

    fn push(&mut self, prime: u64, exponent: u32) {
        self.primes.push(prime);
        self.exponents.push(exponent);
    }

    /// Distinct prime factors, ascending.
    #[inline]
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Multiplicity of each prime in [`primes`](Self::primes).
    #[inline]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// `(prime, exponent)` pairs in ascending prime order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.primes.iter().copied().zip(self.exponents.iter().copied())
    }

    /// Number of distinct prime factors.
    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// `true` for the factorization of 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Rebuild the factorized value; `None` on `u64` overflow.
    pub fn value(&self) -> Option<u64> {
        self.iter().try_fold(1u64, |acc, (p, e)| {
            checked_pow(p, e as usize).and_then(|pe| CheckedMul::checked_mul(&acc, &pe))
        })
    }

    /// Number of divisors of the factorized value, itself included.
    pub fn divisor_count(&self) -> u64 {
        self.exponents.iter().map(|&e| u64::from(e) + 1).product()
    }

    /// Split into `(primes, exponents)`.
    pub fn into_parts(self) -> (Vec<u64>, Vec<u32>) {
        (self.primes, self.exponents)
    }
}

impl DebugInvariants for Factorization {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Factorization");
    }

    fn validate_invariants(&self) -> Result<(), SieveError> {
        ensure(self.primes.len() == self.exponents.len(), || {
            format!(
                "{} primes but {} exponents",
                self.primes.len(),
                self.exponents.len()
            )
        })?;
        ensure(self.primes.windows(2).all(|w| w[0] < w[1]), || {
            "factor primes not strictly increasing".into()
        })?;
        if let Some(p) = self.primes.iter().find(|&&p| !is_prime_u64(p)) {
            return Err(SieveError::InvariantViolation(format!(
                "factor base {p} is not prime"
            )));
        }
        ensure(!self.exponents.contains(&0), || "zero exponent".into())
    }
}

/// Factorize `x` using the primes of `snapshot`.
pub fn factorize(snapshot: &SieveSnapshot, x: u64) -> Result<Factorization, SieveError> {
    if x < 1 {
        return Err(SieveError::NotFactorizable { value: x });
    }
    let limit = snapshot.factor_limit();
    if x > limit {
        log::warn!("refusing to factorise {x}: exceeds certifiable limit {limit}");
        return Err(SieveError::BeyondCapacity { value: x, limit });
    }

    let mut out = Factorization::default();
    if snapshot.is_known_prime(x) {
        out.push(x, 1);
        return Ok(out);
    }

    let mut rem = x;
    for p in snapshot.as_slice().iter().copied() {
        if rem == 1 {
            break;
        }
        // rem has no factor below p, so if p*p > rem it is prime.
        if p.checked_mul(p).is_none_or(|sq| sq > rem) {
            break;
        }
        let mut exp = 0u32;
        while rem % p == 0 {
            rem /= p;
            exp += 1;
        }
        if exp > 0 {
            out.push(p, exp);
        }
    }
    if rem > 1 {
        out.push(rem, 1);
    }
    log::trace!("factorised {x}: {:?}", out);
    out.debug_assert_invariants();
    Ok(out)
}
