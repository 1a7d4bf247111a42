//! Divisor enumeration from a prime factorization.
//!
//! Every divisor of `n = p1^e1 * ... * pk^ek` is obtained by choosing an
//! exponent in `0..=ei` for each prime. [`Factorization::divisors`] walks
//! those choices depth-first, one prime per level, so it produces exactly
//! `prod(ei + 1)` values with no intermediate tuples.

use super::{Factorization, factorize};
use crate::engine::SieveSnapshot;
use crate::sieve_error::SieveError;

impl Factorization {
    /// All divisors of the factorized value, itself included, ascending.
    ///
    /// Divisors that would overflow `u64` are skipped; this can only happen
    /// for factorizations assembled with [`Factorization::from_parts`].
    pub fn divisors(&self) -> Vec<u64> {
        let pairs: Vec<(u64, u32)> = self.iter().collect();
        let mut out = Vec::with_capacity(usize::try_from(self.divisor_count()).unwrap_or(0));
        expand(&pairs, 1, &mut out);
        out.sort_unstable();
        out
    }
}

fn expand(pairs: &[(u64, u32)], acc: u64, out: &mut Vec<u64>) {
    let Some((&(p, e), rest)) = pairs.split_first() else {
        out.push(acc);
        return;
    };
    let mut term = acc;
    for k in 0..=e {
        expand(rest, term, out);
        if k == e {
            break;
        }
        match term.checked_mul(p) {
            Some(t) => term = t,
            None => break,
        }
    }
}

/// Divisors of `n` strictly below `n`, ascending. Empty for `n == 1`.
pub fn proper_divisors(snapshot: &SieveSnapshot, n: u64) -> Result<Vec<u64>, SieveError> {
    let f = factorize(snapshot, n)?;
    let mut all = f.divisors();
    // The largest divisor is n itself.
    all.retain(|&d| d < n);
    Ok(all)
}
