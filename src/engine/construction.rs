//! Sieve of Eratosthenes construction.
//!
//! [`build_snapshot`] marks every integer in `[0, bound]`, strikes out 0, 1
//! and every multiple of each surviving integer, then derives the ascending
//! prime list from the surviving marks. Each call allocates fresh arrays;
//! nothing is shared with a previous snapshot.

use std::sync::Arc;

use super::snapshot::SieveSnapshot;

/// Mark primes in `[0, bound]`; `marks[i]` is `true` iff `i` is prime.
pub fn sieve_marks(bound: usize) -> Vec<bool> {
    let mut marks = vec![true; bound + 1];
    marks[0] = false;
    if bound >= 1 {
        marks[1] = false;
    }

    let mut i = 2usize;
    // Multiples below i*i were already struck by a smaller factor.
    while i.checked_mul(i).is_some_and(|sq| sq <= bound) {
        if marks[i] {
            for m in (i * i..=bound).step_by(i) {
                marks[m] = false;
            }
        }
        i += 1;
    }
    marks
}

/// Extract the marked indices in ascending order.
pub fn collect_primes(marks: &[bool]) -> Vec<u64> {
    marks
        .iter()
        .enumerate()
        .filter_map(|(i, &is_prime)| is_prime.then_some(i as u64))
        .collect()
}

/// Build a complete snapshot for `[0, bound]`.
pub fn build_snapshot(bound: usize) -> SieveSnapshot {
    let marks = sieve_marks(bound);
    let primes = collect_primes(&marks);
    log::debug!(
        "built sieve: bound={bound} primes={} largest={:?}",
        primes.len(),
        primes.last()
    );
    SieveSnapshot::from_parts(bound, Arc::from(marks), Arc::from(primes))
}
