#![allow(dead_code)]
use prime_sieve::engine::PrimeSieve;

/// Primality by trial division with every integer up to the square root.
pub fn naive_is_prime(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Primes `<= bound` by trial division.
pub fn naive_primes(bound: u64) -> Vec<u64> {
    (2..=bound).filter(|&x| naive_is_prime(x)).collect()
}

/// The bound-30 sieve used by the worked scenarios.
pub fn sieve30() -> PrimeSieve {
    PrimeSieve::new(30)
}

/// Published table of the first 1000 primes.
pub fn reference_primes() -> Vec<u64> {
    let text = include_str!("data/primes_1000.txt");
    prime_sieve::io::read_primes(text.as_bytes()).expect("reference table parses")
}

/// Assert a sequence is strictly increasing.
pub fn assert_strictly_increasing(xs: &[u64]) {
    for w in xs.windows(2) {
        assert!(w[0] < w[1], "not strictly increasing at {:?}: {:?}", w, xs);
    }
}
