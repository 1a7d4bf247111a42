//! Deterministic Miller-Rabin primality for any `u64`.
//!
//! Used to certify the bases of a [`Factorization`](super::Factorization)
//! that did not come out of a sieve, where primes may lie far past any bound.
//! The first twelve primes as witnesses are exact for every `n < 3.3e24`.

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// `base^exponent % modulo` by repeated squaring.
fn pow_mod(mut base: u64, mut exponent: u64, modulo: u64) -> u64 {
    let mut result = 1 % modulo;
    base %= modulo;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulo);
        }
        exponent >>= 1;
        base = mul_mod(base, base, modulo);
    }
    result
}

/// Whether `n` is prime.
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
