mod util;
use util::*;

use prime_sieve::prelude::*;

#[test]
fn factors_of_twenty_eight() {
    let f = sieve30().factors(28).unwrap();
    assert_eq!(f.clone().into_parts(), (vec![2, 7], vec![2, 1]));
}

#[test]
fn product_reconstructs_every_value() {
    let s = PrimeSieve::new(3000);
    for x in 1..=3000u64 {
        let f = s.factors(x).unwrap();
        assert_eq!(f.value(), Some(x), "factorization of {x}: {f:?}");
        assert_strictly_increasing(f.primes());
        assert!(f.exponents().iter().all(|&e| e >= 1));
        assert!(f.primes().iter().all(|&p| naive_is_prime(p)));
    }
}

#[test]
fn values_above_the_bound_up_to_the_limit() {
    let s = sieve30();
    assert_eq!(s.factor_limit(), 841);
    for x in 31..=841u64 {
        let f = s.factors(x).unwrap();
        assert_eq!(f.value(), Some(x), "factorization of {x}");
        assert!(f.primes().iter().all(|&p| naive_is_prime(p)));
    }
}

#[test]
fn capacity_and_domain_errors() {
    let s = sieve30();
    let err = s.factors(900).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert_eq!(err, SieveError::BeyondCapacity { value: 900, limit: 841 });
    assert_eq!(s.factors(0).unwrap_err().kind(), ErrorKind::Domain);
}

#[test]
fn capacity_error_clears_after_resize() {
    let mut s = sieve30();
    assert!(s.factors(961).is_err());
    s.resize(31);
    let f = s.factors(961).unwrap();
    assert_eq!(f.iter().collect::<Vec<_>>(), vec![(31, 2)]);
}

#[test]
fn limit_tracks_largest_prime() {
    let s = PrimeSieve::new(100);
    assert_eq!(s.largest_prime(), Some(97));
    assert_eq!(s.factor_limit(), 97 * 97);
    assert_eq!(s.factors(97 * 89).unwrap().primes(), &[89, 97]);
}

#[test]
fn serializes_as_parallel_lists() {
    let f = sieve30().factors(360).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"primes":[2,3,5],"exponents":[3,2,1]}"#);
    let back: Factorization = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);
}
