#![cfg_attr(docsrs, feature(doc_cfg))]
//! # prime-sieve
//!
//! prime-sieve is a bounded-range prime oracle built on the Sieve of Eratosthenes. Given an
//! upper bound `N` it precomputes which integers in `[1, N]` are prime and answers
//! primality, nth-prime, enumeration, factorization and divisor queries against that state.
//!
//! ## Features
//! - O(1) primality test and nth-prime lookup within the bound
//! - Restartable prime iterators that stay valid across resizes
//! - Trial-division factorization certified up to the square of the largest known prime
//! - Proper-divisor enumeration derived from the factorization
//! - Distinct error kinds for range, domain and capacity failures
//! - Prime list persistence helpers
//!
//! ## Invariant checking
//!
//! Snapshots and factorizations validate their invariants in debug builds. Enable the
//! `check-invariants` (or `strict-invariants`) feature to keep those checks in release
//! builds, or set [`SieveConfig::validate_on_build`](config::SieveConfig) and use
//! [`PrimeSieve::try_from_config`](engine::PrimeSieve::try_from_config) to get violations back as errors.
//!
//! ## Usage
//!
//! ```rust
//! use prime_sieve::prelude::*;
//!
//! let mut sieve = PrimeSieve::new(30);
//! assert!(sieve.is_prime(17).unwrap());
//! assert_eq!(sieve.factors(28).unwrap().exponents(), &[2, 1]);
//!
//! // 31 is past the bound until the sieve grows.
//! assert_eq!(sieve.is_prime(31).unwrap_err().kind(), ErrorKind::Range);
//! sieve.resize(100);
//! assert!(sieve.is_prime(31).unwrap());
//! ```

pub mod config;
pub mod debug_invariants;
pub mod engine;
pub mod factor;
pub mod io;
pub mod sieve_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::config::SieveConfig;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::engine::{PrimeSieve, Primes, SieveSnapshot};
    pub use crate::factor::Factorization;
    pub use crate::io::{read_primes, write_primes};
    pub use crate::sieve_error::{ErrorKind, SieveError};
}
