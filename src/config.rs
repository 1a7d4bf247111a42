//! Construction settings for [`PrimeSieve`](crate::engine::PrimeSieve).

use serde::{Deserialize, Serialize};

/// Settings used to build a sieve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    /// Inclusive upper bound `N` of the sieve.
    pub bound: usize,
    /// Run the full invariant check in [`PrimeSieve::try_from_config`] and
    /// [`PrimeSieve::try_resize`], in every build profile.
    ///
    /// [`PrimeSieve::try_from_config`]: crate::engine::PrimeSieve::try_from_config
    /// [`PrimeSieve::try_resize`]: crate::engine::PrimeSieve::try_resize
    pub validate_on_build: bool,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            bound: 1000,
            validate_on_build: false,
        }
    }
}

impl SieveConfig {
    /// Replace the sieve bound.
    pub fn with_bound(mut self, bound: usize) -> Self {
        self.bound = bound;
        self
    }

    /// Turn runtime invariant validation on or off.
    pub fn with_validation(mut self, on: bool) -> Self {
        self.validate_on_build = on;
        self
    }
}
