//! Restartable iteration over a snapshot's prime list.

use std::iter::FusedIterator;
use std::sync::Arc;

/// Ascending iterator over the primes of one [`SieveSnapshot`](super::SieveSnapshot).
///
/// Holds its own handle on the prime list, so it outlives resizes of the
/// engine it came from. Clone it to restart from the current position.
#[derive(Clone, Debug)]
pub struct Primes {
    list: Arc<[u64]>,
    front: usize,
    back: usize,
}

impl Primes {
    pub(crate) fn new(list: Arc<[u64]>) -> Self {
        let back = list.len();
        Self {
            list,
            front: 0,
            back,
        }
    }

    /// The primes not yet yielded, in ascending order.
    pub fn as_slice(&self) -> &[u64] {
        &self.list[self.front..self.back]
    }
}

impl Iterator for Primes {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.front == self.back {
            return None;
        }
        let p = self.list[self.front];
        self.front += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<u64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Primes {
    #[inline]
    fn next_back(&mut self) -> Option<u64> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.list[self.back])
    }
}

impl ExactSizeIterator for Primes {}
impl FusedIterator for Primes {}
