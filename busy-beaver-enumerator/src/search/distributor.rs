//! A lock-free cursor over the permutation indices of a search.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out the permutation indices `0..total`, one at a time, to any number of threads.
/// Each index goes to exactly one caller; there are no locks, just a shared cursor.
pub struct WorkDistributor {
    cursor: AtomicU64,
    total: u64,
}

impl WorkDistributor {
    pub fn new(total: u64) -> WorkDistributor {
        WorkDistributor {
            cursor: AtomicU64::new(0),
            total,
        }
    }

    /// The next unclaimed index, or `None` once all are gone.
    pub fn claim(&self) -> Option<u64> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        (index < self.total).then_some(index)
    }

    /// How many indices have been handed out so far.
    pub fn position(&self) -> u64 {
        self.cursor.load(Ordering::Relaxed).min(self.total)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
