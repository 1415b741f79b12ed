//! Percent-complete reporting for the multi-threaded search.

use super::WorkDistributor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// How often the monitor samples the work cursor.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Whole percent of `done` out of `total`, rounded down.
pub fn percent(done: u64, total: u64) -> u8 {
    if total == 0 {
        100
    } else {
        (done.min(total) as u128 * 100 / total as u128) as u8
    }
}

/// Watches a `WorkDistributor` from its own thread and reports each new whole percentage.
/// It never touches the work itself.
pub struct ProgressMonitor<'a> {
    work: &'a WorkDistributor,
    finished: &'a AtomicBool,
    interval: Duration,
}

impl<'a> ProgressMonitor<'a> {
    pub fn new(work: &'a WorkDistributor, finished: &'a AtomicBool) -> Self {
        Self::with_interval(work, finished, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval(
        work: &'a WorkDistributor,
        finished: &'a AtomicBool,
        interval: Duration,
    ) -> Self {
        ProgressMonitor {
            work,
            finished,
            interval,
        }
    }

    /// Call `sink` with strictly increasing percentages until `finished` is raised.
    /// The last value reported is always 100.
    pub fn watch(self, mut sink: impl FnMut(u8)) {
        let mut reported = 0u8;
        loop {
            let done = self.finished.load(Ordering::Acquire);
            let now = if done {
                100
            } else {
                percent(self.work.position(), self.work.total())
            };
            if now > reported {
                sink(now);
                reported = now;
            }
            if done {
                return;
            }
            thread::sleep(self.interval);
        }
    }
}
