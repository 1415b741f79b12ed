//! A lock-free running maximum of machine scores.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The best score seen so far, shared by all workers. It only ever increases, so the final value
/// is the maximum of every `update`, whatever order they arrive in.
#[derive(Debug, Default)]
pub struct ScoreAggregator {
    best: AtomicUsize,
}

impl ScoreAggregator {
    pub fn new() -> ScoreAggregator {
        Self::default()
    }

    /// Raise the shared maximum to `candidate` if it is larger.
    pub fn update(&self, candidate: usize) {
        let mut current = self.best.load(Ordering::Relaxed);
        while candidate > current {
            match self.best.compare_exchange_weak(
                current,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
    }

    pub fn get(&self) -> usize {
        self.best.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::AtomicBool;
    use std::thread;

    #[test]
    fn test_update() {
        let best = ScoreAggregator::new();
        assert_eq!(best.get(), 0);
        best.update(3);
        best.update(1);
        assert_eq!(best.get(), 3);
        best.update(7);
        assert_eq!(best.get(), 7);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_concurrent_max_is_monotonic(
            batches in proptest::collection::vec(proptest::collection::vec(0usize..10_000, 1..200), 1..8)
        ) {
            let best = ScoreAggregator::new();
            let done = AtomicBool::new(false);
            let observed = thread::scope(|s| {
                let watcher = s.spawn(|| {
                    let mut seen = vec![best.get()];
                    while !done.load(Ordering::Acquire) {
                        seen.push(best.get());
                    }
                    seen.push(best.get());
                    seen
                });
                let workers: Vec<_> = batches
                    .iter()
                    .map(|batch| {
                        let best = &best;
                        s.spawn(move || batch.iter().for_each(|&c| best.update(c)))
                    })
                    .collect();
                for w in workers {
                    w.join().unwrap();
                }
                done.store(true, Ordering::Release);
                watcher.join().unwrap()
            });
            prop_assert!(observed.windows(2).all(|w| w[0] <= w[1]));
            let expected = batches.iter().flatten().copied().max().unwrap_or(0);
            prop_assert_eq!(best.get(), expected);
            prop_assert_eq!(observed.last().copied(), Some(expected));
        }
    }
}
