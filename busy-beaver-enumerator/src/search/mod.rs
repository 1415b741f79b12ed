//! Exhaustive enumeration of every transition table of a given size.
//! One and two states are small enough to scan on the calling thread. Three and four states
//! are split across worker threads which claim indices from a shared `WorkDistributor` and
//! fold their scores into a shared `ScoreAggregator`, while a `ProgressMonitor` reports on the
//! side.

mod aggregator;
mod distributor;
mod progress;

pub use aggregator::ScoreAggregator;
pub use distributor::WorkDistributor;
pub use progress::{percent, ProgressMonitor, DEFAULT_POLL_INTERVAL};

use crate::core::{Machine, Simulator, MAX_TM_STATES};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;
use thiserror::Error;

/// The largest size scanned on a single thread.
pub const MAX_SMALL_STATES: usize = 2;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SearchError {
    #[error("can not compute the busy beaver function for {0} states (at most {max})", max = MAX_TM_STATES)]
    UnsupportedStates(usize),
}

/// The result of a full search, as printed by `bb-enumerate search --json`.
#[derive(Serialize, Clone, Debug, Eq, PartialEq)]
pub struct SearchReport {
    pub states: usize,
    pub threads: usize,
    pub permutations: u64,
    pub score: usize,
    pub elapsed_ms: u128,
}

/// Score every `states`-state machine on the current thread. `states` must be 1 or 2.
pub fn run_small(states: usize) -> usize {
    let mut sim = Simulator::for_states(states);
    (0..Machine::permutations(states))
        .filter_map(|index| match Machine::decode(index, states) {
            (tm, true) => sim.score(&tm),
            (_, false) => None,
        })
        .max()
        .unwrap_or(0)
}

/// Score every `states`-state machine (3 or 4) on `threads` worker threads.
/// `progress` runs on a monitor thread and receives increasing percentages, ending with 100.
/// The caller is expected to have clamped `threads` to something sensible.
pub fn run_large(states: usize, threads: usize, progress: impl FnMut(u8) + Send) -> usize {
    let work = WorkDistributor::new(Machine::permutations(states));
    let best = ScoreAggregator::new();
    let finished = AtomicBool::new(false);
    thread::scope(|s| {
        s.spawn(|| ProgressMonitor::new(&work, &finished).watch(progress));
        let workers: Vec<_> = (0..threads)
            .map(|_| s.spawn(|| search_worker(states, &work, &best)))
            .collect();
        let joined: Vec<_> = workers.into_iter().map(|w| w.join()).collect();
        // The monitor must be released even if a worker panicked, or the scope never ends.
        finished.store(true, Ordering::Release);
        for result in joined {
            if let Err(panic) = result {
                std::panic::resume_unwind(panic);
            }
        }
    });
    best.get()
}

/// Claim, decode, simulate, record; until the work runs out.
fn search_worker(states: usize, work: &WorkDistributor, best: &ScoreAggregator) {
    let mut sim = Simulator::for_states(states);
    while let Some(index) = work.claim() {
        let (tm, candidate) = Machine::decode(index, states);
        if !candidate {
            continue;
        }
        if let Some(score) = sim.score(&tm) {
            best.update(score);
        }
    }
}

/// Σ(`states`): pick the single- or multi-threaded search by size.
/// Zero states is the machine that halts immediately, with a blank tape.
pub fn busy_beaver(
    states: usize,
    threads: usize,
    progress: impl FnMut(u8) + Send,
) -> Result<SearchReport, SearchError> {
    if states > MAX_TM_STATES {
        return Err(SearchError::UnsupportedStates(states));
    }
    let start = Instant::now();
    let permutations = if states == 0 { 0 } else { Machine::permutations(states) };
    log::info!("Searching {} machines with {} states", permutations, states);
    let (score, threads) = match states {
        0 => (0, 0),
        1..=MAX_SMALL_STATES => (run_small(states), 1),
        _ => {
            log::debug!("Using {} worker threads", threads);
            (run_large(states, threads, progress), threads)
        }
    };
    let elapsed = start.elapsed();
    log::info!("Score for {} states: {} ({:.1?})", states, score, elapsed);
    Ok(SearchReport {
        states,
        threads,
        permutations,
        score,
        elapsed_ms: elapsed.as_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_scores() {
        assert_eq!(run_small(1), 1);
        assert_eq!(run_small(2), 4);
    }

    #[test]
    fn test_dispatch() {
        let report = busy_beaver(2, 8, |_| {}).unwrap();
        assert_eq!(report.score, 4);
        assert_eq!(report.threads, 1);
        assert_eq!(report.permutations, 20_736);
        assert_eq!(busy_beaver(0, 1, |_| {}).unwrap().score, 0);
        assert_eq!(
            busy_beaver(5, 1, |_| {}),
            Err(SearchError::UnsupportedStates(5))
        );
    }

    #[test]
    fn test_report_json() {
        let report = SearchReport {
            states: 1,
            threads: 1,
            permutations: 64,
            score: 1,
            elapsed_ms: 0,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"states":1,"threads":1,"permutations":64,"score":1,"elapsed_ms":0}"#
        );
    }
}
