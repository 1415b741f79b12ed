//! Compute the Busy Beaver score Σ(n) for n ≤ 4 by brute force: enumerate every n-state,
//! 2-symbol transition table, simulate each one under fixed resource caps, and keep the largest
//! number of ones left by a machine that halts within them.
//!
//! The caps make this an approximation. Halting is undecidable, and a machine that would halt
//! just past a cap is counted as a non-halter; the caps in `core::Limits` are the ones which
//! reproduce Σ(1..=4) = 1, 4, 6, 13.

pub mod core;
pub mod search;

pub use crate::core::{Machine, Outcome, Simulator};
pub use crate::search::{busy_beaver, run_large, run_small, SearchError, SearchReport};
