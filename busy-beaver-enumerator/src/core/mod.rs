//! Machines, tapes and the bounded simulator: everything needed to score a single machine.

mod fingerprint;
mod limits;
mod machine;
mod simulator;
mod tape;

pub use fingerprint::fingerprint;
pub use limits::{Limits, Symbol, TMState, MAX_TM_STATES, SYMBOLS};
pub use machine::{BadTMText, Machine, Side, Trans};
pub use simulator::{BailReason, Outcome, Simulator};
pub use tape::{tape_index, Tape};
