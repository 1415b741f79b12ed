//! Bounded simulation of one machine from a blank tape.
//! A run ends when the machine halts, when a configuration repeats, or when it outgrows its
//! `Limits`. The last two are "bail-outs": the machine is assumed to run forever and earns no
//! score. Near the caps this can misjudge a slow halter as non-halting.

use super::{fingerprint, Limits, Machine, Symbol, TMState, Tape};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Why a run was abandoned.
#[derive(Serialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum BailReason {
    /// The tape grew past `Limits::tape_cells`.
    TapeLimit,
    /// More than `Limits::fingerprints` distinct configurations were seen.
    FingerprintLimit,
    /// A configuration fingerprint came up twice.
    Cycle,
}

/// How a bounded run ended.
#[derive(Serialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Reached the halt state after `steps` transitions, leaving `score` ones on the tape.
    Halted { score: usize, steps: u64 },
    Bailed(BailReason),
}

impl Outcome {
    /// The run's contribution to the Busy Beaver maximum, if any.
    pub fn score(&self) -> Option<usize> {
        match *self {
            Outcome::Halted { score, .. } => Some(score),
            Outcome::Bailed(_) => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Outcome::Halted { score, steps } => {
                write!(f, "halted after {} steps with {} ones", steps, score)
            }
            Outcome::Bailed(reason) => write!(f, "bailed out ({:?})", reason),
        }
    }
}

/// A reusable simulator for machines of one size. Each worker owns one; the tape and the set of
/// visited fingerprints are cleared at the start of every run.
pub struct Simulator {
    limits: Limits,
    tape: Tape,
    seen: FxHashSet<u64>,
}

impl Simulator {
    pub fn new(limits: Limits) -> Simulator {
        Simulator {
            limits,
            tape: Tape::new(),
            seen: FxHashSet::default(),
        }
    }

    /// A simulator with the caps for `states`-state machines.
    pub fn for_states(states: usize) -> Simulator {
        Self::new(Limits::for_states(states))
    }

    /// The tape as the last run left it.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Run `tm` from the blank tape in state 0 until it halts or bails out.
    pub fn run(&mut self, tm: &Machine) -> Outcome {
        self.tape.reset();
        self.seen.clear();
        let halt = tm.states() as TMState;
        let (mut state, mut head, mut steps) = (0 as TMState, 0i64, 0u64);
        let (mut last_read, mut last_index) = (0 as Symbol, 0usize);
        while state < halt {
            if self.tape.len() > self.limits.tape_cells {
                return Outcome::Bailed(BailReason::TapeLimit);
            }
            if self.seen.len() > self.limits.fingerprints {
                return Outcome::Bailed(BailReason::FingerprintLimit);
            }
            if !self.seen.insert(fingerprint(&self.tape, state, last_read, last_index)) {
                return Outcome::Bailed(BailReason::Cycle);
            }
            last_index = self.tape.reach(head);
            last_read = self.tape.cells()[last_index];
            let t = tm.transition(state, last_read);
            self.tape.write(head, t.write);
            head += t.dir.delta();
            state = t.next;
            steps += 1;
        }
        Outcome::Halted {
            score: self.tape.weight(),
            steps,
        }
    }

    /// Shorthand for `run(tm).score()`.
    pub fn score(&mut self, tm: &Machine) -> Option<usize> {
        self.run(tm).score()
    }
}
