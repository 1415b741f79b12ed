//! Define the hard, compile-time limits on our `BB(_)` problem and search space.

/// A TM tape symbol.
pub type Symbol = u8;
/// A number indexing a TM state. The halt state of an n-state machine is `n`.
pub type TMState = u8;

/// The size of a Turing machine's tape alphabet.
pub const SYMBOLS: usize = 2;
/// The largest number of states we will enumerate machines for.
pub const MAX_TM_STATES: usize = 4;

/// Resource caps for one bounded simulation. A run that exceeds either one is assumed to run
/// forever. These values were tuned by hand until the known scores came out; they are not derived
/// from any termination argument, and changing them changes the reported score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits {
    /// The most tape cells a run may allocate.
    pub tape_cells: usize,
    /// The most distinct configuration fingerprints a run may record.
    pub fingerprints: usize,
}

const LIMITS: [Limits; MAX_TM_STATES] = [
    Limits { tape_cells: 4, fingerprints: 16 },
    Limits { tape_cells: 8, fingerprints: 32 },
    Limits { tape_cells: 12, fingerprints: 64 },
    Limits { tape_cells: 24, fingerprints: 128 },
];

impl Limits {
    /// The caps for machines with `states` states.
    /// Panics unless `1 <= states <= MAX_TM_STATES`.
    pub fn for_states(states: usize) -> Limits {
        LIMITS[states - 1]
    }
}
