//! A djb2-style rolling hash over a simulator configuration, for spotting repeats within a run.
//! Distinct configurations may collide; the simulator then mistakes a machine for a looper.

use super::{Symbol, TMState, Tape};

const SEED: u64 = 5381;

fn mix(h: u64, v: u64) -> u64 {
    h.wrapping_mul(33).wrapping_add(v)
}

/// Hash the tape contents (including the allocated length), the current state, the symbol last
/// read and the tape index it was read from.
pub fn fingerprint(tape: &Tape, state: TMState, last_read: Symbol, head_index: usize) -> u64 {
    let h = tape
        .cells()
        .iter()
        .fold(SEED.wrapping_add(tape.len() as u64), |h, &c| mix(h, c as u64));
    let h = mix(h, state as u64);
    let h = mix(h, last_read as u64);
    mix(h, head_index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blank_tape() {
        // 5381 + 1, then one 0 cell, then state 0, symbol 0, index 0.
        assert_eq!(fingerprint(&Tape::new(), 0, 0, 0), 5382 * 33 * 33 * 33 * 33);
    }

    #[test]
    fn test_sensitivity() {
        let mut tape = Tape::new();
        tape.write(1, 1);
        let base = fingerprint(&tape, 1, 0, 2);
        assert_ne!(base, fingerprint(&tape, 2, 0, 2));
        assert_ne!(base, fingerprint(&tape, 1, 1, 2));
        assert_ne!(base, fingerprint(&tape, 1, 0, 1));
        let mut other = tape.clone();
        other.write(-1, 1);
        assert_ne!(base, fingerprint(&other, 1, 0, 2));
        // Same symbols, more allocated cells.
        let mut longer = tape.clone();
        longer.reach(-3);
        assert_ne!(base, fingerprint(&longer, 1, 0, 2));
    }

    proptest! {
        #[test]
        fn prop_equal_configurations_hash_equal(
            writes in proptest::collection::vec((-10i64..10, 0u8..2), 0..32),
            state in 0u8..4,
            last_read in 0u8..2,
            head in -10i64..10,
        ) {
            let mut a = Tape::new();
            let mut b = Tape::new();
            for &(pos, sym) in &writes {
                a.write(pos, sym);
            }
            for &(pos, sym) in &writes {
                b.write(pos, sym);
            }
            let idx = a.reach(head);
            b.reach(head);
            prop_assert_eq!(fingerprint(&a, state, last_read, idx), fingerprint(&b, state, last_read, idx));
        }
    }
}
