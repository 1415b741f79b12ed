//! Turing machine transition tables: decoded from permutation indices during the search, or
//! parsed from the bbchallenge.org standard text format.

use super::{Symbol, TMState, MAX_TM_STATES, SYMBOLS};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Left or right.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Side {
    L,
    #[default]
    R,
}

impl Side {
    /// The change in head position.
    pub fn delta(self) -> i64 {
        match self {
            Side::L => -1,
            Side::R => 1,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One entry of a transition table. Conventions: "w"rite `write`, move `dir`, go to `next`.
/// `next` equal to the machine's state count means halt.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Trans {
    pub write: Symbol,
    pub dir: Side,
    pub next: TMState,
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("use https://discuss.bbchallenge.org/t/standard-tm-text-format")]
pub struct BadTMText;

impl Trans {
    /// Unpack one base-`4*(n+1)` digit of a permutation index: bit 0 is the symbol written,
    /// bit 1 selects right over left, and the remaining bits name the next state.
    fn from_digit(d: u64) -> Trans {
        Trans {
            write: (d & 1) as Symbol,
            dir: if d & 2 != 0 { Side::R } else { Side::L },
            next: (d >> 2) as TMState,
        }
    }

    /// Parse `"1RB"`-style text. Any state letter past the last real state (or `-`) means halt.
    fn parse(text: &str, states: usize) -> Result<Self, BadTMText> {
        let mut chars = text.chars();
        let write = match chars.next() {
            Some('-') => 0 as Symbol,
            Some(c) if c.is_ascii_digit() => (c as u32 - '0' as u32) as Symbol,
            _ => return Err(BadTMText {}),
        };
        if write as usize >= SYMBOLS {
            return Err(BadTMText {});
        }
        let dir = match chars.next() {
            Some('-') | Some('R') => Side::R,
            Some('L') => Side::L,
            _ => return Err(BadTMText {}),
        };
        let next = match chars.next() {
            Some(c @ 'A'..='Z') if ((c as u8 - b'A') as usize) < states => c as u8 - b'A',
            Some('A'..='Z') | Some('-') => states as TMState,
            _ => return Err(BadTMText {}),
        };
        Ok(Trans { write, dir, next })
    }
}

/// A transition table for an n-state, 2-symbol machine which starts in state 0 (`A`).
#[derive(Clone, Copy, SerializeDisplay, DeserializeFromStr, Debug, Eq, PartialEq)]
pub struct Machine {
    states: usize,
    code: [[Trans; SYMBOLS]; MAX_TM_STATES],
}

impl Machine {
    /// The radix of each transition digit in a permutation index for `states` states.
    fn radix(states: usize) -> u64 {
        4 * (states as u64 + 1)
    }

    /// How many permutation indices (syntactically distinct tables) exist for `states` states.
    pub fn permutations(states: usize) -> u64 {
        Self::radix(states).pow((SYMBOLS * states) as u32)
    }

    /// Build the table for `index`, which must lie in `0..permutations(states)`.
    /// The flag is false when no transition reaches the halt state; such a machine can never
    /// halt, so the caller should skip it.
    pub fn decode(index: u64, states: usize) -> (Machine, bool) {
        let radix = Self::radix(states);
        let mut tm = Machine {
            states,
            code: Default::default(),
        };
        let mut rest = index;
        let mut halts = false;
        // The first transition, (A, 0), is the most significant digit.
        for slot in (0..SYMBOLS * states).rev() {
            let trans = Trans::from_digit(rest % radix);
            rest /= radix;
            halts |= trans.next as usize == states;
            tm.code[slot / SYMBOLS][slot % SYMBOLS] = trans;
        }
        (tm, halts)
    }

    /// The number of (non-halt) states.
    pub fn states(&self) -> usize {
        self.states
    }

    /// The entry for reading `r` in state `f`.
    pub fn transition(&self, f: TMState, r: Symbol) -> Trans {
        self.code[f as usize][r as usize]
    }

    /// Every entry, keyed by (state, symbol read).
    pub fn transitions(&self) -> impl Iterator<Item = (TMState, Symbol, Trans)> + '_ {
        self.code[..self.states].iter().enumerate().flat_map(|(f, t01)| {
            t01.iter().enumerate().map(move |(r, &trans)| (f as TMState, r as Symbol, trans))
        })
    }

    /// Whether any transition leads to the halt state.
    pub fn halts_reachable(&self) -> bool {
        self.transitions().any(|(_, _, t)| t.next as usize == self.states)
    }

    fn fmt_trans(&self, t: Trans, f: &mut Formatter) -> std::fmt::Result {
        let next = if t.next as usize >= self.states {
            'Z'
        } else {
            (b'A' + t.next) as char
        };
        write!(f, "{}{}{}", t.write, t.dir, next)
    }
}

impl FromStr for Machine {
    type Err = BadTMText;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = text.split('_').collect();
        let states = groups.len();
        if states > MAX_TM_STATES || groups.iter().any(|g| g.len() != 3 * SYMBOLS) {
            return Err(BadTMText {});
        }
        let mut tm = Machine {
            states,
            code: Default::default(),
        };
        for (r, group) in groups.iter().enumerate() {
            for s in 0..SYMBOLS {
                let t = group.get(3 * s..3 * (s + 1)).ok_or(BadTMText {})?;
                tm.code[r][s] = Trans::parse(t, states)?;
            }
        }
        Ok(tm)
    }
}

impl Display for Machine {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for (i, t01) in self.code[..self.states].iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            for &t in t01 {
                self.fmt_trans(t, f)?;
            }
        }
        Ok(())
    }
}
