//! The simulator's tape: a zero-filled buffer indexed by signed head position.

use super::Symbol;

/// The index of head position `pos` in a `Tape`: 0, -1, 1, -2, 2, ... map to 0, 1, 2, 3, 4, ...
pub fn tape_index(pos: i64) -> usize {
    (pos.unsigned_abs() as usize) * 2 - (pos < 0) as usize
}

/// A bidirectional tape stored as one growable buffer, interleaving both halves via `tape_index`.
/// Cells never touched read as 0. Storage grows geometrically and never shrinks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tape {
    cells: Vec<Symbol>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// A blank tape with a single allocated cell.
    pub fn new() -> Tape {
        Tape { cells: vec![0] }
    }

    /// Return to the blank single-cell state, keeping the allocation.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.cells.push(0);
    }

    /// The number of allocated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Make sure the cell at `pos` is allocated (growing to twice its index if not); return
    /// its index.
    pub fn reach(&mut self, pos: i64) -> usize {
        let idx = tape_index(pos);
        if idx >= self.cells.len() {
            self.cells.resize(idx << 1, 0);
        }
        idx
    }

    pub fn read(&self, pos: i64) -> Symbol {
        self.cells.get(tape_index(pos)).copied().unwrap_or(0)
    }

    pub fn write(&mut self, pos: i64, sym: Symbol) {
        let idx = self.reach(pos);
        self.cells[idx] = sym;
    }

    /// The number of cells holding a 1.
    pub fn weight(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
}
