//! The full row assignment and the swap move used by annealing.

use crate::row::Row;
use rand::Rng;
use strata_netlist::{Circuit, GateId};

/// A gate's address inside a [`Layout`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Slot {
    /// Row index.
    pub row: usize,
    /// Position within the row.
    pub index: usize,
}

/// Rows of placed gates. Row `i` sits at y = `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Row>,
}

impl Layout {
    /// Creates `row_count` empty rows of the given capacity.
    pub fn new(row_count: usize, capacity: u32) -> Self {
        Self {
            rows: (0..row_count).map(|_| Row::new(capacity)).collect(),
        }
    }

    /// Wraps already-filled rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows, bottom to top.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to all rows.
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row coordinate of row `index`.
    pub fn row_y(index: usize) -> u32 {
        index as u32 + 1
    }

    /// Gate at `slot`.
    pub fn gate_at(&self, slot: Slot) -> GateId {
        self.rows[slot.row].gates()[slot.index]
    }

    /// Number of placed gates.
    pub fn gate_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Sum of all rows' occupied widths, doubled units.
    pub fn occupied_total(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.occupied())).sum()
    }

    /// Widest row, doubled units.
    pub fn max_occupied(&self) -> u32 {
        self.rows.iter().map(Row::occupied).max().unwrap_or(0)
    }

    /// Assigns coordinates to every gate from the current row contents.
    pub fn assign_coordinates(&mut self, circuit: &mut Circuit) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.assign_coordinates(Self::row_y(i), circuit);
        }
    }

    /// Picks two nonempty rows, then an item in each, consuming the RNG in
    /// that order. Empty rows are resampled. Returns `None` when no row
    /// holds a gate.
    pub fn sample_swap(&self, rng: &mut impl Rng) -> Option<(Slot, Slot)> {
        if self.rows.iter().all(Row::is_empty) {
            return None;
        }
        let row_a = self.sample_nonempty_row(rng);
        let row_b = self.sample_nonempty_row(rng);
        let a = Slot {
            row: row_a,
            index: rng.gen_range(0..self.rows[row_a].len()),
        };
        let b = Slot {
            row: row_b,
            index: rng.gen_range(0..self.rows[row_b].len()),
        };
        Some((a, b))
    }

    fn sample_nonempty_row(&self, rng: &mut impl Rng) -> usize {
        loop {
            let row = rng.gen_range(0..self.rows.len());
            if !self.rows[row].is_empty() {
                return row;
            }
        }
    }

    /// Whether exchanging the gates at `a` and `b` keeps both rows within
    /// capacity. A swap inside one row never changes its occupancy.
    pub fn can_swap(&self, a: Slot, b: Slot, circuit: &Circuit) -> bool {
        if a.row == b.row {
            return true;
        }
        let (gate_a, gate_b) = (self.gate_at(a), self.gate_at(b));
        self.rows[a.row].can_replace(a.index, gate_b, circuit)
            && self.rows[b.row].can_replace(b.index, gate_a, circuit)
    }

    /// Exchanges the gates at `a` and `b` and re-derives the coordinates of
    /// the affected rows. Applying the same swap twice restores the layout
    /// and every coordinate exactly.
    pub fn swap(&mut self, a: Slot, b: Slot, circuit: &mut Circuit) {
        let (gate_a, gate_b) = (self.gate_at(a), self.gate_at(b));
        self.rows[a.row].replace(a.index, gate_b, circuit);
        self.rows[b.row].replace(b.index, gate_a, circuit);
        self.rows[a.row].assign_coordinates(Self::row_y(a.row), circuit);
        if b.row != a.row {
            self.rows[b.row].assign_coordinates(Self::row_y(b.row), circuit);
        }
    }
}
