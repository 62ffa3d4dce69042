//! Capacity-bounded placement rows.

use crate::placement::cost::gate_hpwl;
use rand::Rng;
use strata_config::VerticalExtent;
use strata_netlist::{Circuit, GateId, Position};

/// An ordered, capacity-bounded sequence of gates at a fixed y.
///
/// `occupied` is the sum of member widths in doubled units and never
/// exceeds `capacity` after a successful insert. A rejected insert leaves
/// the row untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    capacity: u32,
    occupied: u32,
    gates: Vec<GateId>,
}

impl Row {
    /// Creates an empty row.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            occupied: 0,
            gates: Vec::new(),
        }
    }

    /// Capacity in doubled units.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Occupied width in doubled units.
    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    /// Member gates in placement order.
    pub fn gates(&self) -> &[GateId] {
        &self.gates
    }

    /// Number of member gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the row holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    fn fits(&self, width: u32) -> bool {
        self.occupied + width <= self.capacity
    }

    /// Appends `gate` at the end if it fits.
    pub fn try_append(&mut self, gate: GateId, circuit: &Circuit) -> bool {
        let width = circuit.double_width(gate);
        if !self.fits(width) {
            return false;
        }
        self.gates.push(gate);
        self.occupied += width;
        true
    }

    /// Inserts `gate` at a uniformly random position in `[0, len]` if it fits.
    /// No random number is drawn when the gate does not fit.
    pub fn try_random_insert(&mut self, gate: GateId, circuit: &Circuit, rng: &mut impl Rng) -> bool {
        let width = circuit.double_width(gate);
        if !self.fits(width) {
            return false;
        }
        let index = rng.gen_range(0..=self.gates.len());
        self.gates.insert(index, gate);
        self.occupied += width;
        true
    }

    /// Whether replacing the gate at `index` with `candidate` keeps the row
    /// within capacity.
    pub fn can_replace(&self, index: usize, candidate: GateId, circuit: &Circuit) -> bool {
        let current = circuit.double_width(self.gates[index]);
        self.occupied - current + circuit.double_width(candidate) <= self.capacity
    }

    /// Puts `candidate` at `index` and returns the displaced gate.
    ///
    /// Capacity is not checked; callers either checked
    /// [`can_replace`](Self::can_replace) or perform both halves of a swap.
    pub fn replace(&mut self, index: usize, candidate: GateId, circuit: &Circuit) -> GateId {
        let displaced = std::mem::replace(&mut self.gates[index], candidate);
        self.occupied = self.occupied - circuit.double_width(displaced) + circuit.double_width(candidate);
        displaced
    }

    /// Lays the members out left to right at row coordinate `y`.
    pub fn assign_coordinates(&mut self, y: u32, circuit: &mut Circuit) {
        let mut x2 = 0;
        for &gate in &self.gates {
            circuit.set_position(gate, Some(Position { x2, y }));
            x2 += circuit.double_width(gate);
        }
        self.occupied = x2;
    }

    /// Removes and returns a uniformly random member, `None` if empty.
    ///
    /// The last member takes the vacated slot.
    pub fn pop_random(&mut self, circuit: &Circuit, rng: &mut impl Rng) -> Option<GateId> {
        if self.gates.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.gates.len());
        let gate = self.gates.swap_remove(index);
        self.occupied -= circuit.double_width(gate);
        Some(gate)
    }

    /// Sum of the net half-perimeters of every member gate.
    pub fn hpwl(&self, circuit: &Circuit, extent: VerticalExtent) -> f64 {
        self.gates
            .iter()
            .map(|&gate| gate_hpwl(circuit, gate, extent))
            .sum()
    }
}
