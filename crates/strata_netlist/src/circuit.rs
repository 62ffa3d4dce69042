//! The circuit graph: a gate arena with name lookup and bookkeeping.

use crate::error::NetlistError;
use crate::gate::{Gate, GateType, Position};
use crate::ids::GateId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Per-type gate counters and the running doubled area.
///
/// Counters reflect every type assignment, including a later retype of a
/// forward-referenced gate, and are never decremented.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateStats {
    counts: BTreeMap<GateType, usize>,
    double_area: u64,
}

impl GateStats {
    /// Number of type assignments recorded for `gate_type`.
    pub fn count(&self, gate_type: GateType) -> usize {
        self.counts.get(&gate_type).copied().unwrap_or(0)
    }

    /// Sum of all assigned doubled widths.
    pub fn double_area(&self) -> u64 {
        self.double_area
    }

    /// Total area in physical units.
    pub fn area(&self) -> f64 {
        self.double_area as f64 / 2.0
    }

    fn record_type(&mut self, gate_type: GateType) {
        *self.counts.entry(gate_type).or_insert(0) += 1;
    }
}

/// The complete gate universe of a design.
///
/// Gates live in a dense arena in creation order; fanin/fanout lists hold
/// [`GateId`] handles into it, so the graph has no ownership cycles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CircuitData")]
pub struct Circuit {
    gates: Vec<Gate>,
    inputs: Vec<GateId>,
    outputs: Vec<GateId>,
    stats: GateStats,
    /// Name index, derived from `gates`.
    #[serde(skip)]
    by_name: HashMap<String, GateId>,
}

/// Serialized form of a [`Circuit`]; the name index is rebuilt on load.
#[derive(Deserialize)]
struct CircuitData {
    gates: Vec<Gate>,
    inputs: Vec<GateId>,
    outputs: Vec<GateId>,
    stats: GateStats,
}

impl From<CircuitData> for Circuit {
    fn from(data: CircuitData) -> Self {
        let by_name = data
            .gates
            .iter()
            .enumerate()
            .map(|(i, g)| (g.name.clone(), GateId::from_raw(i as u32)))
            .collect();
        Self {
            gates: data.gates,
            inputs: data.inputs,
            outputs: data.outputs,
            stats: data.stats,
            by_name,
        }
    }
}

impl Circuit {
    /// Creates an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gate of the type named by `type_token` and bumps its type
    /// counter. Unrecognized tokens yield [`GateType::Undefined`].
    pub fn create_gate(&mut self, name: &str, type_token: &str) -> Result<GateId, NetlistError> {
        if self.by_name.contains_key(name) {
            return Err(NetlistError::DuplicateGate(name.to_string()));
        }
        let gate_type = GateType::from_token(type_token);
        let id = GateId::from_raw(self.gates.len() as u32);
        self.gates.push(Gate::new(name, gate_type));
        self.by_name.insert(name.to_string(), id);
        self.stats.record_type(gate_type);
        match gate_type {
            GateType::Input => self.inputs.push(id),
            GateType::Output => self.outputs.push(id),
            _ => {}
        }
        Ok(id)
    }

    /// Sets the type of an existing gate and bumps the new type's counter.
    pub fn retype_gate(&mut self, id: GateId, type_token: &str) {
        let gate_type = GateType::from_token(type_token);
        self.gates[id.index()].gate_type = gate_type;
        self.stats.record_type(gate_type);
    }

    /// Adds the edge `driver -> consumer` to both endpoint lists.
    pub fn link(&mut self, driver: GateId, consumer: GateId) {
        self.gates[driver.index()].fanout.push(consumer);
        self.gates[consumer.index()].fanin.push(driver);
    }

    /// Derives the gate's width from its type and current fanin count and
    /// adds it to the running area.
    pub fn assign_width(&mut self, id: GateId) -> u32 {
        let gate = &mut self.gates[id.index()];
        let width = gate.gate_type.double_width(gate.fanin.len());
        gate.double_width = width;
        self.stats.double_area += u64::from(width);
        width
    }

    /// Returns the gate with the given ID.
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.index()]
    }

    /// Looks a gate up by name.
    pub fn find(&self, name: &str) -> Option<GateId> {
        self.by_name.get(name).copied()
    }

    /// Doubled width of a gate.
    pub fn double_width(&self, id: GateId) -> u32 {
        self.gates[id.index()].double_width
    }

    /// Sets or clears a gate's position.
    pub fn set_position(&mut self, id: GateId, position: Option<Position>) {
        self.gates[id.index()].position = position;
    }

    /// All gates in creation order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// IDs of all gates in creation order.
    pub fn gate_ids(&self) -> impl Iterator<Item = GateId> + '_ {
        (0..self.gates.len() as u32).map(GateId::from_raw)
    }

    /// Primary input gates.
    pub fn inputs(&self) -> &[GateId] {
        &self.inputs
    }

    /// Synthetic `<name>-OUTPUT` terminal gates.
    pub fn outputs(&self) -> &[GateId] {
        &self.outputs
    }

    /// Type counters and area.
    pub fn stats(&self) -> &GateStats {
        &self.stats
    }

    /// Number of gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Widest gate, in doubled units.
    pub fn max_double_width(&self) -> u32 {
        self.gates.iter().map(|g| g.double_width).max().unwrap_or(0)
    }

    /// Returns whether every gate has a position.
    pub fn is_fully_placed(&self) -> bool {
        self.gates.iter().all(Gate::is_placed)
    }

    /// Clears every gate's position.
    pub fn clear_positions(&mut self) {
        for gate in &mut self.gates {
            gate.position = None;
        }
    }

}
