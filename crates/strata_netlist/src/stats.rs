//! The `read_ckt` statistics report.

use crate::circuit::Circuit;
use crate::gate::{Gate, GateType};
use crate::ids::GateId;
use std::fmt::Write;

/// Renders type counts, total area, fanout and fanin lists and gate sizes.
///
/// Primary inputs are left out of the fanout and fanin sections; a gate
/// with no fanout is listed as driving `OUTP`.
pub fn circuit_statistics(circuit: &Circuit) -> String {
    let stats = circuit.stats();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} primary inputs", stats.count(GateType::Input));
    let _ = writeln!(out, "{} primary outputs", stats.count(GateType::Output));
    for gate_type in GateType::LOGIC {
        let n = stats.count(gate_type);
        if n > 0 {
            let _ = writeln!(out, "{n} {gate_type} gates");
        }
    }
    let _ = writeln!(out, "Total Area: {}", stats.area());

    out.push_str("\n\nFanout...\n");
    for gate in circuit.gates().iter().filter(|g| g.gate_type != GateType::Input) {
        let targets = if gate.fanout.is_empty() {
            "OUTP".to_string()
        } else {
            neighbour_list(circuit, &gate.fanout)
        };
        let _ = writeln!(out, "{}: {}", gate.label(), targets);
    }

    out.push_str("\n\nFanin...\n");
    for gate in circuit.gates().iter().filter(|g| g.gate_type != GateType::Input) {
        let _ = writeln!(out, "{}: {}", gate.label(), neighbour_list(circuit, &gate.fanin));
    }

    out.push_str("\n\nSize...\n");
    for gate in circuit.gates() {
        let _ = writeln!(out, "{}: {}", gate.label(), gate.width());
    }
    out.push('\n');
    out
}

fn neighbour_list(circuit: &Circuit, ids: &[GateId]) -> String {
    ids.iter()
        .map(|&id| circuit.gate(id))
        .map(Gate::label)
        .collect::<Vec<_>>()
        .join(", ")
}
