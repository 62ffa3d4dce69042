//! Placement report: a serializable summary of one placement run.

use crate::layout::Layout;
use crate::placement::{AnnealOutcome, TemperatureStep};
use serde::Serialize;
use std::fmt::Write;
use strata_netlist::Circuit;

/// Final position of one gate, in physical units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatePlacement {
    /// Gate name.
    pub name: String,
    /// Left edge.
    pub x: f64,
    /// Row coordinate.
    pub y: u32,
}

/// Everything the `place` command reports.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    /// Seed the run's RNG started from.
    pub seed: u64,
    /// Initial packing attempts used.
    pub attempts: usize,
    /// Row width the packing succeeded at.
    pub width: f64,
    /// Number of rows.
    pub height: usize,
    /// Total gate area of the circuit.
    pub total_area: f64,
    /// Gate area actually placed in rows.
    pub placed_area: f64,
    /// HPWL before annealing.
    pub initial_hpwl: f64,
    /// Calibrated Boltzmann constant, absent when annealing was skipped.
    pub kboltz: Option<f64>,
    /// Per-temperature statistics.
    pub steps: Vec<TemperatureStep>,
    /// HPWL after annealing.
    pub final_hpwl: f64,
    /// Whether annealing stopped early on request.
    pub cancelled: bool,
    /// Widest occupied row.
    pub bounding_width: f64,
    /// Row count of the final layout.
    pub bounding_height: usize,
    /// `bounding_width * bounding_height`.
    pub bounding_area: f64,
    /// Gate positions in creation order.
    pub gates: Vec<GatePlacement>,
}

impl PlacementReport {
    /// Collects the report from a finished layout.
    pub fn new(
        circuit: &Circuit,
        layout: &Layout,
        seed: u64,
        attempts: usize,
        capacity: u32,
        outcome: AnnealOutcome,
    ) -> Self {
        let bounding_width = f64::from(layout.max_occupied()) / 2.0;
        let bounding_height = layout.row_count();
        let gates = circuit
            .gates()
            .iter()
            .filter_map(|g| {
                g.position.map(|pos| GatePlacement {
                    name: g.name.clone(),
                    x: pos.x(),
                    y: pos.y,
                })
            })
            .collect();

        Self {
            seed,
            attempts,
            width: f64::from(capacity) / 2.0,
            height: layout.row_count(),
            total_area: circuit.stats().area(),
            placed_area: layout.occupied_total() as f64 / 2.0,
            initial_hpwl: outcome.initial_hpwl,
            kboltz: outcome.kboltz,
            steps: outcome.steps,
            final_hpwl: outcome.final_hpwl,
            cancelled: outcome.cancelled,
            bounding_width,
            bounding_height,
            bounding_area: bounding_width * bounding_height as f64,
            gates,
        }
    }

    /// Renders the plain-text report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Seed: {}", self.seed);
        let _ = writeln!(out, "Width: {}", self.width);
        let _ = writeln!(out, "Height: {}", self.height);
        let _ = writeln!(out, "Total area: {}", self.total_area);
        let _ = writeln!(out, "Placed area: {}", self.placed_area);
        let _ = writeln!(out, "Initial HPWL: {}", self.initial_hpwl);
        match self.kboltz {
            Some(k) => {
                let _ = writeln!(out, "kboltz: {k}");
            }
            None => {
                let _ = writeln!(out, "kboltz: skipped");
            }
        }
        for step in &self.steps {
            let _ = writeln!(
                out,
                "T={} accepted={} rejected={} hpwl={}",
                step.temperature, step.accepted, step.rejected, step.hpwl
            );
        }
        if self.cancelled {
            out.push_str("Annealing cancelled\n");
        }
        let _ = writeln!(out, "Final HPWL: {}", self.final_hpwl);
        let _ = writeln!(out, "Width: {}", self.bounding_width);
        let _ = writeln!(out, "Height: {}", self.bounding_height);
        let _ = writeln!(out, "Area: {}", self.bounding_area);
        for gate in &self.gates {
            let _ = writeln!(out, "{}: ({}, {})", gate.name, gate.x, gate.y);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_diagnostics::DiagnosticSink;
    use strata_netlist::parse_circuit;

    fn report() -> PlacementReport {
        let mut c = parse_circuit(
            "INPUT(a)\nINPUT(b)\nc = AND(a, b)\nOUTPUT(c)\n",
            &DiagnosticSink::new(),
        )
        .unwrap();
        let ids: Vec<_> = c.gate_ids().collect();
        let mut layout = Layout::new(2, 8);
        // Row 1: a, c. Row 2: b, c-OUTPUT.
        layout.rows_mut()[0].try_append(ids[0], &c);
        layout.rows_mut()[0].try_append(ids[2], &c);
        layout.rows_mut()[1].try_append(ids[1], &c);
        layout.rows_mut()[1].try_append(ids[3], &c);
        layout.assign_coordinates(&mut c);
        let outcome = AnnealOutcome {
            kboltz: Some(0.5),
            initial_hpwl: 7.0,
            final_hpwl: 5.5,
            steps: vec![TemperatureStep {
                temperature: 40000.0,
                accepted: 3,
                rejected: 97,
                hpwl: 5.5,
            }],
            cancelled: false,
        };
        PlacementReport::new(&c, &layout, 42, 1, 8, outcome)
    }

    #[test]
    fn text_layout() {
        let expected = "\
Seed: 42
Width: 4
Height: 2
Total area: 6
Placed area: 6
Initial HPWL: 7
kboltz: 0.5
T=40000 accepted=3 rejected=97 hpwl=5.5
Final HPWL: 5.5
Width: 4
Height: 2
Area: 8
a: (0, 1)
b: (0, 2)
c: (1, 1)
c-OUTPUT: (1, 2)
";
        assert_eq!(report().render_text(), expected);
    }

    #[test]
    fn json_has_all_fields() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["steps"][0]["rejected"], 97);
        assert_eq!(value["gates"][3]["name"], "c-OUTPUT");
        assert_eq!(value["gates"][2]["x"], 1.0);
        assert_eq!(value["bounding_area"], 8.0);
    }
}
