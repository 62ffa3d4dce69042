//! Placement cost functions.
//!
//! Evaluates a placement by half-perimeter wire length (HPWL). Each gate
//! contributes the half-perimeter of the bounding box spanning itself and all
//! of its fanin and fanout neighbours, so a net is counted once per endpoint.

use crate::layout::Layout;
use crate::row::Row;
use rayon::prelude::*;
use strata_config::VerticalExtent;
use strata_netlist::{Circuit, GateId};

/// Evaluates total HPWL over a layout, sequentially or on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostEvaluator {
    /// Vertical extent arithmetic.
    pub extent: VerticalExtent,
    /// Use the parallel reduction.
    pub parallel: bool,
}

impl CostEvaluator {
    /// Creates an evaluator.
    pub fn new(extent: VerticalExtent, parallel: bool) -> Self {
        Self { extent, parallel }
    }

    /// Total HPWL of every gate in every row.
    pub fn total_hpwl(&self, layout: &Layout, circuit: &Circuit) -> f64 {
        if self.parallel {
            parallel_hpwl(layout, circuit, self.extent)
        } else {
            sequential_hpwl(layout, circuit, self.extent)
        }
    }
}

/// Sums row HPWL in row order on the calling thread.
pub fn sequential_hpwl(layout: &Layout, circuit: &Circuit, extent: VerticalExtent) -> f64 {
    layout.rows().iter().map(|row| row.hpwl(circuit, extent)).sum()
}

/// Splits the rows into one contiguous chunk per rayon worker, sums each
/// chunk independently and adds the partial sums.
///
/// Only reads coordinates; they must be assigned before the call.
pub fn parallel_hpwl(layout: &Layout, circuit: &Circuit, extent: VerticalExtent) -> f64 {
    let rows = layout.rows();
    if rows.is_empty() {
        return 0.0;
    }
    let chunk = rows.len().div_ceil(rayon::current_num_threads().max(1));
    rows.par_chunks(chunk)
        .map(|part| part.iter().map(|row: &Row| row.hpwl(circuit, extent)).sum::<f64>())
        .sum()
}

/// HPWL of the bounding box around `gate` and its fanin/fanout neighbours.
///
/// An unplaced gate contributes 0; unplaced neighbours are skipped.
pub fn gate_hpwl(circuit: &Circuit, gate: GateId, extent: VerticalExtent) -> f64 {
    let g = circuit.gate(gate);
    let Some(origin) = g.position else {
        return 0.0;
    };

    let (mut min_x2, mut max_x2) = (origin.x2, origin.x2);
    let (mut min_y, mut max_y) = (origin.y, origin.y);

    let neighbours = g.fanin.iter().chain(&g.fanout);
    for pos in neighbours.filter_map(|&n| circuit.gate(n).position) {
        min_x2 = min_x2.min(pos.x2);
        max_x2 = max_x2.max(pos.x2);
        min_y = min_y.min(pos.y);
        max_y = match extent {
            VerticalExtent::Legacy => max_y.min(pos.y),
            VerticalExtent::True => max_y.max(pos.y),
        };
    }

    // Under legacy folding max_y tracks min_y, so the vertical term is 0.
    f64::from(max_x2 - min_x2) / 2.0 + f64::from(max_y - min_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strata_diagnostics::DiagnosticSink;
    use strata_netlist::{parse_circuit, Position};

    /// a, b -> c -> c-OUTPUT.
    fn and_circuit() -> Circuit {
        parse_circuit(
            "INPUT(a)\nINPUT(b)\nc = AND(a, b)\nOUTPUT(c)\n",
            &DiagnosticSink::new(),
        )
        .unwrap()
    }

    fn id(c: &Circuit, name: &str) -> GateId {
        c.find(name).unwrap()
    }

    fn put(c: &mut Circuit, name: &str, x2: u32, y: u32) {
        let g = id(c, name);
        c.set_position(g, Some(Position { x2, y }));
    }

    #[test]
    fn hand_computed_bounding_box() {
        let mut c = and_circuit();
        put(&mut c, "a", 0, 1);
        put(&mut c, "b", 10, 3);
        put(&mut c, "c", 4, 2);
        put(&mut c, "c-OUTPUT", 20, 1);

        let cg = id(&c, "c");
        // x2 spans 0..20 -> 10; legacy vertical term is 0.
        assert_relative_eq!(gate_hpwl(&c, cg, VerticalExtent::Legacy), 10.0);
        // True extent: rows 1..3 -> 2.
        assert_relative_eq!(gate_hpwl(&c, cg, VerticalExtent::True), 12.0);

        // a only sees c.
        assert_relative_eq!(gate_hpwl(&c, id(&c, "a"), VerticalExtent::True), 3.0);
    }

    #[test]
    fn unplaced_gates_contribute_nothing() {
        let mut c = and_circuit();
        put(&mut c, "c", 4, 2);
        put(&mut c, "a", 8, 2);
        // b and c-OUTPUT are unplaced and skipped.
        assert_relative_eq!(gate_hpwl(&c, id(&c, "c"), VerticalExtent::True), 2.0);
        assert_relative_eq!(gate_hpwl(&c, id(&c, "b"), VerticalExtent::True), 0.0);
    }

    #[test]
    fn isolated_gate_is_zero() {
        let mut c = parse_circuit("INPUT(a)\n", &DiagnosticSink::new()).unwrap();
        put(&mut c, "a", 6, 4);
        assert_relative_eq!(gate_hpwl(&c, id(&c, "a"), VerticalExtent::True), 0.0);
    }

    fn spread_layout(c: &mut Circuit) -> Layout {
        let mut layout = Layout::new(3, 100);
        let ids: Vec<GateId> = c.gate_ids().collect();
        for (i, &g) in ids.iter().enumerate() {
            assert!(layout.rows_mut()[i % 3].try_append(g, c));
        }
        layout.assign_coordinates(c);
        layout
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let mut c = and_circuit();
        let layout = spread_layout(&mut c);
        for extent in [VerticalExtent::Legacy, VerticalExtent::True] {
            let seq = sequential_hpwl(&layout, &c, extent);
            let par = parallel_hpwl(&layout, &c, extent);
            assert_relative_eq!(seq, par, epsilon = 1e-9);
        }
        let eval = CostEvaluator::new(VerticalExtent::True, true);
        assert_relative_eq!(
            eval.total_hpwl(&layout, &c),
            sequential_hpwl(&layout, &c, VerticalExtent::True),
            epsilon = 1e-9
        );
    }

    #[test]
    fn total_is_sum_over_gates() {
        let mut c = and_circuit();
        let layout = spread_layout(&mut c);
        let by_gate: f64 = c
            .gate_ids()
            .map(|g| gate_hpwl(&c, g, VerticalExtent::True))
            .sum();
        assert_relative_eq!(sequential_hpwl(&layout, &c, VerticalExtent::True), by_gate);
    }

    #[test]
    fn empty_layout_costs_nothing() {
        let c = Circuit::new();
        let layout = Layout::new(0, 10);
        assert_relative_eq!(parallel_hpwl(&layout, &c, VerticalExtent::Legacy), 0.0);
        assert_relative_eq!(sequential_hpwl(&layout, &c, VerticalExtent::Legacy), 0.0);
    }
}
