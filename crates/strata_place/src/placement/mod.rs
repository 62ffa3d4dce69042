//! Placement engine.
//!
//! Packs every gate into capacity-bounded rows with a randomized bin packer,
//! then refines the packing with simulated annealing to minimize total
//! half-perimeter wire length.

pub mod anneal;
pub mod cost;
pub mod random;

use crate::context::PlacementContext;
use crate::error::PlaceError;
use crate::report::PlacementReport;
use crate::surface::Surface;
use strata_netlist::Circuit;

pub use anneal::{AnnealOutcome, TemperatureStep};
pub use cost::CostEvaluator;
pub use random::InitialPlacement;

/// Places every gate of `circuit` and returns the run's report.
///
/// Sizes the surface, packs the gates (escalating the row capacity as
/// needed), then anneals. Any previous positions are cleared first. On
/// success every gate has a position.
pub fn place(circuit: &mut Circuit, ctx: &mut PlacementContext) -> Result<PlacementReport, PlaceError> {
    circuit.clear_positions();
    let surface = Surface::for_circuit(circuit, &ctx.config.surface);
    log::info!(
        "placing {} gates on {} rows of capacity {} (seed {})",
        circuit.gate_count(),
        surface.rows,
        surface.row_capacity,
        ctx.seed()
    );

    // Phase 1: randomized bin packing
    let initial_config = ctx.config.initial.clone();
    let initial = random::initial_placement(circuit, surface, &initial_config, ctx.rng())?;
    let mut layout = initial.layout;

    // Phase 2: simulated annealing refinement
    let outcome = anneal::anneal(&mut layout, circuit, ctx);

    Ok(PlacementReport::new(
        circuit,
        &layout,
        ctx.seed(),
        initial.attempts,
        initial.capacity,
        outcome,
    ))
}
