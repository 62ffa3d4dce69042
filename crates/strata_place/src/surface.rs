//! Sizing of the layout surface.

use strata_config::SurfaceConfig;
use strata_netlist::Circuit;

/// Row count and starting per-row capacity for initial placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    /// Number of rows.
    pub rows: usize,
    /// Per-row capacity, doubled units.
    pub row_capacity: u32,
}

impl Surface {
    /// Derives a roughly square surface for `circuit` at the configured
    /// utilization. Explicit `rows`/`row_capacity` settings win.
    ///
    /// Rows are one unit tall, so a square of physical area
    /// `area / utilization` has `sqrt` of that many rows. The capacity is
    /// rounded up to an even number of doubled units and is never narrower
    /// than the widest gate.
    pub fn for_circuit(circuit: &Circuit, config: &SurfaceConfig) -> Self {
        let double_area = circuit.stats().double_area() as f64;
        let target_area = double_area / 2.0 / config.utilization;

        let rows = config
            .rows
            .unwrap_or_else(|| (target_area.sqrt().ceil() as usize).max(1));

        let row_capacity = config.row_capacity.unwrap_or_else(|| {
            let needed = (double_area / (rows as f64 * config.utilization)).ceil() as u32;
            let even = needed + needed % 2;
            even.max(circuit.max_double_width())
        });

        Self { rows, row_capacity }
    }
}
