//! Configuration types deserialized from `strata.toml`.

use serde::Deserialize;

/// The top-level placer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacerConfig {
    /// Seed for the placement RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Evaluate wirelength with the parallel (rayon) reduction.
    pub parallel: bool,
    /// Layout surface sizing.
    pub surface: SurfaceConfig,
    /// Randomized bin-packing settings.
    pub initial: InitialConfig,
    /// Simulated annealing schedule.
    pub anneal: AnnealConfig,
    /// Wirelength evaluation settings.
    pub cost: CostConfig,
}

/// Dimensions of the layout surface.
///
/// When `rows` or `row_capacity` is absent it is derived from the circuit's
/// total area and `utilization`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Target fraction of the surface covered by cells, in `(0, 1]`.
    pub utilization: f64,
    /// Number of rows.
    pub rows: Option<usize>,
    /// Initial per-row capacity in doubled-width units.
    pub row_capacity: Option<u32>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            utilization: 0.8,
            rows: None,
            row_capacity: None,
        }
    }
}

/// Settings for the randomized initial bin packing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialConfig {
    /// Random row picks per gate before the in-order fallback pass.
    pub random_tries: usize,
    /// Aborted attempts between two capacity increments.
    pub attempts_per_escalation: usize,
    /// Capacity increment in doubled-width units.
    pub capacity_increment: u32,
    /// Total attempts before placement is declared infeasible.
    pub max_attempts: usize,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            random_tries: 100,
            attempts_per_escalation: 100,
            capacity_increment: 2,
            max_attempts: 10_000,
        }
    }
}

/// The annealing temperature schedule and move budget.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnealConfig {
    /// Starting temperature.
    pub max_temperature: f64,
    /// The loop stops once the temperature is at or below this value.
    pub freeze_temperature: f64,
    /// Factor applied to the temperature after each step, in `(0, 1)`.
    pub cooling_rate: f64,
    /// Acceptance probability targeted for an average uphill move at
    /// `max_temperature`, in `(0, 1)`.
    pub init_accept_rate: f64,
    /// Candidate moves per temperature step.
    pub moves_per_temperature: usize,
    /// Uphill samples collected to calibrate the Boltzmann constant.
    pub calibration_samples: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_temperature: 40_000.0,
            freeze_temperature: 0.1,
            cooling_rate: 0.95,
            init_accept_rate: 0.99,
            moves_per_temperature: 100,
            calibration_samples: 50,
        }
    }
}

/// Wirelength evaluation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// How the vertical extent of a net's bounding box is computed.
    pub vertical_extent: VerticalExtent,
}

/// Vertical extent arithmetic for a net's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalExtent {
    /// The upper bound is folded with `min`, so it never rises above the
    /// gate's own row and the vertical term is always zero.
    #[default]
    Legacy,
    /// A true maximum over the net's rows.
    True,
}
