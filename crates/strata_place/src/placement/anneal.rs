//! Simulated annealing placement refinement.
//!
//! Repeatedly swaps two gates between (or within) rows and accepts or rejects
//! each swap with the Metropolis criterion. The Boltzmann constant is
//! calibrated from sampled uphill moves so that an average uphill move is
//! accepted with the configured probability at the starting temperature.

use crate::context::PlacementContext;
use crate::layout::Layout;
use crate::placement::cost::CostEvaluator;
use rand::Rng;
use serde::Serialize;
use strata_config::AnnealConfig;
use strata_netlist::Circuit;

/// Draw budget per requested calibration sample.
const CALIBRATION_DRAWS_PER_SAMPLE: usize = 1000;

/// Statistics of one temperature step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureStep {
    /// Temperature the moves ran at.
    pub temperature: f64,
    /// Accepted moves.
    pub accepted: usize,
    /// Rejected moves, including swaps that would overflow a row.
    pub rejected: usize,
    /// Total HPWL after the step.
    pub hpwl: f64,
}

/// Result of an annealing run.
#[derive(Debug, Clone, Serialize)]
pub struct AnnealOutcome {
    /// Calibrated Boltzmann constant; `None` when annealing was skipped.
    pub kboltz: Option<f64>,
    /// Total HPWL before the first move.
    pub initial_hpwl: f64,
    /// Total HPWL after the last move.
    pub final_hpwl: f64,
    /// One entry per completed temperature step.
    pub steps: Vec<TemperatureStep>,
    /// Whether the run stopped on a cancel request.
    pub cancelled: bool,
}

/// Number of temperature steps the schedule runs to completion.
pub fn temperature_steps(config: &AnnealConfig) -> usize {
    let mut temperature = config.max_temperature;
    let mut steps = 0;
    while temperature > config.freeze_temperature {
        steps += 1;
        temperature *= config.cooling_rate;
    }
    steps
}

/// Metropolis criterion. Downhill moves are accepted without drawing from
/// the RNG.
pub fn accept_move(delta: f64, kboltz: f64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta < 0.0 {
        return true;
    }
    let boltz = (-delta / (kboltz * temperature)).exp();
    rng.gen::<f64>() < boltz
}

/// Estimates the Boltzmann constant from sampled uphill swaps.
///
/// Each sample swaps two random gates, measures the cost change and swaps
/// back. Only increases are kept. If none is observed within the draw budget
/// the average defaults to 1.0.
pub fn calibrate(
    layout: &mut Layout,
    circuit: &mut Circuit,
    evaluator: CostEvaluator,
    config: &AnnealConfig,
    current_hpwl: f64,
    rng: &mut impl Rng,
) -> f64 {
    let max_draws = config.calibration_samples * CALIBRATION_DRAWS_PER_SAMPLE;
    let mut total = 0.0;
    let mut samples = 0;

    for _ in 0..max_draws {
        if samples == config.calibration_samples {
            break;
        }
        let Some((a, b)) = layout.sample_swap(rng) else {
            break;
        };
        if !layout.can_swap(a, b, circuit) {
            continue;
        }
        layout.swap(a, b, circuit);
        let delta = evaluator.total_hpwl(layout, circuit) - current_hpwl;
        layout.swap(a, b, circuit);
        if delta > 0.0 {
            total += delta;
            samples += 1;
        }
    }

    let average = if samples == 0 {
        log::debug!("no uphill move observed during calibration, using unit average");
        1.0
    } else {
        total / samples as f64
    };
    -average / (config.init_accept_rate.ln() * config.max_temperature)
}

/// Proposes one swap and keeps or undoes it. Returns whether it was
/// accepted; `current_hpwl` follows accepted moves.
///
/// A swap that would overflow either row is rejected without touching the
/// layout or drawing an acceptance number.
pub fn attempt_move(
    layout: &mut Layout,
    circuit: &mut Circuit,
    evaluator: CostEvaluator,
    kboltz: f64,
    temperature: f64,
    current_hpwl: &mut f64,
    rng: &mut impl Rng,
) -> bool {
    let Some((a, b)) = layout.sample_swap(rng) else {
        return false;
    };
    if !layout.can_swap(a, b, circuit) {
        return false;
    }

    layout.swap(a, b, circuit);
    let new_hpwl = evaluator.total_hpwl(layout, circuit);
    if accept_move(new_hpwl - *current_hpwl, kboltz, temperature, rng) {
        *current_hpwl = new_hpwl;
        true
    } else {
        layout.swap(a, b, circuit);
        false
    }
}

/// Refines `layout` by simulated annealing.
///
/// Skipped when the layout holds fewer than two gates. The cancel token is
/// checked before every temperature step.
pub fn anneal(layout: &mut Layout, circuit: &mut Circuit, ctx: &mut PlacementContext) -> AnnealOutcome {
    let config = ctx.config.anneal.clone();
    let evaluator = CostEvaluator::new(ctx.config.cost.vertical_extent, ctx.config.parallel);

    let mut current = evaluator.total_hpwl(layout, circuit);
    let mut outcome = AnnealOutcome {
        kboltz: None,
        initial_hpwl: current,
        final_hpwl: current,
        steps: Vec::new(),
        cancelled: false,
    };
    if layout.gate_count() < 2 {
        log::info!("fewer than two gates placed, skipping annealing");
        return outcome;
    }
    log::info!("initial HPWL: {current}");

    let kboltz = calibrate(layout, circuit, evaluator, &config, current, ctx.rng());
    log::info!("calibrated kboltz: {kboltz}");
    outcome.kboltz = Some(kboltz);

    let mut temperature = config.max_temperature;
    while temperature > config.freeze_temperature {
        if ctx.is_cancelled() {
            log::warn!("annealing cancelled at T={temperature}");
            outcome.cancelled = true;
            break;
        }

        let rng = ctx.rng();
        let mut accepted = 0;
        for _ in 0..config.moves_per_temperature {
            if attempt_move(layout, circuit, evaluator, kboltz, temperature, &mut current, rng) {
                accepted += 1;
            }
        }
        let step = TemperatureStep {
            temperature,
            accepted,
            rejected: config.moves_per_temperature - accepted,
            hpwl: current,
        };
        log::info!(
            "T={} accepted={} rejected={} hpwl={}",
            step.temperature,
            step.accepted,
            step.rejected,
            step.hpwl
        );
        outcome.steps.push(step);
        temperature *= config.cooling_rate;
    }

    outcome.final_hpwl = current;
    log::info!("final HPWL: {current}");
    outcome
}
