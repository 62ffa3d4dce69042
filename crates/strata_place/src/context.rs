//! Per-run placement state: configuration, seeded RNG and cancellation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use strata_config::PlacerConfig;

/// A cloneable flag checked between annealing temperature steps.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that annealing stop at the next temperature step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything a placement run consumes besides the circuit itself.
///
/// All random decisions draw from the one generator in a fixed order, so a
/// given seed reproduces a run exactly.
pub struct PlacementContext {
    /// Placer settings.
    pub config: PlacerConfig,
    seed: u64,
    rng: StdRng,
    cancel: CancelToken,
}

impl PlacementContext {
    /// Creates a context seeded from `config.seed`, or from entropy when no
    /// seed is configured.
    pub fn new(config: PlacerConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            cancel: CancelToken::new(),
        }
    }

    /// The seed this context's generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The placement RNG.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// A handle that can stop annealing from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_is_reproducible() {
        let config = PlacerConfig {
            seed: Some(42),
            ..PlacerConfig::default()
        };
        let mut a = PlacementContext::new(config.clone());
        let mut b = PlacementContext::new(config);
        assert_eq!(a.seed(), 42);
        let xs: Vec<u32> = (0..8).map(|_| a.rng().gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.rng().gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn cancel_token_is_shared() {
        let ctx = PlacementContext::new(PlacerConfig::default());
        let token = ctx.cancel_token();
        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }
}
