use rand::Rng;
use tracing::trace;

use crate::innovation::InnovationSampler;
use crate::recursion::{LagWindow, RecursionEngine};
use crate::state::SimulationState;

/// Initial history handed to the full-window recursion
#[derive(Debug, Clone)]
pub struct BurnIn {
    pub state: SimulationState,
    /// Recursion steps taken after the seed point
    pub steps: usize,
}

/// Build max(p, q) points of history from a cold start
///
/// The first point pairs the unconditional variance with a return drawn at
/// that variance. Each later point uses only the lags generated so far,
/// min(len, p) alphas and min(len, q) betas, so no pre-sample values are
/// invented.
pub fn burn_in<S, R>(engine: &RecursionEngine<'_, S>, rng: &mut R) -> BurnIn
where
    S: InnovationSampler,
    R: Rng + ?Sized,
{
    let model = engine.model();
    let target = model.max_lag();
    let mut state = SimulationState::new(target);

    let seed_variance = model.unconditional_variance();
    let seed_return = engine.sampler().sample(rng, model.mean(), seed_variance);
    state.push(seed_return, seed_variance);

    let mut steps = 0;
    while state.len() < target {
        let window = LagWindow::available(model, state.len());
        let step = engine.step(&mut state, window, rng);
        steps += 1;
        trace!(
            step = steps,
            p_eff = window.p_eff,
            q_eff = window.q_eff,
            variance = step.variance,
            "burn-in step"
        );
    }

    BurnIn { state, steps }
}
