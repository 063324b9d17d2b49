use rand::Rng;

use crate::innovation::InnovationSampler;
use crate::model::GarchModel;
use crate::state::SimulationState;

/// Number of lag terms used in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagWindow {
    /// ARCH terms used, ≤ p
    pub p_eff: usize,
    /// GARCH terms used, ≤ q
    pub q_eff: usize,
}

impl LagWindow {
    /// All p and q lags
    pub fn full(model: &GarchModel) -> Self {
        LagWindow {
            p_eff: model.p(),
            q_eff: model.q(),
        }
    }

    /// As many lags as `history_len` points of history allow
    pub fn available(model: &GarchModel, history_len: usize) -> Self {
        LagWindow {
            p_eff: model.p().min(history_len),
            q_eff: model.q().min(history_len),
        }
    }
}

/// One generated (return, variance) point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub ret: f64,
    pub variance: f64,
}

/// σ² = ω + Σ_{i<p_eff} αᵢ × r²(lag i) + Σ_{j<q_eff} βⱼ × σ²(lag j)
///
/// Terms accumulate in that order: ω, alphas by increasing lag, then betas by
/// increasing lag.
pub fn conditional_variance(
    omega: f64,
    alphas: &[f64],
    betas: &[f64],
    state: &SimulationState,
    window: LagWindow,
) -> f64 {
    let mut variance = omega;
    for (i, alpha) in alphas.iter().take(window.p_eff).enumerate() {
        let r = state.returns.lag(i);
        variance += alpha * (r * r);
    }
    for (j, beta) in betas.iter().take(window.q_eff).enumerate() {
        variance += beta * state.variances.lag(j);
    }
    variance
}

/// Advances a [`SimulationState`] one step at a time
pub struct RecursionEngine<'a, S> {
    model: &'a GarchModel,
    sampler: &'a S,
}

impl<'a, S: InnovationSampler> RecursionEngine<'a, S> {
    pub fn new(model: &'a GarchModel, sampler: &'a S) -> Self {
        RecursionEngine { model, sampler }
    }

    pub fn model(&self) -> &GarchModel {
        self.model
    }

    pub fn sampler(&self) -> &S {
        self.sampler
    }

    /// Compute the next variance, draw its return and push both as lag 0
    pub fn step<R: Rng + ?Sized>(
        &self,
        state: &mut SimulationState,
        window: LagWindow,
        rng: &mut R,
    ) -> Step {
        debug_assert!(window.p_eff <= self.model.p() && window.p_eff <= state.len());
        debug_assert!(window.q_eff <= self.model.q() && window.q_eff <= state.len());

        let variance = conditional_variance(
            self.model.omega(),
            self.model.alphas(),
            self.model.betas(),
            state,
            window,
        );
        let ret = self.sampler.sample(rng, self.model.mean(), variance);
        state.push(ret, variance);

        Step { ret, variance }
    }
}
