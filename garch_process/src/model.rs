use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GarchResult;
use crate::innovation::Innovation;
use crate::params::{persistence, unconditional_variance};
use crate::simulator::{SimulationPath, Simulator};
use crate::validation::{validate_mean, validate_params};

/// Validated, immutable GARCH(p,q) model
///
///   σ²(t) = ω + Σᵢ αᵢ × r²(t-i) + Σⱼ βⱼ × σ²(t-j)
///   r(t) ~ D(mean, σ²(t))
///
/// Construction fails unless the process is covariance stationary, so every
/// model carries a finite, positive unconditional variance.
#[derive(Debug, Clone, PartialEq)]
pub struct GarchModel {
    omega: f64,
    alphas: Vec<f64>,
    betas: Vec<f64>,
    distribution: Innovation,
    mean: f64,
    unconditional_variance: f64,
}

impl GarchModel {
    pub fn new(
        omega: f64,
        alphas: Vec<f64>,
        betas: Vec<f64>,
        distribution: Innovation,
    ) -> GarchResult<Self> {
        validate_params(omega, &alphas, &betas)?;
        let unconditional_variance = unconditional_variance(omega, &alphas, &betas)?;

        debug!(
            p = alphas.len(),
            q = betas.len(),
            omega,
            unconditional_variance,
            "constructed GARCH model"
        );

        Ok(GarchModel {
            omega,
            alphas,
            betas,
            distribution,
            mean: 0.0,
            unconditional_variance,
        })
    }

    /// Same model with a different return drift
    pub fn with_mean(mut self, mean: f64) -> GarchResult<Self> {
        self.mean = validate_mean(mean)?;
        Ok(self)
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    pub fn distribution(&self) -> Innovation {
        self.distribution
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Number of ARCH lags
    pub fn p(&self) -> usize {
        self.alphas.len()
    }

    /// Number of GARCH lags
    pub fn q(&self) -> usize {
        self.betas.len()
    }

    /// Length of the burn-in history, max(p, q)
    pub fn max_lag(&self) -> usize {
        self.p().max(self.q())
    }

    pub fn persistence(&self) -> f64 {
        persistence(&self.alphas, &self.betas)
    }

    pub fn unconditional_variance(&self) -> f64 {
        self.unconditional_variance
    }

    /// Simulate `length` chronological (return, variance) points
    ///
    /// Returns are drawn around the model's own mean (0 unless set with
    /// [`with_mean`](Self::with_mean)); see
    /// [`simulate_with_mean`](Self::simulate_with_mean) to pass it per call.
    pub fn simulate<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> SimulationPath {
        Simulator::new(self).simulate(length, rng)
    }

    /// Simulate with returns drawn around `mean` instead of the model's own
    ///
    /// Fails only if `mean` is not finite; the model itself is unchanged.
    pub fn simulate_with_mean<R: Rng + ?Sized>(
        &self,
        length: usize,
        mean: f64,
        rng: &mut R,
    ) -> GarchResult<SimulationPath> {
        let model = self.clone().with_mean(mean)?;
        Ok(model.simulate(length, rng))
    }

    /// Simulate with a fresh `StdRng` seeded from `seed`
    pub fn simulate_seeded(&self, length: usize, seed: u64) -> SimulationPath {
        let mut rng = StdRng::seed_from_u64(seed);
        self.simulate(length, &mut rng)
    }
}
