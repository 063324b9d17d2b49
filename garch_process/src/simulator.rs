use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::burn_in::{burn_in, BurnIn};
use crate::innovation::{Innovation, InnovationSampler};
use crate::model::GarchModel;
use crate::recursion::{LagWindow, RecursionEngine, Step};

/// Simulated returns and conditional variances, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationPath {
    pub returns: Vec<f64>,
    pub variances: Vec<f64>,
}

impl SimulationPath {
    fn with_capacity(length: usize) -> Self {
        SimulationPath {
            returns: Vec::with_capacity(length),
            variances: Vec::with_capacity(length),
        }
    }

    fn push(&mut self, step: Step) {
        self.returns.push(step.ret);
        self.variances.push(step.variance);
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Conditional standard deviations σ(t)
    pub fn volatilities(&self) -> Vec<f64> {
        self.variances.iter().map(|v| v.sqrt()).collect()
    }

    /// (t, return, variance) in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.returns
            .iter()
            .zip(self.variances.iter())
            .enumerate()
            .map(|(t, (&r, &v))| (t, r, v))
    }
}

/// Full-window steps run for an output of `length` points: ⌈1.1 × length⌉
pub fn oversampled_steps(length: usize) -> usize {
    length + length.div_ceil(10)
}

/// Runs burn-in, the oversampled recursion and the final trim
pub struct Simulator<'a, S = Innovation> {
    model: &'a GarchModel,
    sampler: S,
}

impl<'a> Simulator<'a, Innovation> {
    /// Simulator drawing from the model's own distribution
    pub fn new(model: &'a GarchModel) -> Self {
        Simulator {
            model,
            sampler: model.distribution(),
        }
    }
}

impl<'a, S: InnovationSampler> Simulator<'a, S> {
    pub fn with_sampler(model: &'a GarchModel, sampler: S) -> Self {
        Simulator { model, sampler }
    }

    /// Simulate the most recent `length` points, oldest first
    ///
    /// Only the output window is retained; the recursion itself works on
    /// max(p, q) lags. `length == 0` returns an empty path without drawing.
    pub fn simulate<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> SimulationPath {
        if length == 0 {
            return SimulationPath::default();
        }

        let engine = RecursionEngine::new(self.model, &self.sampler);
        let BurnIn { mut state, steps } = burn_in(&engine, rng);

        let total = oversampled_steps(length);
        let discard = total - length;
        let window = LagWindow::full(self.model);

        debug!(
            length,
            burn_in_steps = steps,
            total_steps = total,
            "simulating GARCH({}, {})",
            self.model.p(),
            self.model.q()
        );

        let mut path = SimulationPath::with_capacity(length);
        for t in 0..total {
            let step = engine.step(&mut state, window, rng);
            if t >= discard {
                path.push(step);
            }
        }
        path
    }
}
