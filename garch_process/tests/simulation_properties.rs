use std::cell::{Cell, RefCell};

use approx::assert_relative_eq;
use garch_process::burn_in::burn_in;
use garch_process::recursion::RecursionEngine;
use garch_process::{
    ConfigurationError, GarchError, GarchModel, GarchParams, Innovation, InnovationSampler,
    NumericalError, Simulator,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Records the variance of every draw and returns the mean
struct Recording(RefCell<Vec<f64>>);

impl InnovationSampler for Recording {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R, mean: f64, variance: f64) -> f64 {
        self.0.borrow_mut().push(variance);
        mean
    }
}

/// Deterministic shock of half a standard deviation
struct HalfSigma;

impl InnovationSampler for HalfSigma {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R, mean: f64, variance: f64) -> f64 {
        mean + 0.5 * variance.sqrt()
    }
}

/// Returns 1, 2, 3, ... in draw order
struct Counter(Cell<f64>);

impl InnovationSampler for Counter {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R, _mean: f64, _variance: f64) -> f64 {
        self.0.set(self.0.get() + 1.0);
        self.0.get()
    }
}

fn model(alphas: Vec<f64>, betas: Vec<f64>) -> GarchModel {
    GarchModel::new(2e-6, alphas, betas, Innovation::Normal).unwrap()
}

#[test]
fn first_burn_in_draw_uses_unconditional_variance() {
    let model = GarchModel::new(3.6e-6, vec![0.1], vec![0.88], Innovation::Normal).unwrap();
    assert_relative_eq!(model.unconditional_variance(), 1.8e-4, max_relative = 1e-12);

    let sampler = Recording(RefCell::new(Vec::new()));
    let engine = RecursionEngine::new(&model, &sampler);
    let mut rng = StdRng::seed_from_u64(42);

    let burn = burn_in(&engine, &mut rng);

    let draws = sampler.0.borrow();
    assert_eq!(draws.len(), 1);
    assert_relative_eq!(draws[0], 1.8e-4, max_relative = 1e-12);
    assert_eq!(burn.state.variances.lag(0), draws[0]);
}

#[test]
fn simulation_starts_from_unconditional_variance() {
    let model = GarchModel::new(3.6e-6, vec![0.1, 0.0], vec![0.88], Innovation::Normal).unwrap();
    let sampler = Recording(RefCell::new(Vec::new()));
    let sim = Simulator::with_sampler(&model, &sampler);
    let mut rng = StdRng::seed_from_u64(42);

    sim.simulate(10, &mut rng);

    let draws = sampler.0.borrow();
    assert_eq!(draws.len(), 2 + 11);
    assert_relative_eq!(draws[0], 1.8e-4, max_relative = 1e-12);
}

#[test]
fn output_has_requested_length() {
    let model = GarchParams::two_lag().build().unwrap();
    for length in [1, 2, 9, 10, 11, 257, 2530] {
        let path = model.simulate_seeded(length, 3);
        assert_eq!(path.returns.len(), length);
        assert_eq!(path.variances.len(), length);
    }
}

#[test]
fn output_is_chronological() {
    let model = model(vec![0.1, 0.05], vec![0.8]);
    let sim = Simulator::with_sampler(&model, Counter(Cell::new(0.0)));
    let mut rng = StdRng::seed_from_u64(0);

    let path = sim.simulate(50, &mut rng);

    // Draw k returns k, so oldest-first means strictly increasing and the
    // final point is the last draw: burn-in 2 + ⌈1.1 × 50⌉ = 57.
    assert!(path.returns.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*path.returns.last().unwrap(), 57.0);
    assert_eq!(path.returns[0], 8.0);
}

#[test]
fn every_step_satisfies_the_recursion() {
    let alphas = vec![0.08, 0.03];
    let betas = vec![0.5, 0.2, 0.1];
    let model = model(alphas.clone(), betas.clone());
    let sim = Simulator::with_sampler(&model, HalfSigma);
    let mut rng = StdRng::seed_from_u64(0);

    let path = sim.simulate(400, &mut rng);
    let r = &path.returns;
    let v = &path.variances;

    for t in model.max_lag()..path.len() {
        let mut expected = model.omega();
        for (i, alpha) in alphas.iter().enumerate() {
            let lagged = r[t - 1 - i];
            expected += alpha * (lagged * lagged);
        }
        for (j, beta) in betas.iter().enumerate() {
            expected += beta * v[t - 1 - j];
        }
        assert_eq!(v[t], expected, "recursion broken at t={}", t);
        assert_eq!(r[t], 0.5 * v[t].sqrt());
    }
}

#[test]
fn burn_in_length_is_max_lag_when_p_and_q_differ() {
    for (alphas, betas) in [
        (vec![0.05, 0.05, 0.05], vec![0.6]),
        (vec![0.1], vec![0.3, 0.2, 0.1, 0.1]),
        (vec![0.2, 0.1], vec![]),
    ] {
        let model = model(alphas, betas);
        let engine = RecursionEngine::new(&model, &Innovation::Normal);
        let mut rng = StdRng::seed_from_u64(8);

        let burn = burn_in(&engine, &mut rng);

        assert_eq!(burn.state.len(), model.max_lag());
        assert_eq!(burn.steps, model.max_lag() - 1);
    }
}

#[test]
fn fixed_seed_is_bit_identical() {
    let model = GarchParams::two_lag().build().unwrap();
    let a = model.simulate_seeded(1000, 2024);
    let b = model.simulate_seeded(1000, 2024);

    assert_eq!(a, b);
    for (x, y) in a.returns.iter().zip(&b.returns) {
        assert_eq!(x.to_bits(), y.to_bits());
    }

    let c = model.simulate_seeded(1000, 2025);
    assert_ne!(a.returns, c.returns);
}

#[test]
fn non_stationary_parameters_fail_with_numerical_error() {
    let err = GarchModel::new(1e-6, vec![0.5], vec![0.6], Innovation::Normal).unwrap_err();
    match err {
        GarchError::Numerical(NumericalError::NonStationary { persistence }) => {
            assert_relative_eq!(persistence, 1.1, max_relative = 1e-12);
        }
        other => panic!("expected a numerical error, got {:?}", other),
    }
}

#[test]
fn unsupported_distribution_fails_with_configuration_error() {
    let err = GarchParams::new(1e-6, vec![0.1], vec![0.8])
        .with_distribution("student-t")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        GarchError::Configuration(ConfigurationError::UnsupportedDistribution {
            name: "student-t".to_string()
        })
    );
}

#[test]
fn variances_stay_above_omega() {
    let model = GarchParams::strong().build().unwrap();
    let path = model.simulate_seeded(5000, 77);
    assert!(path.variances.iter().all(|&v| v >= model.omega()));
    assert!(path.returns.iter().all(|r| r.is_finite()));
}

#[test]
fn long_run_variance_matches_unconditional() {
    let model = GarchModel::new(1e-4, vec![0.1], vec![0.6], Innovation::Normal).unwrap();
    let path = model.simulate_seeded(200_000, 13);
    let mean_variance = path.variances.iter().sum::<f64>() / path.len() as f64;
    assert_relative_eq!(
        mean_variance,
        model.unconditional_variance(),
        max_relative = 0.05
    );
}
