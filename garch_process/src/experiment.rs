//! Monte Carlo batches of independent, seeded replications

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::PathSummary;
use crate::config::ExperimentConfig;
use crate::error::ExperimentError;
use crate::model::GarchModel;
use crate::simulator::SimulationPath;

/// One replication of an experiment
#[derive(Debug, Clone)]
pub struct RunResult {
    pub run_index: usize,
    pub seed: u64,
    pub path: SimulationPath,
    pub summary: PathSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Aggregate statistics across multiple runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub num_runs: usize,
    pub unconditional_variance: f64,
    pub return_variance: MeanStd,
    pub mean_volatility: MeanStd,
    pub excess_kurtosis: MeanStd,
    pub variance_ratio: MeanStd,
}

#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub model: GarchModel,
    pub runs: Vec<RunResult>,
    pub aggregate: AggregateMetrics,
}

/// Seed of run `run_index`
pub fn run_seed(base_seed: u64, run_index: usize) -> u64 {
    base_seed.wrapping_add(run_index as u64)
}

/// Run a single replication
pub fn run_single(model: &GarchModel, run_index: usize, length: usize, seed: u64) -> RunResult {
    let path = model.simulate_seeded(length, seed);
    let summary = PathSummary::from_path(&path, model);
    RunResult {
        run_index,
        seed,
        path,
        summary,
    }
}

/// Run every replication of `config` in parallel
///
/// Each run owns its own RNG, and results come back in run order, so the
/// output does not depend on thread scheduling.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentResult, ExperimentError> {
    let meta = &config.experiment;
    if meta.num_runs == 0 {
        return Err(ExperimentError::NoRuns);
    }
    let model = config.build_model()?;

    info!(
        experiment = %meta.name,
        runs = meta.num_runs,
        length = meta.length,
        "running GARCH({}, {}) experiment",
        model.p(),
        model.q()
    );

    let runs: Vec<RunResult> = (0..meta.num_runs)
        .into_par_iter()
        .map(|run_index| {
            let seed = run_seed(meta.base_seed, run_index);
            run_single(&model, run_index, meta.length, seed)
        })
        .collect();

    let aggregate = compute_aggregate_metrics(&model, &runs);
    Ok(ExperimentResult {
        model,
        runs,
        aggregate,
    })
}

/// Compute aggregate metrics across runs
pub fn compute_aggregate_metrics(model: &GarchModel, runs: &[RunResult]) -> AggregateMetrics {
    AggregateMetrics {
        num_runs: runs.len(),
        unconditional_variance: model.unconditional_variance(),
        return_variance: summarise(runs, |s| s.return_variance),
        mean_volatility: summarise(runs, |s| s.mean_volatility),
        excess_kurtosis: summarise(runs, |s| s.excess_kurtosis),
        variance_ratio: summarise(runs, |s| s.variance_ratio),
    }
}

fn summarise(runs: &[RunResult], field: impl Fn(&PathSummary) -> f64) -> MeanStd {
    let values: Vec<f64> = runs.iter().map(|r| field(&r.summary)).collect();
    compute_mean_std(&values)
}

pub fn compute_mean_std(values: &[f64]) -> MeanStd {
    if values.is_empty() {
        return MeanStd {
            mean: 0.0,
            std: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    MeanStd {
        mean,
        std: variance.sqrt(),
        min,
        max,
    }
}

impl AggregateMetrics {
    pub fn print_summary(&self) {
        println!("Aggregate Results ({} runs):", self.num_runs);
        println!("  Unconditional variance: {:.4e}", self.unconditional_variance);
        println!(
            "  Sample variance: {:.4e} ± {:.4e}",
            self.return_variance.mean, self.return_variance.std
        );
        println!(
            "  Mean volatility: {:.6} ± {:.6}",
            self.mean_volatility.mean, self.mean_volatility.std
        );
        println!(
            "  Excess kurtosis: {:.3} ± {:.3}",
            self.excess_kurtosis.mean, self.excess_kurtosis.std
        );
        println!(
            "  Sample / unconditional variance: {:.3} ± {:.3}",
            self.variance_ratio.mean, self.variance_ratio.std
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExperimentMetadata, OutputSettings};
    use crate::params::GarchParams;

    fn config(num_runs: usize) -> ExperimentConfig {
        ExperimentConfig {
            experiment: ExperimentMetadata {
                name: "test".to_string(),
                description: String::new(),
                num_runs,
                length: 300,
                base_seed: 11,
            },
            model: GarchParams::two_lag(),
            output: OutputSettings::default(),
        }
    }

    #[test]
    fn runs_are_ordered_and_seeded() {
        let result = run_experiment(&config(6)).unwrap();
        assert_eq!(result.runs.len(), 6);
        for (i, run) in result.runs.iter().enumerate() {
            assert_eq!(run.run_index, i);
            assert_eq!(run.seed, 11 + i as u64);
            assert_eq!(run.path.len(), 300);
        }
    }

    #[test]
    fn parallel_runs_match_sequential() {
        let result = run_experiment(&config(4)).unwrap();
        for run in &result.runs {
            let again = result.model.simulate_seeded(300, run.seed);
            assert_eq!(run.path, again);
        }
    }

    #[test]
    fn zero_runs_is_an_error() {
        assert!(matches!(
            run_experiment(&config(0)),
            Err(ExperimentError::NoRuns)
        ));
    }

    #[test]
    fn mean_std_basic() {
        let ms = compute_mean_std(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ms.mean, 2.5);
        assert_eq!(ms.min, 1.0);
        assert_eq!(ms.max, 4.0);
        assert!((ms.std - 1.25f64.sqrt()).abs() < 1e-12);
    }
}
