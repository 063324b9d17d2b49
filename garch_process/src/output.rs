//! Data output and serialization for experimental analysis
//!
//! Paths are written as CSV and summaries as JSON for analysis in Python
//! (pandas, matplotlib).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::PathSummary;
use crate::config::{ExperimentConfig, OutputSettings};
use crate::error::ExperimentError;
use crate::experiment::{ExperimentResult, RunResult};
use crate::model::GarchModel;
use crate::params::GarchParams;
use crate::simulator::SimulationPath;

/// One CSV row of a simulated path
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PathRecord {
    t: usize,
    #[serde(rename = "return")]
    ret: f64,
    variance: f64,
    volatility: f64,
}

/// Metadata for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub experiment: String,
    pub run_index: usize,
    pub seed: u64,
    pub length: usize,
    pub model: GarchParams,
    pub unconditional_variance: f64,
    pub timestamp: String,
}

/// Summary JSON written for each run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    pub metadata: RunMetadata,
    pub summary: PathSummary,
}

impl RunOutput {
    pub fn new(experiment: &str, model: &GarchModel, run: &RunResult) -> Self {
        RunOutput {
            metadata: RunMetadata {
                experiment: experiment.to_string(),
                run_index: run.run_index,
                seed: run.seed,
                length: run.path.len(),
                model: GarchParams::from(model),
                unconditional_variance: model.unconditional_variance(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
            summary: run.summary.clone(),
        }
    }
}

/// Write a path as `t,return,variance,volatility`
pub fn write_path_csv<P: AsRef<Path>>(path: &SimulationPath, file: P) -> Result<(), ExperimentError> {
    let mut wtr = csv::Writer::from_path(file)?;
    for (t, ret, variance) in path.iter() {
        wtr.serialize(PathRecord {
            t,
            ret,
            variance,
            volatility: variance.sqrt(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, file: P) -> Result<(), ExperimentError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(file, json)?;
    Ok(())
}

/// Write a single run into `run_dir` according to `settings`
pub fn save_run_output(
    output: &RunOutput,
    path: &SimulationPath,
    run_dir: &Path,
    settings: &OutputSettings,
) -> Result<(), ExperimentError> {
    fs::create_dir_all(run_dir)?;
    if settings.save_paths {
        write_path_csv(path, run_dir.join("path.csv"))?;
    }
    if settings.save_summary {
        write_json(output, run_dir.join("summary.json"))?;
    }
    Ok(())
}

/// Write all outputs of an experiment and return the directory used
///
/// Creates:
/// - run_<seed>/path.csv
/// - run_<seed>/summary.json
/// - aggregate_summary.json
pub fn write_experiment(
    config: &ExperimentConfig,
    result: &ExperimentResult,
) -> Result<PathBuf, ExperimentError> {
    let dir = config.output_dir();
    fs::create_dir_all(&dir)?;

    for run in &result.runs {
        let output = RunOutput::new(&config.experiment.name, &result.model, run);
        let run_dir = dir.join(format!("run_{}", run.seed));
        save_run_output(&output, &run.path, &run_dir, &config.output)?;
    }

    write_json(&result.aggregate, dir.join("aggregate_summary.json"))?;
    info!(dir = %dir.display(), runs = result.runs.len(), "wrote experiment output");
    Ok(dir)
}
