//! TOML experiment configuration
//!
//! ```toml
//! [experiment]
//! name = "baseline"
//! num_runs = 8
//! length = 2530
//! base_seed = 42
//!
//! [model]
//! omega = 3.6e-6
//! alphas = [0.1]
//! betas = [0.88]
//!
//! [output]
//! dir = "results"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExperimentError;
use crate::model::GarchModel;
use crate::params::GarchParams;

/// Top-level experiment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub experiment: ExperimentMetadata,
    pub model: GarchParams,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub num_runs: usize,
    /// Points per simulated path
    pub length: usize,
    /// Run i is seeded with base_seed + i
    pub base_seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_true")]
    pub save_paths: bool,
    #[serde(default = "default_true")]
    pub save_summary: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_true() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            dir: default_output_dir(),
            save_paths: true,
            save_summary: true,
        }
    }
}

impl ExperimentConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ExperimentError> {
        let config: ExperimentConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExperimentError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Build the model, failing on any parameter error before a run starts
    pub fn build_model(&self) -> Result<GarchModel, ExperimentError> {
        Ok(self.model.build()?)
    }

    /// Directory this experiment writes into: `<output.dir>/<name>`
    pub fn output_dir(&self) -> PathBuf {
        self.output.dir.join(&self.experiment.name)
    }

    fn validate(&self) -> Result<(), ExperimentError> {
        if self.experiment.num_runs == 0 {
            return Err(ExperimentError::NoRuns);
        }
        self.build_model()?;
        Ok(())
    }
}
