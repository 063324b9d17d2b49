//! Batch Experiment Runner
//!
//! Executes Monte Carlo replications of a GARCH model described by a TOML
//! configuration file.
//!
//! Usage:
//!   cargo run --release --bin run_experiment -- experiments/baseline.toml

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use garch_process::config::ExperimentConfig;
use garch_process::experiment::run_experiment;
use garch_process::output::write_experiment;

#[derive(Parser)]
#[command(name = "run_experiment")]
#[command(about = "Run a GARCH Monte Carlo experiment from a TOML file")]
struct Args {
    /// Experiment configuration file
    config: PathBuf,

    /// Override the output directory from the config
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    println!("=== GARCH Experiment Runner ===\n");
    info!(config = %args.config.display(), "loading experiment config");

    let mut config = ExperimentConfig::from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(dir) = args.output {
        config.output.dir = dir;
    }

    println!("Experiment: {}", config.experiment.name);
    if !config.experiment.description.is_empty() {
        println!("Description: {}", config.experiment.description);
    }
    println!(
        "Configuration: {} runs × {} points\n",
        config.experiment.num_runs, config.experiment.length
    );

    let start_time = Instant::now();
    let result = run_experiment(&config)?;
    let elapsed = start_time.elapsed();

    for run in &result.runs {
        println!(
            "  Run {}/{} (seed={}) variance ratio={:.3} kurtosis={:.3}",
            run.run_index + 1,
            config.experiment.num_runs,
            run.seed,
            run.summary.variance_ratio,
            run.summary.excess_kurtosis
        );
    }

    println!("\n=== Aggregating Results ===\n");
    result.aggregate.print_summary();

    let dir = write_experiment(&config, &result)?;

    println!(
        "\n✓ Experiment complete in {:.2}s ({:.3}s per run)",
        elapsed.as_secs_f64(),
        elapsed.as_secs_f64() / config.experiment.num_runs as f64
    );
    println!("Results saved to: {}", dir.display());

    Ok(())
}
