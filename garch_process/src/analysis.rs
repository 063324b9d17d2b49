use serde::{Deserialize, Serialize};

use crate::model::GarchModel;
use crate::simulator::SimulationPath;

/// Compute mean of a series
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance of a series
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Compute standard deviation of a series
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Fourth standardised moment minus 3 (zero for a normal sample)
///
/// GARCH returns are fat tailed even with normal innovations, so this is
/// positive for a clustered-volatility path.
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let var = variance(values);
    if var <= 0.0 {
        return 0.0;
    }
    let m = mean(values);
    let fourth = values.iter().map(|v| (v - m).powi(4)).sum::<f64>() / values.len() as f64;
    fourth / (var * var) - 3.0
}

/// Compute range (max - min) of a series
pub fn range(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

/// Per-path summary used in reports and experiment output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    pub length: usize,
    pub return_mean: f64,
    pub return_variance: f64,
    pub excess_kurtosis: f64,
    pub mean_volatility: f64,
    /// Standard deviation of σ(t) across the path
    pub volatility_std: f64,
    pub max_volatility: f64,
    pub volatility_range: f64,
    /// Sample return variance over the model's unconditional variance
    pub variance_ratio: f64,
}

impl PathSummary {
    pub fn from_path(path: &SimulationPath, model: &GarchModel) -> Self {
        let vols = path.volatilities();
        let return_variance = variance(&path.returns);

        PathSummary {
            length: path.len(),
            return_mean: mean(&path.returns),
            return_variance,
            excess_kurtosis: excess_kurtosis(&path.returns),
            mean_volatility: mean(&vols),
            volatility_std: std_dev(&vols),
            max_volatility: vols.iter().cloned().fold(0.0, f64::max),
            volatility_range: range(&vols),
            variance_ratio: return_variance / model.unconditional_variance(),
        }
    }

    /// Print summary
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {} ===", name);
        println!("Points: {}", self.length);
        println!(
            "Returns: mean={:.6}, variance={:.4e}, excess kurtosis={:.3}",
            self.return_mean, self.return_variance, self.excess_kurtosis
        );
        println!(
            "Volatility: mean={:.6}, std={:.6}, max={:.6}, range={:.6}",
            self.mean_volatility, self.volatility_std, self.max_volatility, self.volatility_range
        );
        println!("Sample / unconditional variance: {:.3}", self.variance_ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn std_dev_basic() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Mean = 5, Variance = 4, StdDev = 2
        assert_abs_diff_eq!(std_dev(&values), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn range_basic() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        assert_abs_diff_eq!(range(&values), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_series_are_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(excess_kurtosis(&[]), 0.0);
        assert_eq!(range(&[]), 0.0);
    }

    #[test]
    fn two_point_distribution_kurtosis() {
        // ±1 with equal weight: fourth moment 1, variance 1
        let values = vec![1.0, -1.0, 1.0, -1.0];
        assert_abs_diff_eq!(excess_kurtosis(&values), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn garch_path_is_fat_tailed() {
        // Theoretical excess kurtosis 3 × 0.19 / 0.11 − 3 ≈ 2.2
        let model = crate::GarchParams::new(1e-4, vec![0.2], vec![0.7])
            .build()
            .unwrap();
        let path = model.simulate_seeded(20_000, 42);
        let summary = PathSummary::from_path(&path, &model);

        assert_eq!(summary.length, 20_000);
        assert!(summary.excess_kurtosis > 0.0, "kurtosis {}", summary.excess_kurtosis);
        assert!(summary.max_volatility >= summary.mean_volatility);
        // Clustering means σ(t) itself moves around
        assert!(summary.volatility_std > 0.0);
        assert!(summary.volatility_std <= summary.volatility_range);
    }
}
