use serde::{Deserialize, Serialize};

use crate::error::{GarchResult, NumericalError};
use crate::model::GarchModel;
use crate::validation::{validate_distribution, validate_mean};

/// Unvalidated GARCH(p,q) parameters, as read from an experiment file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarchParams {
    /// Baseline variance ω
    pub omega: f64,
    /// ARCH coefficients α₁..α_p (index 0 = lag 1)
    pub alphas: Vec<f64>,
    /// GARCH coefficients β₁..β_q (index 0 = lag 1)
    #[serde(default)]
    pub betas: Vec<f64>,
    /// Innovation distribution name
    #[serde(default = "default_distribution")]
    pub distribution: String,
    /// Return drift
    #[serde(default)]
    pub mean: f64,
}

fn default_distribution() -> String {
    "normal".to_string()
}

impl GarchParams {
    pub fn new(omega: f64, alphas: Vec<f64>, betas: Vec<f64>) -> Self {
        GarchParams {
            omega,
            alphas,
            betas,
            distribution: default_distribution(),
            mean: 0.0,
        }
    }

    /// Daily equity returns: unconditional variance 1.8e-4 (≈1.3% daily vol)
    pub fn daily_equity() -> Self {
        GarchParams::new(3.6e-6, vec![0.1], vec![0.88])
    }

    /// Strong GARCH - highly clustered volatility
    pub fn strong() -> Self {
        GarchParams::new(0.001, vec![0.04], vec![0.95])
    }

    /// Weak GARCH - more stable volatility
    pub fn weak() -> Self {
        GarchParams::new(0.001, vec![0.016], vec![0.874])
    }

    /// GARCH(2,1) with the shock weight split across two lags
    pub fn two_lag() -> Self {
        GarchParams::new(2.0e-6, vec![0.05, 0.04], vec![0.89])
    }

    pub fn with_distribution(mut self, distribution: &str) -> Self {
        self.distribution = distribution.to_string();
        self
    }

    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Validate into an immutable model
    pub fn build(&self) -> GarchResult<GarchModel> {
        let distribution = validate_distribution(&self.distribution)?;
        let mean = validate_mean(self.mean)?;
        let model = GarchModel::new(
            self.omega,
            self.alphas.clone(),
            self.betas.clone(),
            distribution,
        )?;
        model.with_mean(mean)
    }
}

impl Default for GarchParams {
    fn default() -> Self {
        GarchParams::daily_equity()
    }
}

impl From<&GarchModel> for GarchParams {
    fn from(model: &GarchModel) -> Self {
        GarchParams {
            omega: model.omega(),
            alphas: model.alphas().to_vec(),
            betas: model.betas().to_vec(),
            distribution: model.distribution().name().to_string(),
            mean: model.mean(),
        }
    }
}

/// sum(alphas) + sum(betas)
pub fn persistence(alphas: &[f64], betas: &[f64]) -> f64 {
    alphas.iter().sum::<f64>() + betas.iter().sum::<f64>()
}

/// Stationary variance ω / (1 − Σα − Σβ)
///
/// Fails unless the persistence is strictly below one and the quotient is
/// finite.
pub fn unconditional_variance(
    omega: f64,
    alphas: &[f64],
    betas: &[f64],
) -> Result<f64, NumericalError> {
    let persistence = persistence(alphas, betas);
    let denominator = 1.0 - persistence;
    if denominator <= 0.0 || denominator.is_nan() {
        return Err(NumericalError::NonStationary { persistence });
    }
    let variance = omega / denominator;
    if !variance.is_finite() {
        return Err(NumericalError::NonFiniteVariance { value: variance });
    }
    Ok(variance)
}
