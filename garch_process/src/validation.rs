//! Parameter checks run once, before a [`GarchModel`](crate::GarchModel) exists.

use crate::error::ConfigurationError;
use crate::innovation::Innovation;

/// omega must be finite and strictly positive
pub fn validate_omega(omega: f64) -> Result<f64, ConfigurationError> {
    if !omega.is_finite() {
        return Err(ConfigurationError::NonFiniteOmega { value: omega });
    }
    if omega <= 0.0 {
        return Err(ConfigurationError::NonPositiveOmega { value: omega });
    }
    Ok(omega)
}

/// Every coefficient must be finite and non-negative.
///
/// `required` rejects an empty slice: a GARCH(p,q) needs p ≥ 1 alphas, while
/// q = 0 betas is a valid ARCH(p).
pub fn validate_coefficients(
    name: &'static str,
    coefficients: &[f64],
    required: bool,
) -> Result<(), ConfigurationError> {
    if required && coefficients.is_empty() {
        return Err(ConfigurationError::EmptyCoefficients { name });
    }
    for (index, &value) in coefficients.iter().enumerate() {
        if !value.is_finite() {
            return Err(ConfigurationError::NonFiniteCoefficient { name, index, value });
        }
        if value < 0.0 {
            return Err(ConfigurationError::NegativeCoefficient { name, index, value });
        }
    }
    Ok(())
}

pub fn validate_mean(mean: f64) -> Result<f64, ConfigurationError> {
    if mean.is_finite() {
        Ok(mean)
    } else {
        Err(ConfigurationError::NonFiniteMean { value: mean })
    }
}

pub fn validate_distribution(name: &str) -> Result<Innovation, ConfigurationError> {
    name.parse()
}

/// Full structural check of a parameter set; stationarity is checked separately.
pub fn validate_params(
    omega: f64,
    alphas: &[f64],
    betas: &[f64],
) -> Result<(), ConfigurationError> {
    validate_omega(omega)?;
    validate_coefficients("alphas", alphas, true)?;
    validate_coefficients("betas", betas, false)?;
    Ok(())
}
