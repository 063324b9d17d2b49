//! Error types for GARCH model construction and experiments

use thiserror::Error;

/// Malformed model parameters, detected before a model exists
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("omega must be a finite number, got {value}")]
    NonFiniteOmega { value: f64 },

    #[error("omega must be strictly positive, got {value}")]
    NonPositiveOmega { value: f64 },

    #[error("{name} must contain at least one coefficient")]
    EmptyCoefficients { name: &'static str },

    #[error("{name}[{index}] must be a finite number, got {value}")]
    NonFiniteCoefficient {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("{name}[{index}] must be non-negative, got {value}")]
    NegativeCoefficient {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("mean must be a finite number, got {value}")]
    NonFiniteMean { value: f64 },

    #[error("unsupported innovation distribution '{name}' (supported: normal)")]
    UnsupportedDistribution { name: String },

    #[error("noise scale must be finite and non-negative, got {value}")]
    InvalidScale { value: f64 },
}

/// Parameters that are well-formed but have no stationary solution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalError {
    #[error("non-stationary parameters: sum(alphas) + sum(betas) = {persistence} must be < 1")]
    NonStationary { persistence: f64 },

    #[error("unconditional variance is not finite ({value})")]
    NonFiniteVariance { value: f64 },
}

/// Any failure constructing a [`GarchModel`](crate::GarchModel)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GarchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Numerical(#[from] NumericalError),
}

impl GarchError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, GarchError::Configuration(_))
    }

    pub fn is_numerical(&self) -> bool {
        matches!(self, GarchError::Numerical(_))
    }
}

pub type GarchResult<T> = Result<T, GarchError>;

/// Failures loading an experiment or writing its results
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid experiment config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    Model(#[from] GarchError),

    #[error("experiment must request at least one run")]
    NoRuns,
}
