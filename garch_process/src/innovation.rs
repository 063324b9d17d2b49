use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::ConfigurationError;

/// Draws one return given the conditional mean and variance
pub trait InnovationSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mean: f64, variance: f64) -> f64;
}

impl<T: InnovationSampler> InnovationSampler for &T {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mean: f64, variance: f64) -> f64 {
        (**self).sample(rng, mean, variance)
    }
}

/// Supported innovation distributions
///
/// Experiment files carry the name as a string; it is parsed with
/// [`FromStr`] when the parameters are built, so an unknown name surfaces as
/// a [`ConfigurationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Innovation {
    /// r = mean + sqrt(variance) × ξ, ξ ~ N(0,1)
    #[default]
    Normal,
}

impl Innovation {
    pub fn name(&self) -> &'static str {
        match self {
            Innovation::Normal => "normal",
        }
    }
}

impl InnovationSampler for Innovation {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mean: f64, variance: f64) -> f64 {
        match self {
            Innovation::Normal => {
                let xi: f64 = StandardNormal.sample(rng);
                mean + variance.sqrt() * xi
            }
        }
    }
}

impl FromStr for Innovation {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "gaussian" => Ok(Innovation::Normal),
            _ => Err(ConfigurationError::UnsupportedDistribution {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Innovation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
