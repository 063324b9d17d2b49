//! Gaussian reference processes with constant variance
//!
//! White noise is what a GARCH path reduces to with all coefficients at
//! zero; the random walk is its cumulative sum. Both are used as baselines
//! next to the clustered-volatility presets.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::ConfigurationError;

fn normal(scale: f64) -> Result<Normal<f64>, ConfigurationError> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(ConfigurationError::InvalidScale { value: scale });
    }
    Normal::new(0.0, scale).map_err(|_| ConfigurationError::InvalidScale { value: scale })
}

/// `size` independent N(0, scale²) draws
pub fn white_noise<R: Rng + ?Sized>(
    size: usize,
    scale: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ConfigurationError> {
    let normal = normal(scale)?;
    Ok((0..size).map(|_| normal.sample(rng)).collect())
}

/// Gaussian random walk: x(0) ~ N(0, scale²), x(t) = x(t-1) + N(0, scale²)
pub fn random_walk<R: Rng + ?Sized>(
    size: usize,
    scale: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ConfigurationError> {
    let steps = white_noise(size, scale, rng)?;
    Ok(steps
        .iter()
        .scan(0.0, |level, step| {
            *level += step;
            Some(*level)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{excess_kurtosis, mean, variance};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn white_noise_has_gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = white_noise(50_000, 0.5, &mut rng).unwrap();

        assert_eq!(noise.len(), 50_000);
        assert_abs_diff_eq!(mean(&noise), 0.0, epsilon = 0.02);
        assert_abs_diff_eq!(variance(&noise), 0.25, epsilon = 0.01);
        assert_abs_diff_eq!(excess_kurtosis(&noise), 0.0, epsilon = 0.15);
    }

    #[test]
    fn random_walk_increments_are_the_white_noise() {
        let noise = white_noise(200, 1.5, &mut StdRng::seed_from_u64(9)).unwrap();
        let walk = random_walk(200, 1.5, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(walk[0], noise[0]);
        for t in 1..walk.len() {
            assert_abs_diff_eq!(walk[t] - walk[t - 1], noise[t], epsilon = 1e-9);
        }
    }

    #[test]
    fn random_walk_variance_grows_linearly() {
        // Var x(n-1) = n × scale²
        let mut rng = StdRng::seed_from_u64(3);
        let finals: Vec<f64> = (0..4000)
            .map(|_| *random_walk(100, 0.1, &mut rng).unwrap().last().unwrap())
            .collect();
        assert_abs_diff_eq!(variance(&finals), 1.0, epsilon = 0.1);
    }

    #[test]
    fn zero_scale_and_zero_size() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(white_noise(3, 0.0, &mut rng).unwrap(), vec![0.0; 3]);
        assert!(random_walk(0, 1.0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_scale() {
        let mut rng = StdRng::seed_from_u64(0);
        for scale in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                white_noise(10, scale, &mut rng),
                Err(ConfigurationError::InvalidScale { .. })
            ));
            assert!(random_walk(10, scale, &mut rng).is_err());
        }
    }
}
