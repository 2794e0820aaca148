//! Box-Muller Gaussian sampler.

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::TAU;

use crate::types::{RandomError, Result};

/// True normal distribution via the Box-Muller transform.
///
/// Two independent uniform draws `u1, u2` produce
/// `mean + std_dev * sqrt(-2 ln u1) * sin(2π u2)`. The tails are unbounded.
///
/// # Algorithm Reference
///
/// Box, G. E. P. & Muller, M. E. (1958). "A Note on the Generation of Random
/// Normal Deviates". Annals of Mathematical Statistics 29(2).
///
/// # Examples
///
/// ```rust
/// use randkit_core::distributions::BoxMuller;
/// use randkit_core::rng::RandomGenerator;
/// use rand_distr::Distribution;
///
/// let dist = BoxMuller::new(10.0, 2.0).unwrap();
/// let mut rng = RandomGenerator::seeded(1);
/// let x = dist.sample(&mut rng);
/// assert!(x.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMuller {
    mean: f64,
    std_dev: f64,
}

impl BoxMuller {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when either parameter is not
    /// finite or `std_dev` is negative.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(RandomError::invalid(format!(
                "mean and standard deviation must be finite, got ({}, {})",
                mean, std_dev
            )));
        }
        if std_dev < 0.0 {
            return Err(RandomError::invalid(format!(
                "standard deviation must not be negative, got {}",
                std_dev
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// Standard normal: mean 0, standard deviation 1.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Shift to (0, 1] so the logarithm stays finite.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).sin();
        self.mean + self.std_dev * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(BoxMuller::new(0.0, -1.0).is_err());
        assert!(BoxMuller::new(f64::NAN, 1.0).is_err());
        assert!(BoxMuller::new(0.0, f64::INFINITY).is_err());
        assert!(BoxMuller::new(3.0, 0.0).is_ok());
    }

    #[test]
    fn test_zero_deviation_is_constant() {
        let dist = BoxMuller::new(3.5, 0.0).unwrap();
        let mut rng = crate::rng::RandomGenerator::seeded(2);
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), 3.5);
        }
    }

    #[test]
    fn test_standard_parameters() {
        let dist = BoxMuller::standard();
        assert_eq!(dist.mean(), 0.0);
        assert_eq!(dist.std_dev(), 1.0);
    }
}
