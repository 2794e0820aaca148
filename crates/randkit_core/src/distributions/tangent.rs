//! Tangent-shaped distribution with a sharp central peak.

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::PI;

use crate::types::{RandomError, Result};

/// Unbounded peaked distribution: `(peak + scale) * tan(π (u - 0.5))`.
///
/// The tangent of a uniform angle is a Cauchy variate, so output piles up
/// around the centre and has very heavy tails. The location and scale terms
/// are combined into a single multiplier, exactly as written above; callers
/// relying on existing output must not expect a shifted centre.
///
/// # Examples
///
/// ```rust
/// use randkit_core::distributions::TangentPeak;
/// use randkit_core::rng::RandomGenerator;
/// use rand_distr::Distribution;
///
/// let dist = TangentPeak::new(0.0, 1.0).unwrap();
/// let mut rng = RandomGenerator::seeded(3);
/// assert!(dist.sample(&mut rng).is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPeak {
    peak: f64,
    scale: f64,
}

impl TangentPeak {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `peak` or `scale` is not
    /// finite.
    pub fn new(peak: f64, scale: f64) -> Result<Self> {
        if !peak.is_finite() || !scale.is_finite() {
            return Err(RandomError::invalid(format!(
                "peak and scale must be finite, got ({}, {})",
                peak, scale
            )));
        }
        Ok(Self { peak, scale })
    }

    /// Peak parameter.
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for TangentPeak {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let unit: f64 = rng.gen();
        (self.peak + self.scale) * (PI * (unit - 0.5)).tan()
    }
}
