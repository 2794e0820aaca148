//! Logarithmic ("exponential") bias toward the low end of a range.

use rand::Rng;
use rand_distr::Distribution;

use crate::rng::check_bounds;
use crate::types::{RandomError, Result};

/// Smallest accepted logarithm base: the smallest positive `f64`.
pub const MIN_LOG_BASE: f64 = f64::from_bits(1);

/// Base used by [`LogBias::default`].
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Values in `[0, 1]` biased toward 0 by a logarithm.
///
/// A uniform value `x` in `[1, base]` is mapped through `log_base(x)` onto
/// `[0, 1]` and inverted (`1 - log_base(x)`). Because the logarithm is
/// concave, most of the mass lands near 0; larger bases sharpen the bias.
///
/// An optional output range rescales the result linearly into `[min, max]`.
///
/// # Examples
///
/// ```rust
/// use randkit_core::distributions::LogBias;
/// use randkit_core::rng::RandomGenerator;
/// use rand_distr::Distribution;
///
/// let dist = LogBias::new(10.0).unwrap().with_range(0.0, 50.0).unwrap();
/// let mut rng = RandomGenerator::seeded(5);
/// let x = dist.sample(&mut rng);
/// assert!((0.0..=50.0).contains(&x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogBias {
    base: f64,
    ln_base: f64,
    min: f64,
    max: f64,
}

impl LogBias {
    /// Creates a bias over `[0, 1]` using the given logarithm base.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `base` is not finite,
    /// is below [`MIN_LOG_BASE`], or is exactly 1 (every draw would be 0/0).
    pub fn new(base: f64) -> Result<Self> {
        if !base.is_finite() || base < MIN_LOG_BASE {
            return Err(RandomError::invalid(format!(
                "log base must be finite and greater than 0, got {}",
                base
            )));
        }
        if base == 1.0 {
            return Err(RandomError::invalid("log base must not be 1"));
        }
        Ok(Self {
            base,
            ln_base: base.ln(),
            min: 0.0,
            max: 1.0,
        })
    }

    /// Rescales the output linearly into `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `min > max` or either
    /// bound is not finite.
    pub fn with_range(self, min: f64, max: f64) -> Result<Self> {
        check_bounds(min, max)?;
        Ok(Self { min, max, ..self })
    }

    /// Logarithm base.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Output range as `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl Default for LogBias {
    fn default() -> Self {
        Self {
            base: DEFAULT_LOG_BASE,
            ln_base: DEFAULT_LOG_BASE.ln(),
            min: 0.0,
            max: 1.0,
        }
    }
}

impl Distribution<f64> for LogBias {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let unit: f64 = rng.gen();
        let x = unit * (self.base - 1.0) + 1.0;
        let biased = 1.0 - x.ln() / self.ln_base;
        biased * (self.max - self.min) + self.min
    }
}
