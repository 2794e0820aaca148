//! # Shaped Distributions
//!
//! Non-uniform draws built on top of [`RandomGenerator`]:
//!
//! - [`IrwinHall`]: bounded normal approximation (sum of uniform rolls)
//! - [`BoxMuller`]: true Gaussian with unbounded tails
//! - [`LogBias`]: logarithmic bias toward the low end of `[0, 1]`
//! - [`TangentPeak`]: heavy-tailed tangent distribution
//!
//! Each distribution validates its parameters at construction and implements
//! [`rand_distr::Distribution<f64>`], so it can sample from any `Rng`. The
//! generator also exposes one-call shorthands (`normal`, `gaussian`,
//! `exponential_base`, `uniform_peak`, ...) that validate, then draw.
//!
//! ```rust
//! use randkit_core::rng::RandomGenerator;
//!
//! let mut rng = RandomGenerator::seeded(7);
//! let score = rng.normal(0.0, 100.0, 10).unwrap();
//! let loot = rng.exponential_range(10.0, 1.0, 500.0).unwrap();
//! assert!((0.0..=100.0).contains(&score));
//! assert!((1.0..=500.0).contains(&loot));
//! ```

mod gaussian;
mod irwin_hall;
mod log_bias;
mod tangent;

pub use gaussian::BoxMuller;
pub use irwin_hall::IrwinHall;
pub use log_bias::{LogBias, DEFAULT_LOG_BASE, MIN_LOG_BASE};
pub use tangent::TangentPeak;

use rand::RngCore;
use rand_distr::Distribution;

use crate::rng::RandomGenerator;
use crate::types::Result;

impl<R: RngCore> RandomGenerator<R> {
    /// Irwin-Hall draw over `[lower, upper]` summing `rolls` uniform parts.
    ///
    /// # Errors
    ///
    /// See [`IrwinHall::new`].
    pub fn normal(&mut self, lower: f64, upper: f64, rolls: u32) -> Result<f64> {
        let dist = IrwinHall::new(lower, upper, rolls)?;
        Ok(dist.sample(self))
    }

    /// Irwin-Hall draw over `[0, upper]`.
    pub fn normal_up_to(&mut self, upper: f64, rolls: u32) -> Result<f64> {
        self.normal(0.0, upper, rolls)
    }

    /// Irwin-Hall draw narrowed to `f32`.
    pub fn normal_f32(&mut self, lower: f32, upper: f32, rolls: u32) -> Result<f32> {
        Ok(self.normal(lower.into(), upper.into(), rolls)? as f32)
    }

    /// Irwin-Hall draw truncated toward zero to an integer.
    pub fn normal_int(&mut self, lower: i32, upper: i32, rolls: u32) -> Result<i32> {
        Ok(self.normal(lower.into(), upper.into(), rolls)? as i32)
    }

    /// Box-Muller Gaussian with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// See [`BoxMuller::new`].
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> Result<f64> {
        let dist = BoxMuller::new(mean, std_dev)?;
        Ok(dist.sample(self))
    }

    /// Value in `[0, 1]` biased toward 0 by a base-10 logarithm.
    pub fn exponential(&mut self) -> f64 {
        LogBias::default().sample(self)
    }

    /// Value in `[0, 1]` biased toward 0 by a base-`log_base` logarithm.
    ///
    /// # Errors
    ///
    /// See [`LogBias::new`].
    pub fn exponential_base(&mut self, log_base: f64) -> Result<f64> {
        let dist = LogBias::new(log_base)?;
        Ok(dist.sample(self))
    }

    /// Logarithmically biased value rescaled into `[min, max]`.
    ///
    /// # Errors
    ///
    /// See [`LogBias::new`] and [`LogBias::with_range`].
    pub fn exponential_range(&mut self, log_base: f64, min: f64, max: f64) -> Result<f64> {
        let dist = LogBias::new(log_base)?.with_range(min, max)?;
        Ok(dist.sample(self))
    }

    /// Tangent-distributed value; see [`TangentPeak`].
    ///
    /// # Errors
    ///
    /// See [`TangentPeak::new`].
    pub fn uniform_peak(&mut self, peak: f64, scale: f64) -> Result<f64> {
        let dist = TangentPeak::new(peak, scale)?;
        Ok(dist.sample(self))
    }
}
