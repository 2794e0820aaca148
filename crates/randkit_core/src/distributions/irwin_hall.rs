//! Irwin-Hall approximation of a bounded normal distribution.

use rand::Rng;
use rand_distr::Distribution;

use crate::rng::check_bounds;
use crate::types::{RandomError, Result};

/// Sum of `rolls` uniform draws spread over `[lower, upper]`.
///
/// The interval is divided into `rolls` equal parts and one uniform value is
/// drawn from each part (`[lower / rolls, upper / rolls)`); the draws are
/// summed. By the Central Limit Theorem the result concentrates around the
/// midpoint as `rolls` grows.
///
/// This is an approximation of a normal distribution, not a Gaussian
/// sampler: the output is always bounded, and with `rolls == 1` it is simply
/// uniform. Use [`BoxMuller`](super::BoxMuller) for a true normal variate.
///
/// # Examples
///
/// ```rust
/// use randkit_core::distributions::IrwinHall;
/// use randkit_core::rng::RandomGenerator;
/// use rand_distr::Distribution;
///
/// let dist = IrwinHall::new(0.0, 100.0, 10).unwrap();
/// let mut rng = RandomGenerator::seeded(42);
/// let x = dist.sample(&mut rng);
/// assert!((0.0..=100.0).contains(&x));
/// assert_eq!(dist.mean(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrwinHall {
    lower: f64,
    upper: f64,
    rolls: u32,
}

impl IrwinHall {
    /// Creates the distribution, validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `rolls` is zero, when a
    /// bound is NaN or infinite, or when `upper < lower`.
    pub fn new(lower: f64, upper: f64, rolls: u32) -> Result<Self> {
        if rolls < 1 {
            return Err(RandomError::invalid(format!(
                "rolls must be at least 1, got {}",
                rolls
            )));
        }
        check_bounds(lower, upper)?;
        Ok(Self {
            lower,
            upper,
            rolls,
        })
    }

    /// Lower bound of the output.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the output.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of uniform draws summed per sample.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Expected value, the midpoint of the bounds.
    pub fn mean(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Variance of the sum: `rolls * width^2 / 12` for per-roll width
    /// `(upper - lower) / rolls`.
    pub fn variance(&self) -> f64 {
        let width = (self.upper - self.lower) / self.rolls as f64;
        self.rolls as f64 * width * width / 12.0
    }
}

impl Distribution<f64> for IrwinHall {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let n = self.rolls as f64;
        let lo = self.lower / n;
        let hi = self.upper / n;
        let mut sum = 0.0;
        for _ in 0..self.rolls {
            let unit: f64 = rng.gen();
            sum += unit * (hi - lo) + lo;
        }
        sum
    }
}
