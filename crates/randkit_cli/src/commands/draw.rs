//! Draw command implementation
//!
//! Draws bounded or shaped values from the configured generator.

use clap::{Args, ValueEnum};
use rand::RngCore;
use randkit_core::RandomGenerator;
use tracing::info;

use crate::{CliError, Result};

/// Kind of value to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DrawKind {
    /// 32-bit integer in [min, max)
    Int,
    /// 64-bit integer in [min, max)
    Long,
    /// Double in [min, max)
    Double,
    /// Irwin-Hall bell curve over [min, max]
    Normal,
    /// Box-Muller Gaussian
    Gaussian,
    /// Logarithmically biased value in [min, max]
    Exponential,
    /// Heavy-tailed tangent value
    Peak,
    /// Hex-encoded random bytes (count is the byte length)
    Bytes,
}

/// Arguments of the draw command
#[derive(Debug, Clone, Args)]
pub struct DrawArgs {
    /// Kind of value to draw
    #[arg(value_enum)]
    pub kind: DrawKind,

    /// Number of values to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Lower bound
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub min: f64,

    /// Upper bound
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    pub max: f64,

    /// Uniform rolls summed by `normal`
    #[arg(long, default_value_t = 3)]
    pub rolls: u32,

    /// Logarithm base for `exponential`
    #[arg(long, default_value_t = 10.0)]
    pub base: f64,

    /// Mean for `gaussian`
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub mean: f64,

    /// Standard deviation for `gaussian`
    #[arg(long, default_value_t = 1.0)]
    pub std_dev: f64,

    /// Peak offset for `peak`
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub peak: f64,

    /// Scale for `peak`
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,
}

fn integer_bound<T: TryFrom<i64>>(value: f64, name: &str) -> Result<T> {
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(CliError::invalid(format!("{} must be a whole number, got {}", name, value)));
    }
    T::try_from(value as i64)
        .map_err(|_| CliError::invalid(format!("{} is out of range: {}", name, value)))
}

/// Draw the requested values, one line each.
pub fn draw<R: RngCore>(rng: &mut RandomGenerator<R>, args: &DrawArgs) -> Result<Vec<String>> {
    // Bytes are one buffer of `count` bytes, every other kind is `count` lines.
    let draws = if args.kind == DrawKind::Bytes { 1 } else { args.count };

    let mut lines = Vec::with_capacity(draws);
    for _ in 0..draws {
        let line = match args.kind {
            DrawKind::Int => {
                let (min, max) = (integer_bound(args.min, "min")?, integer_bound(args.max, "max")?);
                rng.int_range(min, max)?.to_string()
            }
            DrawKind::Long => {
                let (min, max) = (integer_bound(args.min, "min")?, integer_bound(args.max, "max")?);
                rng.long_range(min, max)?.to_string()
            }
            DrawKind::Double => rng.double_range(args.min, args.max)?.to_string(),
            DrawKind::Normal => rng.normal(args.min, args.max, args.rolls)?.to_string(),
            DrawKind::Gaussian => rng.gaussian(args.mean, args.std_dev)?.to_string(),
            DrawKind::Exponential => rng
                .exponential_range(args.base, args.min, args.max)?
                .to_string(),
            DrawKind::Peak => rng.uniform_peak(args.peak, args.scale)?.to_string(),
            DrawKind::Bytes => rng
                .byte_array(args.count)?
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect(),
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Run the draw command
pub fn run<R: RngCore>(rng: &mut RandomGenerator<R>, args: &DrawArgs) -> Result<()> {
    info!(kind = ?args.kind, count = args.count, "drawing values");
    super::print_lines(&draw(rng, args)?);
    Ok(())
}
