//! Roll command implementation
//!
//! Rolls a dice formula such as `3d6+2` one or more times.

use clap::Args;
use rand::RngCore;
use randkit_core::RandomGenerator;
use randkit_extras::dice::DiceFormula;
use tracing::info;

use crate::{CliError, Result};

/// Arguments of the roll command
#[derive(Debug, Clone, Args)]
pub struct RollArgs {
    /// Dice formula, e.g. `3d6+2` or `4d4+2x10`
    pub formula: String,

    /// Number of times to roll
    #[arg(short, long, default_value_t = 1)]
    pub times: usize,

    /// Print the formula's range and expected value after the rolls
    #[arg(long)]
    pub stats: bool,
}

/// Roll the formula, one line per roll.
pub fn roll<R: RngCore>(rng: &mut RandomGenerator<R>, args: &RollArgs) -> Result<Vec<String>> {
    if args.times == 0 {
        return Err(CliError::invalid("times must be at least 1"));
    }
    let formula: DiceFormula = args.formula.parse()?;

    let mut lines = Vec::with_capacity(args.times + 1);
    let mut total = 0i64;
    for _ in 0..args.times {
        let value = formula.roll(rng)?;
        total += value;
        lines.push(format!("{} -> {}", formula, value));
    }

    if args.stats {
        lines.push(format!(
            "min {} max {} expected {} observed {:.2}",
            formula.min(),
            formula.max(),
            formula.average(),
            total as f64 / args.times as f64
        ));
    }
    Ok(lines)
}

/// Run the roll command
pub fn run<R: RngCore>(rng: &mut RandomGenerator<R>, args: &RollArgs) -> Result<()> {
    info!(formula = %args.formula, times = args.times, "rolling dice");
    super::print_lines(&roll(rng, args)?);
    Ok(())
}
