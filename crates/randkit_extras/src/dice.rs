//! Die rolls and dice formulas.
//!
//! Every face comes from the generator's inclusive integer draw, so a `d6`
//! is exactly `int_inclusive(1, 6)`.

use rand::RngCore;
use randkit_core::{DiceType, RandomGenerator};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExtrasError, Result};

/// One roll of `die`.
pub fn roll<R: RngCore>(rng: &mut RandomGenerator<R>, die: DiceType) -> Result<i32> {
    Ok(rng.int_inclusive(1, die.sides() as i32)?)
}

/// Sum of `count` rolls of `die`.
pub fn roll_many<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    count: u32,
    die: DiceType,
) -> Result<i64> {
    roll_with(rng, count, die.sides() as i32, 0, 0)
}

/// Sum of `count` rolls of a `sides`-faced die.
///
/// `bonus_per_roll` is added to every face, `final_bonus` once to the total.
///
/// # Errors
///
/// Returns `InvalidRange` when `sides < 1`.
pub fn roll_with<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    count: u32,
    sides: i32,
    bonus_per_roll: i32,
    final_bonus: i32,
) -> Result<i64> {
    let mut total = i64::from(final_bonus);
    for _ in 0..count {
        total += i64::from(rng.int_inclusive(1, sides)?) + i64::from(bonus_per_roll);
    }
    Ok(total)
}

/// Expected value of one roll of `die`.
pub fn average(die: DiceType) -> f64 {
    (f64::from(die.sides()) + 1.0) / 2.0
}

/// A dice expression of the form `NdS+BxM`.
///
/// `N` dice with `S` sides are rolled and summed, the bonus `B` (which may
/// be negative) is added and the result multiplied by `M`. Every part but
/// the die is optional: `d6`, `2d4`, `3d6+2`, `2d8-1` and `4d4+2x10` all
/// parse. Parsing ignores case and whitespace.
///
/// # Examples
/// ```
/// use randkit_extras::dice::DiceFormula;
/// use randkit_core::DiceType;
///
/// let f: DiceFormula = "3d6+2".parse().unwrap();
/// assert_eq!(f.die(), DiceType::D6);
/// assert_eq!((f.min(), f.max()), (5, 20));
/// assert_eq!(f.to_string(), "3d6+2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceFormula {
    die: DiceType,
    rolls: u32,
    bonus: i32,
    multiplier: u32,
}

impl Default for DiceFormula {
    /// A single `d20`.
    fn default() -> Self {
        Self {
            die: DiceType::D20,
            rolls: 1,
            bonus: 0,
            multiplier: 1,
        }
    }
}

impl DiceFormula {
    /// Builds a formula from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrasError::InvalidFormula`] when `rolls` or `multiplier`
    /// is zero.
    pub fn new(die: DiceType, rolls: u32, bonus: i32, multiplier: u32) -> Result<Self> {
        let formula = Self {
            die,
            rolls,
            bonus,
            multiplier,
        };
        if rolls == 0 {
            return Err(ExtrasError::formula(formula.to_string(), "rolls must be at least 1"));
        }
        if multiplier == 0 {
            return Err(ExtrasError::formula(
                formula.to_string(),
                "multiplier must be at least 1",
            ));
        }
        Ok(formula)
    }

    /// Die rolled by the formula.
    pub fn die(&self) -> DiceType {
        self.die
    }

    /// Number of dice.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Flat bonus added to the sum.
    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    /// Factor applied after the bonus.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    fn scale(&self, sum: i64) -> i64 {
        (sum + i64::from(self.bonus)) * i64::from(self.multiplier)
    }

    /// Smallest possible result.
    pub fn min(&self) -> i64 {
        self.scale(i64::from(self.rolls))
    }

    /// Largest possible result.
    pub fn max(&self) -> i64 {
        self.scale(i64::from(self.rolls) * i64::from(self.die.sides()))
    }

    /// Expected result.
    pub fn average(&self) -> f64 {
        (f64::from(self.rolls) * average(self.die) + f64::from(self.bonus))
            * f64::from(self.multiplier)
    }

    /// Rolls the formula.
    pub fn roll<R: RngCore>(&self, rng: &mut RandomGenerator<R>) -> Result<i64> {
        let sum = roll_many(rng, self.rolls, self.die)?;
        Ok(self.scale(sum))
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rolls, self.die)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        } else if self.bonus < 0 {
            write!(f, "{}", self.bonus)?;
        }
        if self.multiplier != 1 {
            write!(f, "x{}", self.multiplier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceFormula {
    type Err = ExtrasError;

    fn from_str(input: &str) -> Result<Self> {
        let text: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if text.is_empty() {
            return Err(ExtrasError::formula(input, "formula is empty"));
        }

        let count = |part: &str, what: &str| -> Result<u32> {
            match part.parse::<u32>() {
                Ok(0) => Err(ExtrasError::formula(input, format!("{} must be at least 1", what))),
                Ok(n) => Ok(n),
                Err(_) => Err(ExtrasError::formula(input, format!("bad {} '{}'", what, part))),
            }
        };

        let (body, multiplier) = match text.split_once('x') {
            Some((body, m)) => (body, count(m, "multiplier")?),
            None => (text.as_str(), 1),
        };

        let (dice, bonus) = match body.find(|c: char| c == '+' || c == '-') {
            Some(at) => {
                let part = &body[at..];
                let bonus = part
                    .parse::<i32>()
                    .map_err(|_| ExtrasError::formula(input, format!("bad bonus '{}'", part)))?;
                (&body[..at], bonus)
            }
            None => (body, 0),
        };

        let (rolls, sides) = dice
            .split_once('d')
            .ok_or_else(|| ExtrasError::formula(input, "missing 'd'"))?;
        let rolls = if rolls.is_empty() {
            1
        } else {
            count(rolls, "rolls")?
        };
        let die = sides
            .parse::<u32>()
            .ok()
            .and_then(DiceType::from_sides)
            .ok_or_else(|| ExtrasError::formula(input, format!("unsupported die 'd{}'", sides)))?;

        Ok(Self {
            die,
            rolls,
            bonus,
            multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn parse(s: &str) -> DiceFormula {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!(parse("d6"), DiceFormula::new(DiceType::D6, 1, 0, 1).unwrap());
        assert_eq!(parse("2d4"), DiceFormula::new(DiceType::D4, 2, 0, 1).unwrap());
        assert_eq!(parse("3d6+2"), DiceFormula::new(DiceType::D6, 3, 2, 1).unwrap());
        assert_eq!(parse("2d8-1"), DiceFormula::new(DiceType::D8, 2, -1, 1).unwrap());
        assert_eq!(parse("4d4+2x10"), DiceFormula::new(DiceType::D4, 4, 2, 10).unwrap());
        assert_eq!(parse(" 1D100 x 3 "), DiceFormula::new(DiceType::D100, 1, 0, 3).unwrap());
    }

    #[test]
    fn test_parse_rejections() {
        for bad in ["", "   ", "6", "2d7", "0d6", "2d6+", "2d6x0", "2d6x", "ad6", "2d6+-1"] {
            assert!(
                matches!(bad.parse::<DiceFormula>(), Err(ExtrasError::InvalidFormula { .. })),
                "'{}' should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trips_common_forms() {
        for text in ["1d20", "3d6+2", "2d8-1", "4d4+2x10", "10d100x2"] {
            assert_eq!(parse(text).to_string(), text);
        }
        assert_eq!(DiceFormula::default().to_string(), "1d20");
    }

    #[test]
    fn test_new_validation() {
        assert!(DiceFormula::new(DiceType::D6, 0, 0, 1).is_err());
        assert!(DiceFormula::new(DiceType::D6, 1, 0, 0).is_err());
    }

    #[test]
    fn test_min_max_average() {
        let f = parse("2d6-1x3");
        assert_eq!(f.min(), 3);
        assert_eq!(f.max(), 33);
        assert_abs_diff_eq!(f.average(), 18.0);
        assert_abs_diff_eq!(average(DiceType::D2), 1.5);
    }

    #[test]
    fn test_roll_helpers() {
        let mut rng = RandomGenerator::seeded(6);
        for _ in 0..500 {
            assert!((1..=20).contains(&roll(&mut rng, DiceType::D20).unwrap()));
            assert!((3..=18).contains(&roll_many(&mut rng, 3, DiceType::D6).unwrap()));
            assert!((8..=18).contains(&roll_with(&mut rng, 2, 6, 1, 4).unwrap()));
        }
        assert_eq!(roll_many(&mut rng, 0, DiceType::D6).unwrap(), 0);
        assert!(roll_with(&mut rng, 1, 0, 0, 0).is_err());
    }

    /// 3d6 averages 10.5 over many rolls.
    #[test]
    fn test_roll_average() {
        let mut rng = RandomGenerator::seeded(7);
        let f = parse("3d6");
        let n = 20_000;
        let mean = (0..n).map(|_| f.roll(&mut rng).unwrap() as f64).sum::<f64>() / n as f64;
        assert_abs_diff_eq!(mean, f.average(), epsilon = 0.1);
    }

    proptest! {
        #[test]
        fn prop_roll_within_min_max(
            seed in any::<u64>(),
            die_index in 0usize..11,
            rolls in 1u32..20,
            bonus in -50i32..50,
            multiplier in 1u32..5,
        ) {
            let f = DiceFormula::new(DiceType::ALL[die_index], rolls, bonus, multiplier).unwrap();
            let mut rng = RandomGenerator::seeded(seed);
            let v = f.roll(&mut rng).unwrap();
            prop_assert!(v >= f.min() && v <= f.max());
        }
    }
}
