//! Standard die sizes.
//!
//! Dice sizes double as percentile-table scales: a `D100` table spreads its
//! entries over the slots `1..=100`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RandomError;

/// Polyhedral die sizes supported by tables and dice rolls.
///
/// # Examples
/// ```
/// use randkit_core::types::DiceType;
///
/// assert_eq!(DiceType::D20.sides(), 20);
/// assert_eq!("d100".parse::<DiceType>().unwrap(), DiceType::D100);
/// assert_eq!(DiceType::D6.to_string(), "d6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceType {
    /// Two-sided die (coin)
    D2,
    /// Three-sided die
    D3,
    /// Four-sided die
    D4,
    /// Six-sided die
    D6,
    /// Eight-sided die
    D8,
    /// Ten-sided die
    D10,
    /// Twelve-sided die
    D12,
    /// Twenty-sided die
    D20,
    /// Thirty-sided die
    D30,
    /// Percentile die
    D100,
    /// Thousand-sided die
    D1000,
}

impl DiceType {
    /// All supported die sizes, smallest first.
    pub const ALL: [DiceType; 11] = [
        DiceType::D2,
        DiceType::D3,
        DiceType::D4,
        DiceType::D6,
        DiceType::D8,
        DiceType::D10,
        DiceType::D12,
        DiceType::D20,
        DiceType::D30,
        DiceType::D100,
        DiceType::D1000,
    ];

    /// Number of faces on the die.
    #[inline]
    pub fn sides(self) -> u32 {
        match self {
            DiceType::D2 => 2,
            DiceType::D3 => 3,
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
            DiceType::D30 => 30,
            DiceType::D100 => 100,
            DiceType::D1000 => 1000,
        }
    }

    /// Looks up the die with exactly `sides` faces.
    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.sides() == sides)
    }
}

impl From<DiceType> for u32 {
    fn from(die: DiceType) -> Self {
        die.sides()
    }
}

impl fmt::Display for DiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl FromStr for DiceType {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('d')
            .or_else(|| trimmed.strip_prefix('D'))
            .unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .ok()
            .and_then(Self::from_sides)
            .ok_or_else(|| RandomError::invalid(format!("unknown die type: {}", s)))
    }
}
