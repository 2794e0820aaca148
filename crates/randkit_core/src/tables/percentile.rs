//! Conversion of weighted tables into printed die-roll lookup tables.
//!
//! A percentile table assigns each entry a contiguous block of die faces
//! within `1..=scale`, sized in proportion to its share of the total weight.
//! Widths are rounded to the nearest integer (ties to even) with a floor of
//! one face, so a table may leave the top faces unassigned; it can never
//! overrun them.

use rand::Rng;
use std::fmt;
use tracing::debug;

use super::weighted::WeightedTable;
use crate::types::{RandomError, Result};

/// One row of a [`PercentileTable`]: faces `lower..=upper` map to `label`.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileRow {
    /// First face of the block (1-based).
    pub lower: u32,
    /// Last face of the block, inclusive.
    pub upper: u32,
    /// Display label of the item.
    pub label: String,
    /// Unrounded proportional width, `weight / total_weight * scale`.
    pub raw_width: f32,
}

impl PercentileRow {
    /// Range label as printed: `"7"` for a single face, `"3 - 6"` otherwise.
    pub fn range_label(&self) -> String {
        if self.lower >= self.upper {
            format!("{}", self.lower)
        } else {
            format!("{} - {}", self.lower, self.upper)
        }
    }

    /// Whether a die face falls inside this row.
    #[inline]
    pub fn contains(&self, face: u32) -> bool {
        (self.lower..=self.upper).contains(&face)
    }
}

impl fmt::Display for PercentileRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} raw({})", self.range_label(), self.label, self.raw_width)
    }
}

/// Lookup table of die faces to item labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileTable {
    scale: u32,
    rows: Vec<PercentileRow>,
}

impl PercentileTable {
    /// Number of die faces.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Rows in ascending face order.
    pub fn rows(&self) -> &[PercentileRow] {
        &self.rows
    }

    /// `(range-label, item-label)` pairs in ascending face order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .map(|row| (row.range_label(), row.label.clone()))
            .collect()
    }

    /// Row covering `face`, if any.
    pub fn lookup(&self, face: u32) -> Option<&PercentileRow> {
        self.rows.iter().find(|row| row.contains(face))
    }

    /// Rolls the die and looks the face up. `None` when the face is unassigned.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PercentileRow> {
        let face = rng.gen_range(1..=self.scale);
        self.lookup(face)
    }

    /// Whether the rows cover every face `1..=scale` with no gaps.
    pub fn is_complete(&self) -> bool {
        self.rows.last().map(|row| row.upper) == Some(self.scale)
    }
}

impl fmt::Display for PercentileTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "d{} table ({} rows)", self.scale, self.rows.len())?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> WeightedTable<T> {
    /// Converts the table into a die-roll lookup table over `1..=scale`.
    ///
    /// `scale` is either a plain face count or a
    /// [`DiceType`](crate::types::DiceType). An empty table converts to an
    /// empty lookup table.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidArgument`] when `scale` is zero
    /// - [`RandomError::RangeExceeded`] when the rounded blocks would run
    ///   past `scale` (too many entries, or shares too fine for the die)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randkit_core::tables::WeightedTable;
    /// use randkit_core::types::DiceType;
    ///
    /// let mut table = WeightedTable::from_entries([("orc", 50.0), ("goblin", 30.0), ("dragon", 20.0)]).unwrap();
    /// let lookup = table.to_percentile_table(DiceType::D100).unwrap();
    /// assert_eq!(lookup.pairs()[0], ("1 - 50".to_string(), "orc".to_string()));
    /// assert!(lookup.is_complete());
    /// ```
    pub fn to_percentile_table(&mut self, scale: impl Into<u32>) -> Result<PercentileTable> {
        let scale = scale.into();
        if scale == 0 {
            return Err(RandomError::invalid("percentile scale must be at least 1"));
        }
        self.sort_by_weight();

        let total = self.total_weight();
        let mut rows = Vec::with_capacity(self.len());
        // Face arithmetic runs in u64 so scales near u32::MAX cannot overflow.
        let mut lower = 1u64;

        for entry in self.entries() {
            let raw_width = entry.weight / total * scale as f32;
            let width = u64::from((raw_width.round_ties_even() as u32).max(1));
            let upper = lower + width - 1;

            if upper > u64::from(scale) {
                return Err(RandomError::RangeExceeded {
                    scale,
                    needed: u32::try_from(upper).unwrap_or(u32::MAX),
                });
            }

            // Both bounds are at most `scale` here.
            rows.push(PercentileRow {
                lower: lower as u32,
                upper: upper as u32,
                label: entry.item.to_string(),
                raw_width,
            });
            lower = upper + 1;
        }

        debug!(scale, rows = rows.len(), "converted weighted table to percentile table");
        Ok(PercentileTable { scale, rows })
    }
}
