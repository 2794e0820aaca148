//! Proportional random selection over a mutable weighted set.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::types::{RandomError, Result};

/// Smallest accepted weight: the smallest positive `f32`.
pub const MIN_WEIGHT: f32 = f32::from_bits(1);

/// Default scan cutoff.
///
/// Selection stops at the first entry where the running remainder drops
/// below this value. The value is in absolute weight units, not a fraction,
/// and reproduces the long-standing selection boundaries of existing tables.
pub const DEFAULT_SCAN_CUTOFF: f32 = 1.0;

/// Scan cutoff giving selection probabilities exactly proportional to weight.
pub const EXACT_SCAN_CUTOFF: f32 = 0.0;

/// One `(item, weight)` pair of a [`WeightedTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    /// The selectable item.
    pub item: T,
    /// Relative weight, always at least [`MIN_WEIGHT`].
    pub weight: f32,
}

/// Weighted random selection table.
///
/// Entries are drawn with probability proportional to their weight. The table
/// keeps a running total of all weights and sorts its entries by descending
/// weight lazily, once after each mutation, so that the linear scan usually
/// stops early. Sorting is stable, so entries of equal weight keep insertion
/// order and ties resolve deterministically.
///
/// The table does not own a generator; every selection takes one, which keeps
/// seeded runs reproducible and lets several tables share a source.
///
/// A table is not synchronised. Wrap it in a `Mutex` if several threads must
/// mutate it.
///
/// # Scan cutoff
///
/// A roll `r` is drawn uniformly from `[0, total_weight)` and each entry's
/// weight is subtracted in turn; the first entry for which the remainder
/// falls below the cutoff is selected. The default cutoff of
/// [`DEFAULT_SCAN_CUTOFF`] (`1.0`) shifts every boundary down by one unit of
/// weight, which favours heavier entries. Build the table with
/// [`EXACT_SCAN_CUTOFF`] for strictly proportional selection.
///
/// # Examples
///
/// ```rust
/// use randkit_core::rng::RandomGenerator;
/// use randkit_core::tables::WeightedTable;
///
/// let mut table = WeightedTable::new();
/// table.add_entry("common", 6.0).unwrap();
/// table.add_entry("rare", 1.5).unwrap();
/// assert_eq!(table.total_weight(), 7.5);
///
/// let mut rng = RandomGenerator::seeded(42);
/// let drawn = table.take(&mut rng).unwrap();
/// assert_eq!(table.len(), 1);
/// assert!(drawn == "common" || drawn == "rare");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    entries: Vec<WeightedEntry<T>>,
    total_weight: f32,
    sorted: bool,
    scan_cutoff: f32,
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total_weight: 0.0,
            sorted: false,
            scan_cutoff: DEFAULT_SCAN_CUTOFF,
        }
    }
}

impl<T> WeightedTable<T> {
    /// Creates an empty table with the default scan cutoff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from `(item, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first pair whose weight [`WeightedTable::add_entry`] rejects.
    pub fn from_entries<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, f32)>,
    {
        let mut table = Self::new();
        for (item, weight) in items {
            table.add_entry(item, weight)?;
        }
        Ok(table)
    }

    /// Replaces the scan cutoff.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `cutoff` is negative or
    /// not finite.
    pub fn with_scan_cutoff(mut self, cutoff: f32) -> Result<Self> {
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(RandomError::invalid(format!(
                "scan cutoff must be finite and not negative, got {}",
                cutoff
            )));
        }
        self.scan_cutoff = cutoff;
        Ok(self)
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `weight` is below
    /// [`MIN_WEIGHT`], NaN or infinite. The table is left unchanged.
    pub fn add_entry(&mut self, item: T, weight: f32) -> Result<()> {
        if !weight.is_finite() || weight < MIN_WEIGHT {
            return Err(RandomError::invalid(format!(
                "cannot add an item with a weight of {}; weights must be positive",
                weight
            )));
        }
        self.entries.push(WeightedEntry { item, weight });
        self.total_weight += weight;
        self.sorted = false;
        Ok(())
    }

    /// Removes every entry and zeroes the total weight.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.total_weight = 0.0;
        self.sorted = false;
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry weights.
    #[inline]
    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    /// Current scan cutoff.
    pub fn scan_cutoff(&self) -> f32 {
        self.scan_cutoff
    }

    /// Entries in their current order (descending weight once sorted).
    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    /// Sorts entries by descending weight if a mutation invalidated the order.
    pub fn sort_by_weight(&mut self) {
        if !self.sorted {
            self.entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            self.sorted = true;
            debug!(entries = self.entries.len(), "sorted weighted table");
        }
    }

    /// Selects an item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyTable`] when the table has no entries.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&T> {
        let index = self.pick_index(rng)?;
        Ok(&self.entries[index].item)
    }

    /// Selects an item and removes it from the table.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyTable`] when the table has no entries.
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T> {
        let index = self.pick_index(rng)?;
        Ok(self.remove_at(index).item)
    }

    /// Selects an item, optionally removing it.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyTable`] when the table has no entries.
    pub fn select_random_item<R: Rng + ?Sized>(&mut self, rng: &mut R, remove: bool) -> Result<T>
    where
        T: Clone,
    {
        if remove {
            self.take(rng)
        } else {
            self.select(rng).cloned()
        }
    }

    /// Iterates over the items in their current order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    fn pick_index<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        if self.entries.is_empty() {
            return Err(RandomError::EmptyTable);
        }
        self.sort_by_weight();

        let mut roll = rng.gen::<f32>() * self.total_weight;
        for (index, entry) in self.entries.iter().enumerate() {
            roll -= entry.weight;
            if roll < self.scan_cutoff {
                return Ok(index);
            }
        }

        // Rounding in the running total can leave a sliver past the last entry.
        let last = self.entries.len() - 1;
        trace!(remainder = roll, index = last, "weighted scan exhausted, using last entry");
        Ok(last)
    }

    fn remove_at(&mut self, index: usize) -> WeightedEntry<T> {
        let entry = self.entries.remove(index);
        if self.entries.is_empty() {
            self.total_weight = 0.0;
        } else {
            self.total_weight -= entry.weight;
        }
        entry
    }
}

impl<T: fmt::Display> fmt::Display for WeightedTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WeightedTable Content ({} items)", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "Value: {}, Weight: {}", entry.item, entry.weight)?;
        }
        Ok(())
    }
}
