//! # Weighted Tables
//!
//! - [`weighted`]: [`WeightedTable`], proportional selection with optional
//!   removal
//! - [`percentile`]: conversion of a weighted table into a die-roll lookup
//!   table ([`PercentileTable`])
//!
//! ## State
//!
//! A table is either empty or populated. `add_entry` populates it; taking
//! the last entry or calling `reset` empties it again. Selection on an empty
//! table fails with [`RandomError::EmptyTable`](crate::types::RandomError).
//!
//! ```rust
//! use randkit_core::rng::RandomGenerator;
//! use randkit_core::tables::WeightedTable;
//!
//! let mut rng = RandomGenerator::seeded(1);
//! let mut table = WeightedTable::from_entries([("A", 1.0), ("B", 2.0)]).unwrap();
//!
//! while !table.is_empty() {
//!     table.take(&mut rng).unwrap();
//! }
//! assert_eq!(table.total_weight(), 0.0);
//! assert!(table.select(&mut rng).is_err());
//! ```

pub mod percentile;
pub mod weighted;

pub use percentile::{PercentileRow, PercentileTable};
pub use weighted::{
    WeightedEntry, WeightedTable, DEFAULT_SCAN_CUTOFF, EXACT_SCAN_CUTOFF, MIN_WEIGHT,
};
