//! # randkit_core: Bias-Free Random Value Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! randkit_core is the bottom layer of the workspace, providing:
//! - Uniform bit sources: `BitSource` (`rng::source`)
//! - Bounded integer and floating-point draws: `RandomGenerator` (`rng`)
//! - Shaped distributions: Irwin-Hall, Box-Muller, logarithmic bias and
//!   tangent peak (`distributions`)
//! - Weighted selection tables and percentile conversion (`tables`)
//! - Dice scales and error types: `DiceType`, `RandomError` (`types`)
//! - Generator and table configuration (`config`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other randkit_* crates:
//! - rand / rand_distr: bit sources and the `Distribution` trait
//! - num-traits: generic float bound checks
//! - thiserror: error derives
//! - serde: configuration and table entry serialisation
//! - tracing: diagnostic events (no subscriber is installed here)
//!
//! ## Usage Examples
//!
//! ```rust
//! use randkit_core::rng::RandomGenerator;
//! use randkit_core::tables::WeightedTable;
//! use randkit_core::types::DiceType;
//!
//! let mut rng = RandomGenerator::seeded(2024);
//!
//! // Bounded draws
//! let d20 = rng.int_inclusive(1, 20).unwrap();
//! assert!((1..=20).contains(&d20));
//!
//! // Shaped draws
//! let height = rng.normal(150.0, 200.0, 6).unwrap();
//! assert!((150.0..=200.0).contains(&height));
//!
//! // Weighted selection and its printed form
//! let mut loot = WeightedTable::from_entries([("coins", 70.0), ("gem", 25.0), ("relic", 5.0)]).unwrap();
//! let drop = *loot.select(&mut rng).unwrap();
//! let printed = loot.to_percentile_table(DiceType::D100).unwrap();
//! assert_eq!(printed.rows().len(), 3);
//! # let _ = drop;
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod distributions;
pub mod rng;
pub mod tables;
pub mod types;

pub use rng::{BitSource, RandomGenerator};
pub use types::{DiceType, RandomError, Result};
