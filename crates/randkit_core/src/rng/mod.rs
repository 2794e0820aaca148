//! # Random Number Generation Infrastructure
//!
//! This module provides the two lowest layers of the crate:
//!
//! - [`source`]: [`BitSource`], the uniform word generator (seeded, entropy
//!   seeded, or operating-system backed)
//! - [`generator`]: [`RandomGenerator`], which maps words onto bounded
//!   integers and floats without modulo bias
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: seeded sources replay the same sequence for the
//!   same call sequence
//! - **Explicit ownership**: generators are owned values handed to the
//!   components that need them; nothing is shared behind the caller's back
//! - **Interoperability**: both types implement `rand::RngCore`, so any
//!   `rand` or `rand_distr` consumer accepts them
//!
//! ## Usage Example
//!
//! ```rust
//! use randkit_core::rng::RandomGenerator;
//!
//! // Create a seeded generator for reproducible draws
//! let mut rng = RandomGenerator::seeded(12345);
//!
//! let roll = rng.int_inclusive(1, 20).unwrap();
//! let offset = rng.long_range(-1_000_000_000_000, 1_000_000_000_000).unwrap();
//! let unit = rng.double();
//!
//! assert!((1..=20).contains(&roll));
//! assert!(offset < 1_000_000_000_000);
//! assert!((0.0..1.0).contains(&unit));
//! ```

mod generator;
mod source;

// Public re-exports
pub use generator::{RandomGenerator, UNIT_INTERVAL_PRECISION};
pub use source::{BitSource, SourceKind};

pub(crate) use generator::check_bounds;
