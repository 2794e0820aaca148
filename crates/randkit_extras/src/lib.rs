//! # randkit_extras: Collaborators over randkit_core
//!
//! ## Layer 2 Role
//!
//! randkit_extras builds the everyday conveniences on top of the Layer 1
//! generator. Nothing here adds new distribution maths; every value comes
//! from a [`RandomGenerator`](randkit_core::RandomGenerator) call.
//!
//! - [`shuffle`]: Fisher-Yates shuffles (seeded or OS-backed), index
//!   permutations, picking values from collections
//! - [`text`]: ASCII, charset, Unicode and placeholder-sentence strings
//! - [`colour`]: hex colour strings, optionally jittered around a base colour
//! - [`time`]: random `chrono` date-times and times of day
//! - [`dice`]: die rolls and `NdS+B` dice formulas
//! - [`registry`]: explicit primitive-kind registry for populating caller
//!   types through a [`Randomise`] visitor
//!
//! ## Usage Examples
//!
//! ```rust
//! use randkit_core::RandomGenerator;
//! use randkit_extras::dice::DiceFormula;
//! use randkit_extras::{colour, shuffle, text};
//!
//! let mut rng = RandomGenerator::seeded(9);
//!
//! let mut deck: Vec<u32> = (1..=52).collect();
//! shuffle::shuffle(&mut deck, &mut rng);
//!
//! let name = text::string(&mut rng, 8);
//! let tint = colour::rgb_colour_string(&mut rng);
//! let damage: DiceFormula = "2d6+3".parse().unwrap();
//! let hit = damage.roll(&mut rng).unwrap();
//!
//! assert_eq!(name.len(), 8);
//! assert_eq!(tint.len(), 7);
//! assert!((5..=15).contains(&hit));
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod colour;
pub mod dice;
pub mod error;
pub mod registry;
pub mod shuffle;
pub mod text;
pub mod time;

pub use error::{ExtrasError, Result};
pub use registry::{Filler, Primitive, PrimitiveKind, RandomValue, Randomise, ValueRegistry};
