//! Shared value types: the error taxonomy and standard die sizes.

pub mod dice;
pub mod error;

pub use dice::DiceType;
pub use error::{RandomError, Result};
