//! Generator and table configuration.
//!
//! Plain serde structures so that hosts can embed them in their own
//! configuration files. Nothing here reads files or the environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::{BitSource, RandomGenerator, SourceKind};
use crate::tables::{WeightedTable, DEFAULT_SCAN_CUTOFF};
use crate::types::{RandomError, Result};

/// Which bit source a generator is built on.
///
/// # Examples
///
/// ```rust
/// use randkit_core::config::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_json::from_str(r#"{"source": "seeded", "seed": 42}"#).unwrap();
/// let mut a = config.build().unwrap();
/// let mut b = config.build().unwrap();
/// assert_eq!(a.int(), b.int());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Bit source kind
    pub source: SourceKind,
    /// Seed for `source = seeded`; ignored otherwise
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Deterministic configuration for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: SourceKind::Seeded,
            seed: Some(seed),
        }
    }

    /// Builds an owned generator.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `source` is `seeded` but
    /// no seed is set.
    pub fn build(&self) -> Result<RandomGenerator> {
        let source = match (self.source, self.seed) {
            (SourceKind::Seeded, Some(seed)) => BitSource::from_seed(seed),
            (SourceKind::Seeded, None) => {
                return Err(RandomError::invalid("a seeded source requires a seed"));
            }
            (SourceKind::Entropy, seed) => {
                if seed.is_some() {
                    debug!("seed ignored for entropy source");
                }
                BitSource::from_entropy()
            }
            (SourceKind::Os, _) => BitSource::os(),
        };
        Ok(RandomGenerator::new(source))
    }
}

/// Weighted-table tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Remainder below which the selection scan stops
    pub scan_cutoff: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            scan_cutoff: DEFAULT_SCAN_CUTOFF,
        }
    }
}

impl TableConfig {
    /// Creates an empty table using this configuration.
    ///
    /// # Errors
    ///
    /// See [`WeightedTable::with_scan_cutoff`].
    pub fn table<T>(&self) -> Result<WeightedTable<T>> {
        WeightedTable::new().with_scan_cutoff(self.scan_cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::EXACT_SCAN_CUTOFF;

    #[test]
    fn test_default_is_entropy() {
        let config = GeneratorConfig::default();
        assert_eq!(config.source, SourceKind::Entropy);
        assert_eq!(config.seed, None);
        let rng = config.build().unwrap();
        assert!(!rng.source().is_deterministic());
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let config = GeneratorConfig::seeded(99);
        let mut a = config.build().unwrap();
        let mut b = config.build().unwrap();
        assert_eq!(a.seed(), Some(99));
        for _ in 0..16 {
            assert_eq!(a.long(), b.long());
        }
    }

    #[test]
    fn test_seeded_without_seed_fails() {
        let config = GeneratorConfig {
            source: SourceKind::Seeded,
            seed: None,
        };
        assert!(matches!(config.build(), Err(RandomError::InvalidArgument(_))));
    }

    #[test]
    fn test_os_source_builds() {
        let config = GeneratorConfig {
            source: SourceKind::Os,
            seed: Some(5),
        };
        let rng = config.build().unwrap();
        assert_eq!(rng.source().kind(), SourceKind::Os);
        assert_eq!(rng.seed(), None);
    }

    #[test]
    fn test_deserialise_partial() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.source, SourceKind::Entropy);
        assert_eq!(config.seed, Some(3));

        let table: TableConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(table.scan_cutoff, DEFAULT_SCAN_CUTOFF);
    }

    #[test]
    fn test_table_config() {
        let config = TableConfig {
            scan_cutoff: EXACT_SCAN_CUTOFF,
        };
        let table: WeightedTable<u8> = config.table().unwrap();
        assert_eq!(table.scan_cutoff(), EXACT_SCAN_CUTOFF);

        let bad = TableConfig { scan_cutoff: -1.0 };
        assert!(bad.table::<u8>().is_err());
    }
}
