//! Integration tests for module exports.
//!
//! Verify that all public modules and types are exported and reachable via
//! absolute paths.

/// Test that the rng module is accessible via absolute path.
#[test]
fn test_rng_module_exports() {
    use randkit_core::rng::BitSource;
    use randkit_core::rng::RandomGenerator;
    use randkit_core::rng::SourceKind;
    use randkit_core::rng::UNIT_INTERVAL_PRECISION;

    let source = BitSource::from_seed(1);
    assert_eq!(source.kind(), SourceKind::Seeded);

    let mut rng = RandomGenerator::new(source);
    assert!(rng.int_range(0, 10).unwrap() < 10);
    assert_eq!(UNIT_INTERVAL_PRECISION, 1_000_000_000);
}

/// Test that shaped distributions are accessible and usable through rand_distr.
#[test]
fn test_distributions_module_exports() {
    use rand_distr::Distribution;
    use randkit_core::distributions::{BoxMuller, IrwinHall, LogBias, TangentPeak};
    use randkit_core::distributions::{DEFAULT_LOG_BASE, MIN_LOG_BASE};
    use randkit_core::rng::RandomGenerator;

    let mut rng = RandomGenerator::seeded(5);
    let _ = IrwinHall::new(0.0, 1.0, 3).unwrap().sample(&mut rng);
    let _ = BoxMuller::standard().sample(&mut rng);
    let _ = LogBias::new(DEFAULT_LOG_BASE).unwrap().sample(&mut rng);
    let _ = TangentPeak::new(0.0, 1.0).unwrap().sample(&mut rng);
    assert!(MIN_LOG_BASE > 0.0);
}

/// Test that the tables module is accessible via absolute path.
#[test]
fn test_tables_module_exports() {
    use randkit_core::tables::percentile::PercentileTable;
    use randkit_core::tables::weighted::WeightedTable;
    use randkit_core::tables::{WeightedEntry, DEFAULT_SCAN_CUTOFF, EXACT_SCAN_CUTOFF};

    let mut table: WeightedTable<&str> = WeightedTable::new();
    table.add_entry("x", 1.0).unwrap();
    let lookup: PercentileTable = table.to_percentile_table(4u32).unwrap();
    assert!(lookup.is_complete());

    let entry = WeightedEntry { item: "y", weight: 2.0 };
    assert_eq!(entry.weight, 2.0);
    assert!(DEFAULT_SCAN_CUTOFF > EXACT_SCAN_CUTOFF);
}

/// Test that types and config are accessible via absolute path and the crate root.
#[test]
fn test_types_and_config_exports() {
    use randkit_core::config::{GeneratorConfig, TableConfig};
    use randkit_core::types::dice::DiceType;
    use randkit_core::types::error::RandomError;
    use randkit_core::{RandomGenerator, Result};

    fn build(seed: u64) -> Result<RandomGenerator> {
        GeneratorConfig::seeded(seed).build()
    }

    assert!(build(1).is_ok());
    assert_eq!(DiceType::D20.sides(), 20);
    assert_eq!(TableConfig::default().scan_cutoff, 1.0);
    assert_eq!(
        RandomError::EmptyTable,
        randkit_core::RandomError::EmptyTable
    );
}
