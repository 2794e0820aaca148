//! Statistical properties of the public API.
//!
//! These tests drive the generator through the crate's public surface only,
//! with fixed seeds so that every run sees the same sample.

use randkit_core::rng::RandomGenerator;
use randkit_core::tables::{WeightedTable, EXACT_SCAN_CUTOFF};
use randkit_core::types::DiceType;

const DRAWS: usize = 20_000;

// ============================================================================
// Bounded integers
// ============================================================================

/// Half-open draws reach both `min` and `max - 1` and nothing else.
#[test]
fn test_int_range_hits_both_ends() {
    let mut rng = RandomGenerator::seeded(101);
    for (min, max) in [(0, 2), (-5, 5), (1, 7), (-1000, -990)] {
        let draws: Vec<i32> = (0..DRAWS).map(|_| rng.int_range(min, max).unwrap()).collect();
        assert_eq!(*draws.iter().min().unwrap(), min);
        assert_eq!(*draws.iter().max().unwrap(), max - 1);
    }
}

/// Inclusive draws reach both `min` and `max`.
#[test]
fn test_int_inclusive_hits_both_ends() {
    let mut rng = RandomGenerator::seeded(102);
    for die in DiceType::ALL.iter().take(8) {
        let sides = die.sides() as i32;
        let draws: Vec<i32> = (0..DRAWS)
            .map(|_| rng.int_inclusive(1, sides).unwrap())
            .collect();
        assert_eq!(*draws.iter().min().unwrap(), 1);
        assert_eq!(*draws.iter().max().unwrap(), sides);
    }
}

/// Ranges wider than 32 bits that do not divide 2^64 stay in bounds.
#[test]
fn test_long_range_wide_and_uneven() {
    let mut rng = RandomGenerator::seeded(103);
    let min = -7_000_000_000_003_i64;
    let max = 9_000_000_000_011_i64;
    for _ in 0..DRAWS {
        let v = rng.long_range(min, max).unwrap();
        assert!(v >= min && v < max, "{} outside [{}, {})", v, min, max);
    }
}

/// A d6 is uniform to within a chi-squared bound (5 dof, p = 0.001: 20.52).
#[test]
fn test_d6_uniformity() {
    let mut rng = RandomGenerator::seeded(104);
    let mut counts = [0usize; 6];
    let n = 60_000;
    for _ in 0..n {
        counts[(rng.int_inclusive(1, 6).unwrap() - 1) as usize] += 1;
    }
    let expected = n as f64 / 6.0;
    let chi_squared: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi_squared < 20.52, "chi-squared {:.2}: {:?}", chi_squared, counts);
}

// ============================================================================
// Reproducibility
// ============================================================================

/// Identical seeds and call sequences give byte-identical output.
#[test]
fn test_same_seed_same_sequence() {
    let script = |rng: &mut RandomGenerator| -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(rng.int_range(-50, 50).unwrap().to_le_bytes());
        out.extend(rng.double().to_le_bytes());
        out.extend(rng.normal(0.0, 1.0, 4).unwrap().to_le_bytes());
        out.extend(rng.byte_array(16).unwrap());
        out.extend(rng.gaussian(0.0, 1.0).unwrap().to_le_bytes());
        out.extend(rng.long().to_le_bytes());
        out
    };

    let mut a = RandomGenerator::seeded(0xDEAD_BEEF);
    let mut b = RandomGenerator::seeded(0xDEAD_BEEF);
    let mut c = RandomGenerator::seeded(0xDEAD_BEEF + 1);

    let first = script(&mut a);
    assert_eq!(first, script(&mut b));
    assert_ne!(first, script(&mut c));
}

/// A seeded table draw replays exactly.
#[test]
fn test_seeded_table_draws_replay() {
    let run = |seed: u64| -> Vec<&'static str> {
        let mut rng = RandomGenerator::seeded(seed);
        let mut table =
            WeightedTable::from_entries([("a", 5.0), ("b", 3.0), ("c", 1.5), ("d", 0.5)]).unwrap();
        let mut out = Vec::new();
        while !table.is_empty() {
            out.push(table.take(&mut rng).unwrap());
        }
        out
    };
    assert_eq!(run(77), run(77));
}

// ============================================================================
// Weighted tables
// ============================================================================

/// Draw-with-removal performs one selection per entry and ends at zero weight.
#[test]
fn test_concrete_removal_scenario() {
    let mut rng = RandomGenerator::seeded(105);
    let mut table =
        WeightedTable::from_entries([("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0)]).unwrap();
    assert_eq!(table.total_weight(), 10.0);

    let mut selections = 0;
    while !table.is_empty() {
        table.select_random_item(&mut rng, true).unwrap();
        selections += 1;
    }
    assert_eq!(selections, 4);
    assert_eq!(table.total_weight(), 0.0);
}

/// Exact-cutoff selection frequencies follow the weights.
#[test]
fn test_weighted_frequencies_follow_weights() {
    let mut rng = RandomGenerator::seeded(106);
    let mut table = WeightedTable::new().with_scan_cutoff(EXACT_SCAN_CUTOFF).unwrap();
    for (item, weight) in [(0usize, 1.0), (1, 2.0), (2, 3.0), (3, 4.0)] {
        table.add_entry(item, weight).unwrap();
    }

    let n = 50_000;
    let mut counts = [0usize; 4];
    for _ in 0..n {
        counts[*table.select(&mut rng).unwrap()] += 1;
    }
    for (i, &count) in counts.iter().enumerate() {
        let share = count as f64 / n as f64;
        let expected = (i + 1) as f64 / 10.0;
        assert!((share - expected).abs() < 0.01, "entry {}: {} vs {}", i, share, expected);
    }
}

/// Weights that sum to the scale cover every face exactly once.
#[test]
fn test_percentile_rows_are_contiguous() {
    let mut table = WeightedTable::from_entries([
        ("w", 40.0),
        ("x", 30.0),
        ("y", 20.0),
        ("z", 10.0),
    ])
    .unwrap();
    let lookup = table.to_percentile_table(DiceType::D100).unwrap();

    let mut next = 1;
    for row in lookup.rows() {
        assert_eq!(row.lower, next);
        assert!(row.upper >= row.lower);
        next = row.upper + 1;
    }
    assert_eq!(next, 101);
    assert!(lookup.is_complete());
}

// ============================================================================
// Shaped distributions
// ============================================================================

/// Ten rolls over [0, 100] average 50 and cluster more tightly than one.
#[test]
fn test_irwin_hall_concentration() {
    let mut rng = RandomGenerator::seeded(107);
    let n = 10_000;
    let shaped: Vec<f64> = (0..n).map(|_| rng.normal(0.0, 100.0, 10).unwrap()).collect();
    let mean = shaped.iter().sum::<f64>() / n as f64;
    assert!((mean - 50.0).abs() < 1.5, "mean {}", mean);

    let central = shaped.iter().filter(|x| (25.0..75.0).contains(*x)).count() as f64 / n as f64;
    // A single uniform roll lands in the central half 50% of the time.
    assert!(central > 0.9, "central share {}", central);
}
