//! Selector Equivalence Tests
//!
//! Toyota Way: Jidoka (built-in quality)
//! Ensures partition == heap == full sort for top-decile selection, and
//! streaming == full sort for top-K selection.
//!
//! References:
//! - Property-based testing: Claessen & Hughes (2000) QuickCheck
//!
//! ## Test Strategy
//!
//! 1. **Differential Tests**: quickcheck generates random populations, every
//!    selector must agree with the naive full-sort baseline
//! 2. **Edge Cases**: empty input, all-equal levels, extreme values

use quickcheck::{QuickCheck, TestResult};
use trueno_rank::offline::{heap_rank, heap_top_k, partition_top_k, quickselect_rank};
use trueno_rank::online::rank_incoming;
use trueno_rank::source::VecSource;
use trueno_rank::{Player, Ranked};

/// Reference implementation: full sort, keep the tail
fn baseline_top_k(levels: &[i64], k: usize) -> Vec<i64> {
    let mut sorted = levels.to_vec();
    sorted.sort_unstable();
    let k = k.min(sorted.len());
    sorted.split_off(sorted.len() - k)
}

fn decile_equivalence(levels: Vec<i64>) -> bool {
    let k = levels.len().div_ceil(10);
    let expected = baseline_top_k(&levels, k);

    let partition = quickselect_rank(&mut levels.clone());
    let heap = heap_rank(&mut levels.clone());

    partition.top() == expected.as_slice() && heap.top() == expected.as_slice()
}

fn top_k_equivalence(levels: Vec<i64>, k: u8) -> bool {
    let k = usize::from(k);
    let expected = baseline_top_k(&levels, k);

    partition_top_k(&mut levels.clone(), k) == expected
        && heap_top_k(&mut levels.clone(), k) == expected
}

fn streaming_equivalence(levels: Vec<i64>, interval: u8) -> TestResult {
    if interval == 0 {
        return TestResult::discard();
    }
    let interval = usize::from(interval);
    let expected = baseline_top_k(&levels, interval);

    match rank_incoming(&mut VecSource::new(levels), interval) {
        Ok(result) => TestResult::from_bool(result.top() == expected.as_slice()),
        Err(e) => TestResult::error(e.to_string()),
    }
}

#[test]
fn quickcheck_decile_selectors_agree() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(decile_equivalence as fn(Vec<i64>) -> bool);
}

#[test]
fn quickcheck_top_k_selectors_agree() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(top_k_equivalence as fn(Vec<i64>, u8) -> bool);
}

#[test]
fn quickcheck_streaming_agrees_with_baseline() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(streaming_equivalence as fn(Vec<i64>, u8) -> TestResult);
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_input_all_selectors() {
        let mut empty: Vec<i64> = Vec::new();
        assert!(quickselect_rank(&mut empty).is_empty());
        assert!(heap_rank(&mut empty).is_empty());

        let result = rank_incoming(&mut VecSource::new(empty), 10).unwrap();
        assert!(result.is_empty());
        assert!(result.cutoffs().is_empty());
    }

    #[test]
    fn test_all_equal_levels() {
        let levels = vec![7i64; 55];
        assert_eq!(quickselect_rank(&mut levels.clone()).levels(), vec![7; 6]);
        assert_eq!(heap_rank(&mut levels.clone()).levels(), vec![7; 6]);

        let result = rank_incoming(&mut VecSource::new(levels), 5).unwrap();
        assert_eq!(result.levels(), vec![7; 5]);
        assert!(result.cutoffs().values().all(|&cutoff| cutoff == 7));
    }

    #[test]
    fn test_extreme_levels() {
        let levels = vec![i64::MIN, i64::MAX, 0, -1, 1, i64::MAX, i64::MIN];
        let expected = vec![i64::MAX];
        assert_eq!(quickselect_rank(&mut levels.clone()).levels(), expected);
        assert_eq!(heap_rank(&mut levels.clone()).levels(), expected);

        let result = rank_incoming(&mut VecSource::new(levels), 3).unwrap();
        assert_eq!(result.levels(), vec![1, i64::MAX, i64::MAX]);
    }

    #[test]
    fn test_players_same_levels_across_selectors() {
        let players: Vec<Player> = (0..1_000u32)
            .map(|i| Player::new(format!("Player_{i:04}"), (i * 7919) % 250))
            .collect();

        let partition = quickselect_rank(&mut players.clone());
        let heap = heap_rank(&mut players.clone());

        // Ties may pick different players, levels must match
        assert_eq!(partition.levels(), heap.levels());
        assert_eq!(partition.len(), 100);
        assert!(partition.top().iter().all(|p| p.level() >= partition.top()[0].level()));
    }
}
