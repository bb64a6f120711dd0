// [tests/mirror/libs/core/hpss/end_to_end.test.rs]
//! Concrete end-to-end scenarios, each run against
//! the canonical universe of 100,000 sequential identifiers.

use hpss_core::metrics::exhaustive_pairwise_stats;
use hpss_core::{generate, CoreError, InMemoryUniverse, Universe};

fn canonical_universe() -> InMemoryUniverse {
    InMemoryUniverse::sequential(100_000)
}

#[test]
fn scenario_1_five_sets_of_ten_at_low_threshold() {
    let universe = canonical_universe();
    let sets = generate(5, 10, 0.10, &universe).unwrap();
    assert_eq!(sets.len(), 5);
    for set in &sets {
        assert_eq!(set.items.len(), 10);
    }
    let (max_j, _avg) = exhaustive_pairwise_stats(&sets);
    assert!(max_j <= 0.10, "max Jaccard {max_j} exceeds 0.10");
}

#[test]
fn scenario_2_full_pairwise_scan_over_one_hundred_sets() {
    let universe = canonical_universe();
    let sets = generate(100, 20, 0.10, &universe).unwrap();
    assert_eq!(sets.len(), 100);
    let (max_j, _avg) = exhaustive_pairwise_stats(&sets);
    assert!(max_j <= 0.10, "max Jaccard {max_j} exceeds 0.10 over 4,950 pairs");
}

#[test]
fn scenario_3_tight_threshold_reports_depth_at_least_three() {
    let universe = canonical_universe();
    let verdict = hpss_core::feasibility(20, 15, 0.05, universe.size().unwrap()).unwrap();
    assert!(verdict.partitions_per_set >= 3);
    let sets = generate(20, 15, 0.05, &universe).unwrap();
    let (max_j, _avg) = exhaustive_pairwise_stats(&sets);
    assert!(max_j <= 0.05, "max Jaccard {max_j} exceeds 0.05");
}

#[test]
fn scenario_4_repeated_calls_are_byte_identical() {
    let universe = canonical_universe();
    let first = generate(10, 15, 0.15, &universe).unwrap();
    let second = generate(10, 15, 0.15, &universe).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scenario_5_zero_threshold_is_fully_disjoint() {
    let universe = canonical_universe();
    let sets = generate(5, 10, 0.0, &universe).unwrap();
    let (max_j, avg_j) = exhaustive_pairwise_stats(&sets);
    assert_eq!(max_j, 0.0);
    assert_eq!(avg_j, 0.0);
}

#[test]
fn scenario_6_infeasible_batch_never_samples() {
    let universe = canonical_universe();
    let err = generate(1_000, 100, 0.01, &universe).unwrap_err();
    match err {
        CoreError::Infeasible(verdict) => {
            assert!(verdict.required_pool > verdict.total_icons);
        }
        other => panic!("expected Infeasible, got {other:?}"),
    }
}

#[test]
fn scenario_7_naively_aliased_indices_still_respect_the_bound() {
    let universe = canonical_universe();
    let sets = generate(50, 30, 0.10, &universe).unwrap();
    // Indices that would collide under a naive `ℓ mod K` stratum
    // assignment must still show low pairwise overlap once the
    // hash-mixed stratum selection is in play.
    let watch = [0usize, 16, 32, 48];
    for &i in &watch {
        for &j in &watch {
            if i >= j {
                continue;
            }
            let jac = hpss_core::metrics::jaccard(&sets[i], &sets[j]);
            assert!(jac <= 0.10, "sets {i} and {j} violate the bound: J={jac}");
        }
    }
}
