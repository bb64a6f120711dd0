// [tests/mirror/libs/core/hpss/properties.test.rs]
//! Property-based tests for the core correctness properties, generated over random
//! `(N, M, T)` within a feasibility envelope for a fixed canonical
//! universe.

use hpss_core::metrics::jaccard;
use hpss_core::{generate, InMemoryUniverse};
use proptest::prelude::*;

fn canonical_universe() -> InMemoryUniverse {
    InMemoryUniverse::sequential(100_000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn p1_p2_p5_hold_for_feasible_batches(
        n in 1u64..40,
        m in 2u64..30,
        t in 0.05f64..0.9,
    ) {
        let universe = canonical_universe();
        if let Ok(sets) = generate(n, m, t, &universe) {
            // P1: every set has exactly M items.
            for set in &sets {
                prop_assert_eq!(set.items.len() as u64, m);
                // P2: no duplicates within a set.
                let mut sorted = set.items.clone();
                sorted.sort_unstable();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), set.items.len());
                // P5 (within-set): ascending identifiers.
                prop_assert!(set.items.windows(2).all(|w| w[0] < w[1]));
            }
            // P5 (across-set): ascending set index.
            for (i, set) in sets.iter().enumerate() {
                prop_assert_eq!(set.index, i as u64);
            }
        }
    }

    #[test]
    fn p3_pairwise_jaccard_never_exceeds_threshold(
        n in 2u64..30,
        m in 2u64..20,
        t in 0.05f64..0.5,
    ) {
        let universe = canonical_universe();
        if let Ok(sets) = generate(n, m, t, &universe) {
            // Sample O(N) random pairs rather than the full N^2 scan
            // when N is large; here N is small enough to go exhaustive.
            for i in 0..sets.len() {
                for j in (i + 1)..sets.len() {
                    let j_val = jaccard(&sets[i], &sets[j]);
                    prop_assert!(
                        j_val <= t + 1e-9,
                        "J(set {i}, set {j}) = {j_val} exceeds T = {t}"
                    );
                }
            }
        }
    }

    #[test]
    fn p4_determinism_holds_for_any_feasible_batch(
        n in 1u64..25,
        m in 2u64..20,
        t in 0.05f64..0.9,
    ) {
        let universe = canonical_universe();
        let a = generate(n, m, t, &universe);
        let b = generate(n, m, t, &universe);
        match (a, b) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "one call succeeded and the other failed"),
        }
    }
}
