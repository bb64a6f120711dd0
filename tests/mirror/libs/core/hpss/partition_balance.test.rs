// [tests/mirror/libs/core/hpss/partition_balance.test.rs]
//! The multiset of strata assigned to a large universe
//! should be approximately uniform over `[0, K)`.

use hpss_core::stratum::{stratum, K};

#[test]
fn chi_squared_deviation_is_small_for_a_healthy_hash() {
    const UNIVERSE_SIZE: i64 = 200_000;
    let mut counts = vec![0u64; K];
    for id in 1..=UNIVERSE_SIZE {
        counts[stratum(id)] += 1;
    }

    let expected = UNIVERSE_SIZE as f64 / K as f64;
    let chi_squared: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // With 127 degrees of freedom, the 99.9th percentile of the
    // chi-squared distribution is well under 200; a healthy 64-bit
    // mix distributing 200k items over 128 buckets should land far
    // below that. This is a coarse health check, not a statistical
    // certification.
    assert!(
        chi_squared < 200.0,
        "chi-squared statistic {chi_squared} suggests an unhealthy partition hash"
    );

    for (p, &observed) in counts.iter().enumerate() {
        assert!(observed > 0, "stratum {p} received no items at all");
    }
}

#[test]
fn negative_and_extreme_identifiers_still_partition_evenly_enough() {
    let mut counts = vec![0u64; K];
    for id in -100_000..100_000_i64 {
        counts[stratum(id)] += 1;
    }
    let expected = 200_000.0 / K as f64;
    let max_deviation_ratio = counts
        .iter()
        .map(|&c| ((c as f64 - expected).abs()) / expected)
        .fold(0.0_f64, f64::max);
    assert!(
        max_deviation_ratio < 0.25,
        "stratum counts deviate from uniform by more than 25%: {max_deviation_ratio}"
    );
}
