// [apps/hpss-cli/src/envelope.rs]
//! The response envelope the surrounding service would hand back to a
//! caller. Not part of the core API — `hpss-core` knows
//! nothing about request IDs, execution time, or JSON.

use hpss_core::{OutputSet, Verdict};
use rand::seq::index::sample;
use rand::thread_rng;
use serde::Serialize;

/// Above this many sets, aggregate Jaccard statistics are computed
/// over a bounded random sample of pairs instead of the full N² scan
/// (aggregate statistics may be approximated by
/// sampling pairs").
const EXHAUSTIVE_PAIR_LIMIT: usize = 500;

/// Number of pairs sampled when the exhaustive scan would be too
/// large.
const SAMPLED_PAIR_COUNT: usize = 20_000;

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub request_id: String,
    pub execution_time_ms: u128,
    pub items_per_set: u64,
    pub total_sets: u64,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<OutputSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_jaccard_sampled: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_jaccard_sampled: Option<f64>,
}

impl ResponseEnvelope {
    pub fn infeasible(request_id: String, execution_time_ms: u128, items_per_set: u64, total_sets: u64, verdict: Verdict) -> Self {
        Self {
            request_id,
            execution_time_ms,
            items_per_set,
            total_sets,
            verdict,
            sets: None,
            max_jaccard_sampled: None,
            avg_jaccard_sampled: None,
        }
    }

    pub fn generated(
        request_id: String,
        execution_time_ms: u128,
        items_per_set: u64,
        total_sets: u64,
        verdict: Verdict,
        sets: Vec<OutputSet>,
        include_sets: bool,
    ) -> Self {
        let (max_jaccard_sampled, avg_jaccard_sampled) = sampled_pairwise_stats(&sets);
        Self {
            request_id,
            execution_time_ms,
            items_per_set,
            total_sets,
            verdict,
            sets: if include_sets { Some(sets) } else { None },
            max_jaccard_sampled: Some(max_jaccard_sampled),
            avg_jaccard_sampled: Some(avg_jaccard_sampled),
        }
    }
}

/// Aggregate Jaccard statistics, computed exhaustively for small
/// batches and over a bounded random sample of pairs for large ones.
fn sampled_pairwise_stats(sets: &[OutputSet]) -> (f64, f64) {
    let n = sets.len();
    if n < 2 {
        return (0.0, 0.0);
    }
    let total_pairs = n * (n - 1) / 2;

    if total_pairs <= EXHAUSTIVE_PAIR_LIMIT {
        return hpss_core::metrics::exhaustive_pairwise_stats(sets);
    }

    let mut rng = thread_rng();
    let draws = sample(&mut rng, total_pairs, SAMPLED_PAIR_COUNT.min(total_pairs));
    let mut max_j = 0.0_f64;
    let mut sum_j = 0.0_f64;
    for linear_index in draws.iter() {
        let (i, j) = unrank_pair(n, linear_index);
        let j_val = hpss_core::metrics::jaccard(&sets[i], &sets[j]);
        max_j = max_j.max(j_val);
        sum_j += j_val;
    }
    let avg = sum_j / SAMPLED_PAIR_COUNT.min(total_pairs) as f64;
    (max_j, avg)
}

/// Maps a linear index in `0..n*(n-1)/2` back to the `(i, j)` pair it
/// represents in the upper triangle of an `n x n` matrix, `i < j`.
fn unrank_pair(n: usize, mut linear_index: usize) -> (usize, usize) {
    let mut i = 0;
    loop {
        let row_len = n - 1 - i;
        if linear_index < row_len {
            return (i, i + 1 + linear_index);
        }
        linear_index -= row_len;
        i += 1;
    }
}
