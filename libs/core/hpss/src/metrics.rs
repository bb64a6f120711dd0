// [libs/core/hpss/src/metrics.rs]
//! Small helpers for computing aggregate pairwise statistics.
//! Not part of the core algorithm — useful to tests, the CLI's
//! sampled aggregate statistics, and anyone auditing output offline.

use crate::sampling::OutputSet;

/// `|A∩B| / |A∪B|` for two output sets. Both sets are assumed sorted
/// ascending with no internal duplicates (I1), so this runs in
/// `O(|A| + |B|)` via a merge-style walk instead of building hash
/// sets.
pub fn jaccard(a: &OutputSet, b: &OutputSet) -> f64 {
    let (mut i, mut j) = (0usize, 0usize);
    let mut intersection = 0usize;
    let mut union = 0usize;

    while i < a.items.len() && j < b.items.len() {
        match a.items[i].cmp(&b.items[j]) {
            std::cmp::Ordering::Equal => {
                intersection += 1;
                union += 1;
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                union += 1;
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                union += 1;
                j += 1;
            }
        }
    }
    union += (a.items.len() - i) + (b.items.len() - j);

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// The maximum and mean Jaccard similarity over every pair in `sets`.
/// `O(n^2)` — fine for small exhaustive scenarios, but
/// callers with large `N` should sample pairs instead (see
/// `hpss-cli`'s sampled statistics).
pub fn exhaustive_pairwise_stats(sets: &[OutputSet]) -> (f64, f64) {
    let mut max_j = 0.0_f64;
    let mut sum_j = 0.0_f64;
    let mut pairs = 0usize;
    for i in 0..sets.len() {
        for j in (i + 1)..sets.len() {
            let j_val = jaccard(&sets[i], &sets[j]);
            max_j = max_j.max(j_val);
            sum_j += j_val;
            pairs += 1;
        }
    }
    let avg = if pairs == 0 { 0.0 } else { sum_j / pairs as f64 };
    (max_j, avg)
}
