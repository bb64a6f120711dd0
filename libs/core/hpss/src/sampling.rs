// [libs/core/hpss/src/sampling.rs]
//! Sampling Engine: for each set index, selects `L`
//! strata by hash, ranks every candidate item with a set-specific
//! hash, and truncates to `M` distinct identifiers.

use tracing::{debug, trace};

use crate::cancel::CancellationToken;
use crate::error::CoreError;
use crate::feasibility::judge;
use crate::hash;
use crate::planner::{self, GenerationPlan};
use crate::universe::Universe;

/// Large prime decorrelating `(s, ℓ)` pairs when selecting strata for
/// set `s`. Part of the algorithm's public identity:
/// changing it changes every output.
const STRATUM_SEED_MULTIPLIER: i64 = 999_983;

/// Multiplier in the per-item ranking key.
const RANK_MULTIPLIER: i64 = 31;

/// Modulus in the per-item ranking key.
const RANK_MODULUS: i64 = 999_983;

/// A checkpoint is inserted between strata only for jobs whose depth
/// exceeds this, to keep large-`L` jobs responsive to cancellation.
const LARGE_DEPTH_CHECKPOINT_THRESHOLD: usize = 4;

/// One output set: `M` distinct identifiers, ascending, tagged with
/// the set index it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputSet {
    pub index: u64,
    pub items: Vec<i64>,
}

struct Candidate {
    id: i64,
    stratum: usize,
    rank: i64,
}

/// `p_{s,ℓ} = ((H(s·999983 + ℓ) mod K) + K) mod K` for `ℓ` in
/// `[0, L)`, generated in ascending `ℓ` order (the ordering
/// guarantee). Duplicates are tolerated and removed at finalization.
fn select_strata(s: u64, depth: usize, num_partitions: usize) -> Vec<usize> {
    (0..depth as i64)
        .map(|l| {
            let seed = (s as i64).wrapping_mul(STRATUM_SEED_MULTIPLIER).wrapping_add(l);
            hash::fold(seed, num_partitions as i64) as usize
        })
        .collect()
}

/// `rank(i, s) = H(i·31 + s) mod 999983`.
fn rank(id: i64, s: u64) -> i64 {
    let seed = id.wrapping_mul(RANK_MULTIPLIER).wrapping_add(s as i64);
    hash::fold(seed, RANK_MODULUS)
}

/// Runs the Feasibility Oracle, then — only if it passes — the
/// Sampling Engine, producing `N` sets in ascending set-index order.
/// Equivalent to `generate_cancellable` with a token that is never
/// cancelled.
pub fn generate<U: Universe>(n: u64, m: u64, t: f64, universe: &U) -> Result<Vec<OutputSet>, CoreError> {
    generate_cancellable(n, m, t, universe, &CancellationToken::new())
}

/// As [`generate`], but checks `cancel` between set indices and (for
/// depth `> 4`) between strata, returning `CoreError::Cancelled` and
/// discarding any partial output the moment it is observed.
pub fn generate_cancellable<U: Universe>(
    n: u64,
    m: u64,
    t: f64,
    universe: &U,
    cancel: &CancellationToken,
) -> Result<Vec<OutputSet>, CoreError> {
    let plan = planner::plan(n, m, t)?;

    let total_icons = universe
        .size()
        .map_err(|e| CoreError::UniverseUnavailable(Box::new(e)))?;

    let verdict = judge(&plan, total_icons);
    if !verdict.feasible {
        return Err(CoreError::infeasible(verdict));
    }

    debug!(
        num_sets = n,
        items_per_set = m,
        depth = plan.depth,
        required_pool = plan.required_pool,
        total_icons,
        "feasibility check passed, starting sampling"
    );

    let mut sets = Vec::with_capacity(n as usize);
    for s in 0..n {
        if cancel.is_cancelled() {
            return Err(CoreError::Cancelled);
        }
        sets.push(sample_one_set(s, &plan, universe, cancel)?);
    }

    Ok(sets)
}

fn sample_one_set<U: Universe>(
    s: u64,
    plan: &GenerationPlan,
    universe: &U,
    cancel: &CancellationToken,
) -> Result<OutputSet, CoreError> {
    let strata = select_strata(s, plan.depth, crate::stratum::K);

    let mut candidates = Vec::new();
    for (l, &p) in strata.iter().enumerate() {
        if plan.depth > LARGE_DEPTH_CHECKPOINT_THRESHOLD && l > 0 && cancel.is_cancelled() {
            return Err(CoreError::Cancelled);
        }
        let items = universe
            .enumerate_stratum(p)
            .map_err(|e| CoreError::UniverseUnavailable(Box::new(e)))?;
        for id in items {
            candidates.push(Candidate { id, stratum: p, rank: rank(id, s) });
        }
    }

    // Pre-truncation: keep the 2M items of lowest rank, ties broken by
    // ascending identifier, then ascending originating stratum.
    candidates.sort_unstable_by(|a, b| {
        a.rank.cmp(&b.rank).then(a.id.cmp(&b.id)).then(a.stratum.cmp(&b.stratum))
    });
    let pre_truncation_limit = (2 * plan.items_per_set) as usize;
    candidates.truncate(pre_truncation_limit);

    // Finalisation: dedupe by identifier, sort ascending, take M.
    let mut items: Vec<i64> = candidates.into_iter().map(|c| c.id).collect();
    items.sort_unstable();
    items.dedup();

    let need = plan.items_per_set as usize;
    if items.len() < need {
        return Err(CoreError::Shortfall { set_index: s, have: items.len(), need });
    }
    items.truncate(need);

    trace!(set_index = s, strata = ?strata, "sampled set");
    Ok(OutputSet { index: s, items })
}
