// [libs/core/hpss/src/planner.rs]
//! Parameter Planner: turns `(N, M, T)` into a
//! [`GenerationPlan`] — the stratification depth, required pool, and
//! combinatorial capacity the Sampling Engine and Feasibility Oracle
//! both read from.

use thiserror::Error;

use crate::stratum::K;

/// Errors the planner can raise on its own, independent of the
/// universe it will eventually be checked against.
#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    #[error("numSets must be >= 1, got {0}")]
    InvalidNumSets(u64),
    #[error("itemsPerSet must be >= 1, got {0}")]
    InvalidItemsPerSet(u64),
    #[error("overlapThreshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error(
        "stratification depth {computed} falls outside the supported range [1, 8] \
         (bounded above by min(K, itemsPerSet) = {structural_bound})"
    )]
    DepthOutOfRange { computed: i64, structural_bound: i64 },
}

/// Everything the Sampling Engine and Feasibility Oracle derive from
/// `(N, M, T)`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationPlan {
    pub num_sets: u64,
    pub items_per_set: u64,
    pub threshold: f64,
    /// `o`: the maximum permissible pairwise intersection.
    pub max_overlap: u64,
    /// `L`: the stratification depth.
    pub depth: usize,
    /// `P*`: the minimum universe size the plan requires.
    pub required_pool: u64,
    /// `C(K, L)`, the number of distinct L-combinations of strata.
    pub available_combinations: u64,
    /// `⌈N / 0.9⌉`, the number of combinations the batch is expected
    /// to need before collisions become likely.
    pub required_combinations: u64,
}

/// `C(K, L)` for `L` in `1..=8`, computed exactly with the product
/// form `K·(K-1)·…·(K-L+1) / L!`. `K` fits in `u128` intermediates
/// comfortably; the final value (max ~1.4×10¹³ at K=128, L=8) fits in
/// `u64`.
fn combinations(k: usize, l: usize) -> u64 {
    if l == 0 {
        return 1;
    }
    if l == 1 {
        return k as u64;
    }
    let mut numerator: u128 = 1;
    for i in 0..l {
        numerator *= (k - i) as u128;
    }
    let mut factorial: u128 = 1;
    for i in 1..=l {
        factorial *= i as u128;
    }
    (numerator / factorial) as u64
}

/// Baseline collision-avoidance floor from the birthday-paradox table
/// below.
fn collision_floor(n: u64) -> usize {
    match n {
        0..=80 => 3,
        81..=460 => 4,
        461..=2_200 => 5,
        _ => 6,
    }
}

fn validate(n: u64, m: u64, t: f64) -> Result<(), PlannerError> {
    if n < 1 {
        return Err(PlannerError::InvalidNumSets(n));
    }
    if m < 1 {
        return Err(PlannerError::InvalidItemsPerSet(m));
    }
    if !(0.0..=1.0).contains(&t) || t.is_nan() {
        return Err(PlannerError::InvalidThreshold(t));
    }
    Ok(())
}

/// Computes the [`GenerationPlan`] for `(N, M, T)`.
pub fn plan(n: u64, m: u64, t: f64) -> Result<GenerationPlan, PlannerError> {
    validate(n, m, t)?;

    let m_f = m as f64;
    let t_f = t;

    // Step 1: max_overlap.
    let o_f = (2.0 * m_f * t_f / (1.0 + t_f)).floor();
    let o = o_f as u64;

    // Step 2: baseline HPSS depth. `o <= m` always holds (at t=1,
    // o = floor(2m/2) = m), so `m - o` never underflows.
    let l_hpss: i64 = if o >= m {
        1
    } else {
        (m_f / (m - o) as f64).ceil() as i64
    };

    // Step 3: collision-avoidance floor.
    let l_floor = collision_floor(n) as i64;

    // Step 4: final depth, clamped to the structural bound, then
    // checked against the tabulated combinatorial range.
    let raw_l = l_hpss.max(l_floor);
    let structural_bound = (K as u64).min(m) as i64;
    let clamped_l = raw_l.clamp(1, structural_bound);
    if clamped_l > 8 {
        return Err(PlannerError::DepthOutOfRange { computed: clamped_l, structural_bound });
    }
    let depth = clamped_l as usize;

    // Step 5: required pool, with a 10% margin.
    let ratio = 1.0 - (2.0 * t_f) / (1.0 + t_f);
    let required_pool = (1.1 * (m_f + (n.saturating_sub(1)) as f64 * m_f * ratio)).ceil() as u64;

    // Step 6: combinatorial capacity.
    let available_combinations = combinations(K, depth);
    let required_combinations = (n as f64 / 0.9).ceil() as u64;

    Ok(GenerationPlan {
        num_sets: n,
        items_per_set: m,
        threshold: t,
        max_overlap: o,
        depth,
        required_pool,
        available_combinations,
        required_combinations,
    })
}
