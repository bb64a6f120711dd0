// [libs/core/hpss/src/feasibility.rs]
//! Feasibility Oracle: wraps the Parameter Planner with a
//! structured verdict and a human-readable recommendation, run before
//! the Sampling Engine ever touches the universe.

use crate::planner::{self, GenerationPlan, PlannerError};
use crate::stratum::K;

/// First-matching-rule recommendation ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Recommendation {
    /// `total_icons < required_pool`.
    InsufficientIcons,
    /// `collision_safety_factor < 0.5`.
    TooManySetsForAvailableCombinations,
    /// `0.5 <= collision_safety_factor < 1.0`.
    Risky,
    /// `1.0 <= collision_safety_factor < 2.0`.
    Caution,
    /// `collision_safety_factor >= 2.0`.
    Safe,
}

impl Recommendation {
    /// Short human-readable text, suitable for surfacing to a caller
    /// alongside the structured verdict.
    pub fn describe(&self) -> &'static str {
        match self {
            Recommendation::InsufficientIcons => {
                "INFEASIBLE: the universe does not contain enough icons for the requested \
                 pool; add items or reduce numSets/itemsPerSet."
            }
            Recommendation::TooManySetsForAvailableCombinations => {
                "INFEASIBLE: too many sets requested for the number of stratum combinations \
                 available at this depth; reduce numSets or relax overlapThreshold."
            }
            Recommendation::Risky => {
                "RISKY: collisions among stratum combinations are plausible; consider \
                 reducing numSets or relaxing overlapThreshold."
            }
            Recommendation::Caution => {
                "CAUTION: feasible, but with a thin safety margin against stratum \
                 combination collisions."
            }
            Recommendation::Safe => "SAFE: ample icon pool and combinatorial headroom.",
        }
    }
}

/// The full feasibility verdict.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub feasible: bool,
    pub total_icons: u64,
    pub required_pool: u64,
    pub max_overlap: u64,
    pub safety_margin: f64,
    pub num_partitions: usize,
    pub partitions_per_set: usize,
    pub available_combinations: u64,
    pub required_combinations: u64,
    pub collision_safety_factor: f64,
    pub recommendation: Recommendation,
}

/// Builds the verdict for an already-computed plan against a known
/// universe size. Kept separate from [`feasibility`] so [`crate::generate`]
/// can reuse the same plan it judges feasible instead of recomputing it.
pub(crate) fn judge(plan: &GenerationPlan, total_icons: u64) -> Verdict {
    let safety_margin = if plan.required_pool == 0 {
        f64::INFINITY
    } else {
        total_icons as f64 / plan.required_pool as f64
    };

    let collision_safety_factor = if plan.required_combinations == 0 {
        f64::INFINITY
    } else {
        plan.available_combinations as f64 / plan.required_combinations as f64
    };

    let insufficient_icons = total_icons < plan.required_pool;

    let recommendation = if insufficient_icons {
        Recommendation::InsufficientIcons
    } else if collision_safety_factor < 0.5 {
        Recommendation::TooManySetsForAvailableCombinations
    } else if collision_safety_factor < 1.0 {
        Recommendation::Risky
    } else if collision_safety_factor < 2.0 {
        Recommendation::Caution
    } else {
        Recommendation::Safe
    };

    let feasible = !insufficient_icons && collision_safety_factor >= 1.0;

    Verdict {
        feasible,
        total_icons,
        required_pool: plan.required_pool,
        max_overlap: plan.max_overlap,
        safety_margin,
        num_partitions: K,
        partitions_per_set: plan.depth,
        available_combinations: plan.available_combinations,
        required_combinations: plan.required_combinations,
        collision_safety_factor,
        recommendation,
    }
}

/// Computes the plan for `(N, M, T)` and judges it against
/// `universe_size`. Pure: does not touch a universe handle.
pub fn feasibility(n: u64, m: u64, t: f64, universe_size: u64) -> Result<Verdict, PlannerError> {
    let plan = planner::plan(n, m, t)?;
    Ok(judge(&plan, universe_size))
}
