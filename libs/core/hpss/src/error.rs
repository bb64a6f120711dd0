// [libs/core/hpss/src/error.rs]
//! The crate's error surface. Nothing is retried inside the
//! core; every variant here is meant to be propagated verbatim to the
//! caller.

use thiserror::Error;

use crate::feasibility::Verdict;
use crate::planner::PlannerError;

/// Errors [`crate::feasibility`] and [`crate::generate`] can return.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The Feasibility Oracle rejected the request; `generate` never
    /// ran the Sampling Engine for it (I4 / P6).
    #[error("request is infeasible: {}", .0.recommendation.describe())]
    Infeasible(Box<Verdict>),

    /// `N < 1`, `M < 1`, `T` outside `[0, 1]`, or the stratification
    /// depth fell outside the supported range after clamping.
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] PlannerError),

    /// The universe handle failed to answer `size()` or
    /// `enumerate_stratum()`.
    #[error("universe handle unavailable: {0}")]
    UniverseUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Post-condition I1 was violated despite a feasible verdict: the
    /// universe was smaller or differently shaped than it claimed to
    /// be. Fatal for the whole call; any partial output is discarded.
    #[error("shortfall finalising set {set_index}: have {have} distinct items, need {need}")]
    Shortfall { set_index: u64, have: usize, need: usize },

    /// A [`crate::cancel::CancellationToken`] was observed between set
    /// indices or strata.
    #[error("generation cancelled")]
    Cancelled,
}

impl CoreError {
    pub fn infeasible(verdict: Verdict) -> Self {
        CoreError::Infeasible(Box::new(verdict))
    }
}
