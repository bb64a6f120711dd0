// [libs/core/hpss/src/lib.rs]
//! Hash-Partitioned Stratified Sampling (HPSS).
//!
//! Generates a batch of `N` subsets (each of size `M`) drawn from a
//! large universe of 64-bit identifiers such that every pairwise
//! Jaccard similarity is bounded above by a caller-supplied threshold
//! `T`. Generation is deterministic, feasible-or-reject, and scales to
//! thousands of sets over a universe of `10⁵` or more items.
//!
//! The crate is four cooperating pieces:
//!
//! - [`stratum`] — the Partition Oracle: which of `K` fixed strata an
//!   identifier belongs to.
//! - [`planner`] — the Parameter Planner: turns `(N, M, T)` into a
//!   stratification depth, required pool size, and combinatorial
//!   capacity.
//! - [`sampling`] — the Sampling Engine: draws each output set.
//! - [`feasibility`] — the Feasibility Oracle: judges a plan against a
//!   universe size before any sampling runs.
//!
//! [`universe::Universe`] is the read-only capability the Sampling
//! Engine and Feasibility Oracle consume; [`universe::InMemoryUniverse`]
//! is a reference implementation good enough to exercise the whole
//! crate without a real backing store.

pub mod cancel;
pub mod error;
pub mod feasibility;
pub mod hash;
pub mod metrics;
pub mod planner;
pub mod sampling;
pub mod stratum;
pub mod universe;

pub use cancel::CancellationToken;
pub use error::CoreError;
pub use feasibility::{feasibility as feasibility_for, Recommendation, Verdict};
pub use planner::{GenerationPlan, PlannerError};
pub use sampling::{generate, generate_cancellable, OutputSet};
pub use stratum::{stratum, K};
pub use universe::{InMemoryUniverse, Universe};

/// Computes the [`Verdict`] for `(N, M, T)` against a universe size.
/// Pure — never touches a [`Universe`] handle.
pub fn feasibility(n: u64, m: u64, t: f64, universe_size: u64) -> Result<Verdict, CoreError> {
    feasibility::feasibility(n, m, t, universe_size).map_err(CoreError::from)
}
