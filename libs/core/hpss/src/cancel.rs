// [libs/core/hpss/src/cancel.rs]
//! Cooperative cancellation. The Sampling Engine checks a
//! [`CancellationToken`] between set indices, and, for jobs with a
//! large stratification depth, between strata too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheap, cloneable, thread-safe cancellation flag. Cloning shares
/// the same underlying flag, so any clone can request cancellation
/// and any clone will observe it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
