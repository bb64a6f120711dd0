// [libs/core/hpss/src/universe.rs]
//! The `Universe` handle contract and a reference in-memory
//! implementation used by the CLI, the tests, and anyone who wants to
//! exercise the core without a real partitioned backing store.

use std::convert::Infallible;

use crate::stratum;

/// What the Sampling Engine and Feasibility Oracle need from a
/// universe: a count, and the ability to enumerate one stratum at a
/// time. Read-only and stable for the duration of one `generate` call.
///
/// `stratum_of` is infallible — it is a pure function of the
/// identifier — while `size` and `enumerate_stratum` may
/// fail, since a real implementation typically backs them with I/O
/// (a database query, a file scan). A failure there surfaces to
/// callers of [`crate::generate`] as `CoreError::UniverseUnavailable`.
pub trait Universe {
    /// The error a real (I/O-backed) implementation can raise.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Total number of items in the universe.
    fn size(&self) -> Result<u64, Self::Error>;

    /// Which of the `K` strata `id` belongs to. Implementations backed
    /// by a partitioned store must compute this with the exact same
    /// hash used to physically partition the data.
    fn stratum_of(&self, id: i64) -> usize {
        stratum::stratum(id)
    }

    /// All items belonging to stratum `p`. Enumeration order is
    /// unspecified — the Sampling Engine's ranking is hash-based and
    /// does not depend on it.
    fn enumerate_stratum(&self, p: usize) -> Result<Box<dyn Iterator<Item = i64> + '_>, Self::Error>;
}

/// A read-only, fully in-memory [`Universe`]. Buckets every identifier
/// into its stratum once at construction time, so `enumerate_stratum`
/// is a cheap clone of a precomputed `Vec`.
#[derive(Debug, Clone)]
pub struct InMemoryUniverse {
    total: u64,
    buckets: Vec<Vec<i64>>,
}

impl InMemoryUniverse {
    /// Builds a universe from an arbitrary collection of identifiers.
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); stratum::K];
        let mut total: u64 = 0;
        for id in ids {
            buckets[stratum::stratum(id)].push(id);
            total += 1;
        }
        Self { total, buckets }
    }

    /// A canonical test universe: sequential
    /// identifiers `1..=n`.
    pub fn sequential(n: u64) -> Self {
        Self::new((1..=n as i64).map(i64::from))
    }
}

impl Universe for InMemoryUniverse {
    type Error = Infallible;

    fn size(&self) -> Result<u64, Self::Error> {
        Ok(self.total)
    }

    fn enumerate_stratum(&self, p: usize) -> Result<Box<dyn Iterator<Item = i64> + '_>, Self::Error> {
        Ok(match self.buckets.get(p) {
            Some(bucket) => Box::new(bucket.iter().copied()),
            None => Box::new(std::iter::empty()),
        })
    }
}
