//! Stamp dispenser bound to one denomination set

use crate::denominations::DenominationSet;
use crate::errors::Result;
use crate::solver::batch::solve_batch;
use crate::solver::min_units::min_units_for;

/// A vending machine with an unlimited supply of each denomination
///
/// Holds no mutable state; a shared reference can serve requests from
/// any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampDispenser {
    /// Validated denominations
    denominations: DenominationSet,

    /// Threads used by `min_units_for_each` (0 = one per CPU)
    worker_threads: usize,
}

impl StampDispenser {
    /// Create a dispenser over an already validated set
    pub fn new(denominations: DenominationSet) -> Self {
        Self {
            denominations,
            worker_threads: 0,
        }
    }

    /// Validate raw values and create a dispenser over them
    pub fn from_values(values: &[i64]) -> Result<Self> {
        Ok(Self::new(DenominationSet::new(values)?))
    }

    /// Set the thread count for batch solving
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Denominations this dispenser holds
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Configured batch thread count
    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    /// Minimum number of stamps summing exactly to `request`
    pub fn min_units_for(&self, request: i64) -> Result<u64> {
        min_units_for(&self.denominations, request)
    }

    /// Minimum stamp counts for many requests, in input order
    pub fn min_units_for_each(&self, requests: &[i64]) -> Result<Vec<u64>> {
        solve_batch(&self.denominations, requests, self.worker_threads)
    }
}

impl From<DenominationSet> for StampDispenser {
    fn from(denominations: DenominationSet) -> Self {
        Self::new(denominations)
    }
}
