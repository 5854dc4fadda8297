//! Parallel batch solving
//!
//! Requests are independent, so a batch is split into contiguous chunks and
//! solved on scoped threads that borrow one shared `DenominationSet`.
//! Results come back in input order.

use crate::denominations::DenominationSet;
use crate::errors::{DispenserError, Result};
use crate::solver::min_units::min_units_for;
use std::thread;

/// Resolve a configured thread count; 0 means one per logical CPU
pub fn effective_workers(configured: usize) -> usize {
    if configured == 0 {
        num_cpus::get().max(1)
    } else {
        configured
    }
}

/// Solve every request in `requests` against `denominations`
pub fn solve_batch(
    denominations: &DenominationSet,
    requests: &[i64],
    worker_threads: usize,
) -> Result<Vec<u64>> {
    if let Some(bad) = requests.iter().find(|&&request| request < 0) {
        return Err(DispenserError::invalid(format!(
            "request must be non-negative, got {}",
            bad
        )));
    }

    let workers = effective_workers(worker_threads).min(requests.len());
    if workers <= 1 {
        return requests
            .iter()
            .map(|&request| min_units_for(denominations, request))
            .collect();
    }

    let chunk_size = requests.len().div_ceil(workers);
    tracing::debug!(requests = requests.len(), workers, chunk_size, "dispatching batch");

    thread::scope(|scope| {
        let handles: Vec<_> = requests
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&request| min_units_for(denominations, request))
                        .collect::<Result<Vec<u64>>>()
                })
            })
            .collect();

        let mut results = Vec::with_capacity(requests.len());
        for handle in handles {
            let counts = handle.join().map_err(|_| DispenserError::WorkerPanicked)??;
            results.extend(counts);
        }
        Ok(results)
    })
}
