//! Minimum unit count computation
//!
//! For each total `i` in ascending order, any optimal combination ends in
//! some denomination `d <= i`, leaving an optimal combination for `i - d`:
//!
//!   table[i] = min over d of table[i - d] + 1
//!
//! Cost is O(request × |denominations|) time. Because the unit value is
//! always present every total is reachable.

use crate::denominations::DenominationSet;
use crate::errors::{DispenserError, Result};
use crate::solver::table::CountTable;

/// Fewest stamps from `denominations` summing exactly to `request`
pub fn min_units_for(denominations: &DenominationSet, request: i64) -> Result<u64> {
    let request = u64::try_from(request).map_err(|_| {
        DispenserError::invalid(format!("request must be non-negative, got {}", request))
    })?;

    let mut table = CountTable::for_request(request, denominations.largest())?;
    tracing::trace!(request, window = table.window(), "solving request");

    for total in 1..=request {
        let mut best: Option<u64> = None;

        for denomination in denominations.iter() {
            if denomination > total {
                continue;
            }

            if let Some(sub_count) = table.get(total - denomination) {
                let candidate = sub_count + 1;
                if best.map_or(true, |current| candidate < current) {
                    best = Some(candidate);
                }
            }
        }

        table.set(total, best);
    }

    table
        .get(request)
        .ok_or(DispenserError::Unreachable { request })
}
