//! Per-request count table
//!
//! Entries are `Option<u64>`: `None` means no combination reaching that total
//! has been found yet. Only the last `largest denomination` totals are ever
//! read while filling the table, so storage is a ring of
//! `min(request, largest) + 1` slots addressed modulo its length.

use crate::errors::{DispenserError, Result};

/// Minimum counts for a window of consecutive totals
#[derive(Debug)]
pub(crate) struct CountTable {
    slots: Vec<Option<u64>>,
}

impl CountTable {
    /// Allocate a table able to solve `request` with denominations up to `largest`
    pub(crate) fn for_request(request: u64, largest: u64) -> Result<Self> {
        let len = usize::try_from(request.min(largest))
            .ok()
            .and_then(|span| span.checked_add(1))
            .ok_or_else(|| {
                DispenserError::invalid(format!("request {} is too large to tabulate", request))
            })?;

        let mut slots = vec![None; len];
        slots[0] = Some(0);
        Ok(Self { slots })
    }

    fn slot(&self, total: u64) -> usize {
        // Remainder is below slots.len(), which already fits in usize
        (total % self.slots.len() as u64) as usize
    }

    /// Best known count for `total`
    pub(crate) fn get(&self, total: u64) -> Option<u64> {
        self.slots[self.slot(total)]
    }

    /// Record the count for `total`, overwriting the total one window back
    pub(crate) fn set(&mut self, total: u64, count: Option<u64>) {
        let slot = self.slot(total);
        self.slots[slot] = count;
    }

    /// Number of slots held
    pub(crate) fn window(&self) -> usize {
        self.slots.len()
    }
}
