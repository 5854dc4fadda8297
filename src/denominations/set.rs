//! Canonical denomination set
//!
//! A `DenominationSet` is built once from caller-supplied values and never
//! changes afterwards. Construction guarantees:
//! - at least one value
//! - every value strictly positive
//! - no duplicates
//! - the unit value 1 is present (appended when omitted)
//!
//! Values are kept in descending order. Solving does not depend on the order.

use crate::errors::{DispenserError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Face value every dispenser must carry
pub const UNIT_VALUE: u64 = 1;

/// Immutable, validated set of stamp denominations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u64>")]
pub struct DenominationSet {
    values: Vec<u64>,
}

impl DenominationSet {
    /// Validate and normalize raw denomination values
    ///
    /// The input slice is copied; callers keep their data untouched.
    pub fn new(raw: &[i64]) -> Result<Self> {
        if raw.is_empty() {
            return Err(DispenserError::invalid(
                "denominations must contain at least one value",
            ));
        }

        if let Some(bad) = raw.iter().find(|&&value| value <= 0) {
            return Err(DispenserError::invalid(format!(
                "denomination values must be positive, got {}",
                bad
            )));
        }

        let mut values: Vec<u64> = raw.iter().map(|&value| value.unsigned_abs()).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();

        if values.last() != Some(&UNIT_VALUE) {
            tracing::debug!("unit value missing from denominations, adding it");
            values.push(UNIT_VALUE);
        }

        Ok(Self { values })
    }

    /// Denominations in descending order
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Iterate denominations in descending order
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    /// Number of distinct denominations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest face value in the set
    pub fn largest(&self) -> u64 {
        // Construction guarantees at least the unit value
        self.values.first().copied().unwrap_or(UNIT_VALUE)
    }

    /// Check whether a face value is part of the set
    pub fn contains(&self, value: u64) -> bool {
        self.values.binary_search_by(|candidate| value.cmp(candidate)).is_ok()
    }
}

impl TryFrom<Vec<i64>> for DenominationSet {
    type Error = DispenserError;

    fn try_from(raw: Vec<i64>) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<DenominationSet> for Vec<u64> {
    fn from(set: DenominationSet) -> Self {
        set.values
    }
}

impl FromStr for DenominationSet {
    type Err = DispenserError;

    /// Parse a comma-separated list such as `"90, 30, 24"`
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Self::new(&[]);
        }

        let raw = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i64>().map_err(|e| {
                    DispenserError::ParseError(format!("invalid denomination '{}': {}", part, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(&raw)
    }
}

impl fmt::Display for DenominationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{}}}", joined)
    }
}
