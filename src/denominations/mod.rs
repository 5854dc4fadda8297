//! Denomination sets
//!
//! Validation and normalization of the stamp values a dispenser holds.

pub mod set;

pub use set::{DenominationSet, UNIT_VALUE};
