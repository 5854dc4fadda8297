//! stamp-dispenser - Minimum stamp counts for a vending machine
//!
//! The machine holds an unlimited supply of stamps at each configured
//! denomination, always including a 1-value stamp, and reports the fewest
//! stamps whose face values sum to a requested total.
//!
//! # Architecture
//!
//! - **denominations**: validation and normalization of stamp values
//! - **solver**: bottom-up dynamic programming, single and batch
//! - **scenarios / telemetry / config / cli**: the command-line harness
//!
//! ```
//! use stamp_dispenser::StampDispenser;
//!
//! let dispenser = StampDispenser::from_values(&[90, 30, 24, 10, 6, 2]).unwrap();
//! assert_eq!(dispenser.min_units_for(18).unwrap(), 3);
//! assert_eq!(dispenser.min_units_for(34).unwrap(), 2);
//! ```

pub mod errors;
pub mod denominations;
pub mod solver;

// Re-export commonly used types
pub use denominations::DenominationSet;
pub use errors::{DispenserError, Result};
pub use solver::{min_units_for, StampDispenser};

// Command-line harness
pub mod cli;
pub mod config;
pub mod logging;
pub mod scenarios;
pub mod telemetry;
