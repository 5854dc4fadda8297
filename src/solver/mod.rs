//! Minimum stamp count solver
//! Bottom-up dynamic programming over totals, one fresh table per request

pub mod batch;
pub mod dispenser;
pub mod min_units;
mod table;

pub use batch::{effective_workers, solve_batch};
pub use dispenser::StampDispenser;
pub use min_units::min_units_for;
