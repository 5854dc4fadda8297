//! CLI module for the stamp dispenser
//!
//! Handles command-line argument parsing, command dispatch and result
//! formatting.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, Commands, Verbosity};
pub use commands::{build_dispenser, Invocation};
pub use output::{OutputFormat, SolveRecord};
