//! Command-line argument parsing for the stamp dispenser
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::denominations::DenominationSet;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stamp-dispenser - Minimum number of stamps for a requested total
#[derive(Parser, Debug, Clone)]
#[command(name = "stamp-dispenser")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Compute the fewest stamps that add up to a requested value", long_about = None)]
pub struct Args {
    /// Totals to dispense
    #[arg(value_name = "REQUEST", allow_negative_numbers = true)]
    pub requests: Vec<i64>,

    /// Comma-separated denominations, overriding the config file (e.g. 90,30,24)
    #[arg(short, long, value_name = "VALUES")]
    pub denominations: Option<DenominationSet>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Worker threads for batch solving (0 = one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a timing summary after solving
    #[arg(long)]
    pub stats: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except results)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the built-in reference scenarios
    Check {
        /// Skip scenarios with very large requests
        #[arg(long)]
        quick: bool,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity from flags, with `default` used when no flag is given
    pub fn verbosity_or(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity_or(Verbosity::Normal)
    }

    /// Check that requests and subcommands are not mixed
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_none() && self.requests.is_empty() {
            return Err(
                "At least one request required. Use 'stamp-dispenser <REQUEST>...' or run a subcommand."
                    .to_string(),
            );
        }

        if self.command.is_some() && !self.requests.is_empty() {
            return Err("Cannot specify requests with subcommand.".to_string());
        }

        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the config file spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Check if should show the denomination set and headers
    pub fn show_context(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show per-request timings
    pub fn show_timings(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if should list individual telemetry events
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}
