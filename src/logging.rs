//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt layer on stderr. The level follows CLI
//! verbosity unless `RUST_LOG` is set.

use crate::cli::Verbosity;
use crate::errors::{DispenserError, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default level for a verbosity setting
pub fn level_for(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Normal => LevelFilter::WARN,
        Verbosity::Verbose => LevelFilter::INFO,
        Verbosity::VeryVerbose => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber; fails if one is already set
pub fn init(verbosity: Verbosity, color: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_ansi(color)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| DispenserError::ConfigError(format!("Failed to install logger: {}", e)))
}
