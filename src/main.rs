//! stamp-dispenser - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use stamp_dispenser::{
    cli::{Args, Invocation},
    logging,
    telemetry::TelemetryCollector,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let invocation = Invocation::prepare(args)?;

    if !invocation.color {
        colored::control::set_override(false);
    }

    logging::init(invocation.verbosity, invocation.color)?;
    tracing::debug!(verbosity = invocation.verbosity.as_str(), "starting");

    let telemetry = TelemetryCollector::new();
    let stdout = std::io::stdout();
    invocation.execute(&mut stdout.lock(), &telemetry)
}
