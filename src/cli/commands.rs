//! Command dispatch for the stamp-dispenser binary
//!
//! Layers CLI overrides over the loaded configuration, runs the selected
//! command and writes its report. `main` only parses arguments, installs
//! logging and hands over to [`Invocation::execute`].

use crate::cli::output::{self, OutputFormat, SolveRecord};
use crate::cli::{Args, Commands, Verbosity};
use crate::config::Config;
use crate::scenarios::{run_scenarios, Scenario, REFERENCE_SCENARIOS};
use crate::solver::{effective_workers, StampDispenser};
use crate::telemetry::{TelemetryCollector, TelemetryDisplay, TelemetryEvent};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::time::{Duration, Instant};

/// Events listed after the summary at `-vv`
const RECENT_EVENTS: usize = 20;

/// Validated arguments with the configuration they resolved to
#[derive(Debug, Clone)]
pub struct Invocation {
    pub args: Args,
    pub config: Config,
    pub verbosity: Verbosity,
    pub color: bool,
}

impl Invocation {
    /// Validate arguments and load the configuration they point at
    pub fn prepare(args: Args) -> Result<Self> {
        args.validate().map_err(anyhow::Error::msg)?;

        let config =
            Config::load(args.config.as_deref()).context("Failed to load configuration")?;
        let verbosity = args.verbosity_or(config.verbosity());
        let color = config.output.color_output;

        Ok(Self {
            args,
            config,
            verbosity,
            color,
        })
    }

    /// Run the selected command, writing its report to `out`
    pub fn execute<W: Write>(&self, out: &mut W, telemetry: &TelemetryCollector) -> Result<()> {
        match &self.args.command {
            Some(Commands::Check { quick }) => check_scenarios(
                REFERENCE_SCENARIOS,
                !quick,
                self.verbosity.show_timings(),
                self.color,
                out,
            ),
            Some(Commands::Config) => {
                writeln!(out, "{}", render_config(&self.args, &self.config, self.color)?)?;
                Ok(())
            }
            None => self.run_requests(out, telemetry),
        }
    }

    fn run_requests<W: Write>(&self, out: &mut W, telemetry: &TelemetryCollector) -> Result<()> {
        let dispenser = build_dispenser(&self.args, &self.config)?;

        if self.verbosity.show_context() && !self.args.json {
            writeln!(out, "{}", output::render_header(dispenser.denominations(), self.color))?;
        }

        let solved = solve_requests(&dispenser, &self.args.requests, telemetry);
        if let Ok(records) = &solved {
            let format = OutputFormat::from_flag(self.args.json);
            writeln!(out, "{}", output::render_results(records, format, self.color)?)?;
        }

        // Failed runs still report what was recorded
        if self.args.stats || self.verbosity.show_timings() {
            let display = TelemetryDisplay::new(telemetry.clone());
            display.display_summary();
            if self.verbosity.show_events() {
                display.display_recent(RECENT_EVENTS);
            }
        }

        solved.map(|_| ())
    }
}

/// Build the dispenser from CLI overrides layered over the config file
///
/// `-d` replaces the configured denominations and keeps the configured
/// worker count; `-j` replaces the worker count either way.
pub fn build_dispenser(args: &Args, config: &Config) -> Result<StampDispenser> {
    let mut dispenser = match &args.denominations {
        Some(set) => {
            StampDispenser::new(set.clone()).with_worker_threads(config.solver.worker_threads)
        }
        None => config.dispenser().context("Invalid configured denominations")?,
    };

    if let Some(jobs) = args.jobs {
        dispenser = dispenser.with_worker_threads(jobs);
    }

    Ok(dispenser)
}

/// Solve requests in order, recording each outcome in `telemetry`
///
/// A single request is solved inline; more go through the batch solver.
pub fn solve_requests(
    dispenser: &StampDispenser,
    requests: &[i64],
    telemetry: &TelemetryCollector,
) -> Result<Vec<SolveRecord>> {
    match requests {
        [request] => solve_single(dispenser, *request, telemetry),
        _ => solve_many(dispenser, requests, telemetry),
    }
}

fn solve_single(
    dispenser: &StampDispenser,
    request: i64,
    telemetry: &TelemetryCollector,
) -> Result<Vec<SolveRecord>> {
    let start = Instant::now();
    match dispenser.min_units_for(request) {
        Ok(stamps) => {
            let duration = start.elapsed();
            tracing::info!(request, stamps, ?duration, "request solved");
            telemetry.record(TelemetryEvent::RequestSolved {
                request,
                stamps,
                duration,
            });
            Ok(vec![SolveRecord { request, stamps }])
        }
        Err(e) => {
            telemetry.record(TelemetryEvent::RequestFailed {
                request,
                error: e.to_string(),
            });
            Err(e).with_context(|| format!("Failed to solve request {}", request))
        }
    }
}

fn solve_many(
    dispenser: &StampDispenser,
    requests: &[i64],
    telemetry: &TelemetryCollector,
) -> Result<Vec<SolveRecord>> {
    let workers = effective_workers(dispenser.worker_threads()).min(requests.len());
    let start = Instant::now();

    let counts = match dispenser.min_units_for_each(requests) {
        Ok(counts) => counts,
        Err(e) => {
            // The batch fails as a whole, so none of its requests were solved
            let error = e.to_string();
            for &request in requests {
                telemetry.record(TelemetryEvent::RequestFailed {
                    request,
                    error: error.clone(),
                });
            }
            return Err(e).context("Failed to solve requests");
        }
    };
    let duration = start.elapsed();

    tracing::info!(requests = requests.len(), workers, ?duration, "batch solved");
    telemetry.record(TelemetryEvent::BatchDispatched {
        requests: requests.len(),
        workers,
        duration,
    });

    Ok(requests
        .iter()
        .zip(counts)
        .map(|(&request, stamps)| {
            telemetry.record(TelemetryEvent::RequestSolved {
                request,
                stamps,
                duration: Duration::ZERO,
            });
            SolveRecord { request, stamps }
        })
        .collect())
}

/// Run scenarios, print the report and fail if any scenario failed
pub fn check_scenarios<W: Write>(
    scenarios: &[Scenario],
    include_heavy: bool,
    show_timings: bool,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let outcomes = run_scenarios(scenarios, include_heavy);
    writeln!(out, "{}", output::render_scenarios(&outcomes, show_timings, color))?;

    let failed = outcomes.iter().filter(|outcome| !outcome.passed()).count();
    if failed > 0 {
        anyhow::bail!("{} scenario(s) failed", failed);
    }

    Ok(())
}

/// Render the configuration in effect once CLI overrides are applied
pub fn render_config(args: &Args, config: &Config, color: bool) -> Result<String> {
    let source = match &args.config {
        Some(path) => path.display().to_string(),
        None => Config::default_path()
            .filter(|path| path.exists())
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string()),
    };
    let heading = if color {
        "Configuration from".bold().to_string()
    } else {
        "Configuration from".to_string()
    };

    let dispenser = build_dispenser(args, config)?;
    let mut lines = vec![format!("{} {}", heading, source), String::new()];
    lines.push(config.to_toml()?);

    if args.denominations.is_some() || args.jobs.is_some() {
        lines.push("Command-line overrides applied".to_string());
    }
    lines.push(format!("Effective denominations: {}", dispenser.denominations()));
    lines.push(format!(
        "Batch workers:           {}",
        effective_workers(dispenser.worker_threads())
    ));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_build_dispenser_uses_config_without_overrides() {
        let mut config = Config::default();
        config.solver.worker_threads = 3;

        let dispenser = build_dispenser(&parse(&["stamp-dispenser", "18"]), &config).unwrap();
        assert_eq!(dispenser.denominations().values(), &[90, 30, 24, 10, 6, 2, 1]);
        assert_eq!(dispenser.worker_threads(), 3);
    }

    #[test]
    fn test_denomination_override_keeps_configured_workers() {
        let mut config = Config::default();
        config.solver.worker_threads = 3;

        let args = parse(&["stamp-dispenser", "-d", "5,2", "18"]);
        let dispenser = build_dispenser(&args, &config).unwrap();
        assert_eq!(dispenser.denominations().values(), &[5, 2, 1]);
        assert_eq!(dispenser.worker_threads(), 3);
    }

    #[test]
    fn test_jobs_override_wins() {
        let args = parse(&["stamp-dispenser", "-j", "2", "18"]);
        let dispenser = build_dispenser(&args, &Config::default()).unwrap();
        assert_eq!(dispenser.worker_threads(), 2);
    }

    #[test]
    fn test_invalid_config_rejected_without_override() {
        let mut config = Config::default();
        config.dispenser.denominations = vec![5, 0];

        assert!(build_dispenser(&parse(&["stamp-dispenser", "18"]), &config).is_err());
        assert!(build_dispenser(&parse(&["stamp-dispenser", "-d", "5", "18"]), &config).is_ok());
    }

    #[test]
    fn test_solve_single_records_failure() {
        let dispenser = StampDispenser::from_values(&[90, 30, 24, 10, 6, 2]).unwrap();
        let telemetry = TelemetryCollector::new();

        let err = solve_requests(&dispenser, &[-4], &telemetry).unwrap_err();
        assert!(err.to_string().contains("Failed to solve request -4"));

        let stats = telemetry.get_stats();
        assert_eq!(stats.requests_failed, 1);
        assert_eq!(stats.requests_solved, 0);
    }

    #[test]
    fn test_solve_many_records_batch_failure() {
        let dispenser = StampDispenser::from_values(&[90, 30, 24, 10, 6, 2]).unwrap();
        let telemetry = TelemetryCollector::new();

        assert!(solve_requests(&dispenser, &[18, -1, 34], &telemetry).is_err());
        let stats = telemetry.get_stats();
        assert_eq!(stats.requests_failed, 3);
        assert_eq!(stats.batches, 0);
    }

    #[test]
    fn test_solve_many_preserves_order() {
        let dispenser = StampDispenser::from_values(&[90, 30, 24, 10, 6, 2])
            .unwrap()
            .with_worker_threads(2);
        let telemetry = TelemetryCollector::new();

        let records = solve_requests(&dispenser, &[34, 18, 0], &telemetry).unwrap();
        let stamps: Vec<u64> = records.iter().map(|record| record.stamps).collect();
        assert_eq!(stamps, vec![2, 3, 0]);

        let stats = telemetry.get_stats();
        assert_eq!(stats.batches, 1);
        assert_eq!(stats.requests_solved, 3);
        assert_eq!(stats.stamps_dispensed, 5);
    }
}
