//! Result formatting for the terminal

use crate::denominations::DenominationSet;
use crate::errors::{DispenserError, Result};
use crate::scenarios::ScenarioOutcome;
use colored::Colorize;
use serde::Serialize;

/// One solved request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveRecord {
    pub request: i64,
    pub stamps: u64,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<request>: <stamps>` lines
    Text,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Header naming the denominations in use
pub fn render_header(denominations: &DenominationSet, color: bool) -> String {
    let label = "Denominations:";
    if color {
        format!("{} {}", label.bold().cyan(), denominations)
    } else {
        format!("{} {}", label, denominations)
    }
}

/// Render solved requests
pub fn render_results(records: &[SolveRecord], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map_err(|e| DispenserError::ParseError(format!("Failed to encode results: {}", e))),
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| {
                let stamps = record.stamps.to_string();
                if color {
                    format!("{}: {}", record.request, stamps.green().bold())
                } else {
                    format!("{}: {}", record.request, stamps)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render scenario outcomes with a trailing pass count
pub fn render_scenarios(outcomes: &[ScenarioOutcome], show_timings: bool, color: bool) -> String {
    let mut lines = Vec::with_capacity(outcomes.len() + 1);

    for outcome in outcomes {
        let scenario = &outcome.scenario;
        let status = match (outcome.passed(), color) {
            (true, true) => "PASS".green().to_string(),
            (true, false) => "PASS".to_string(),
            (false, true) => "FAIL".red().bold().to_string(),
            (false, false) => "FAIL".to_string(),
        };
        let actual = match &outcome.actual {
            Ok(count) => count.to_string(),
            Err(message) => message.clone(),
        };

        let mut line = format!(
            "[{}] {}: {} -> {} (expected {})",
            status, scenario.name, scenario.request, actual, scenario.expected
        );
        if show_timings {
            line.push_str(&format!(" in {:?}", outcome.duration));
        }
        lines.push(line);
    }

    let passed = outcomes.iter().filter(|outcome| outcome.passed()).count();
    lines.push(format!("{}/{} scenarios passed", passed, outcomes.len()));
    lines.join("\n")
}
