//! Reference scenarios
//!
//! Known denomination sets and requests with their minimum stamp counts.
//! The `check` subcommand runs them against the solver; tests reuse them.

use crate::solver::StampDispenser;
use std::time::{Duration, Instant};

const GIVEN: &[i64] = &[90, 30, 24, 10, 6, 2, 1];
const WITHOUT_UNIT: &[i64] = &[90, 30, 24, 10, 6, 2];
const DUPLICATES: &[i64] = &[90, 90, 90, 30, 24, 10, 6, 2, 1];
const UNSORTED: &[i64] = &[1, 5, 12, 25];
const HIGH_VALUES: &[i64] = &[
    1_000_000, 500_000, 100_000, 50_000, 10_000, 9000, 8000, 7000, 5000, 3000, 1000, 700, 500,
    260, 100, 50, 12, 10, 2, 1,
];

/// One known request and its expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Group label
    pub name: &'static str,
    pub denominations: &'static [i64],
    pub request: i64,
    pub expected: u64,
    /// Takes seconds rather than microseconds
    pub heavy: bool,
}

const fn scenario(
    name: &'static str,
    denominations: &'static [i64],
    request: i64,
    expected: u64,
) -> Scenario {
    Scenario {
        name,
        denominations,
        request,
        expected,
        heavy: false,
    }
}

/// Every built-in scenario
pub const REFERENCE_SCENARIOS: &[Scenario] = &[
    scenario("given example", GIVEN, 18, 3),
    scenario("given example", GIVEN, 34, 2),
    scenario("missing unit value", WITHOUT_UNIT, 18, 3),
    scenario("missing unit value", WITHOUT_UNIT, 34, 2),
    scenario("zero request", GIVEN, 0, 0),
    scenario("duplicate values", DUPLICATES, 18, 3),
    scenario("duplicate values", DUPLICATES, 34, 2),
    scenario("unsorted input", UNSORTED, 16, 4),
    scenario("unsorted input", UNSORTED, 31, 3),
    scenario("high values", HIGH_VALUES, 57, 5),
    scenario("high values", HIGH_VALUES, 143, 6),
    scenario("high values", HIGH_VALUES, 760, 2),
    scenario("high values", HIGH_VALUES, 1740, 5),
    scenario("high values", HIGH_VALUES, 12_001, 3),
    scenario("high values", HIGH_VALUES, 58_113, 5),
    scenario("high values", HIGH_VALUES, 77_787, 10),
    scenario("high values", HIGH_VALUES, 128_001, 5),
    scenario("high values", HIGH_VALUES, 487_647, 16),
    scenario("high values", HIGH_VALUES, 177_787, 11),
    Scenario {
        heavy: true,
        ..scenario("high values", HIGH_VALUES, 100_000_000, 100)
    },
];

/// Result of running one scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    /// Solver answer, or the error message
    pub actual: Result<u64, String>,
    pub duration: Duration,
}

impl ScenarioOutcome {
    /// True when the solver returned the expected count
    pub fn passed(&self) -> bool {
        self.actual.as_ref().map_or(false, |&count| count == self.scenario.expected)
    }
}

impl Scenario {
    /// Solve this scenario with a freshly built dispenser
    pub fn run(&self) -> ScenarioOutcome {
        let start = Instant::now();
        let actual = StampDispenser::from_values(self.denominations)
            .and_then(|dispenser| dispenser.min_units_for(self.request))
            .map_err(|e| e.to_string());

        ScenarioOutcome {
            scenario: *self,
            actual,
            duration: start.elapsed(),
        }
    }
}

/// Run scenarios in order, skipping heavy ones unless asked
pub fn run_scenarios(scenarios: &[Scenario], include_heavy: bool) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .filter(|scenario| include_heavy || !scenario.heavy)
        .map(|scenario| {
            let outcome = scenario.run();
            tracing::debug!(
                name = scenario.name,
                request = scenario.request,
                passed = outcome.passed(),
                "scenario finished"
            );
            outcome
        })
        .collect()
}
