//! Telemetry for solve runs
//!
//! Collects per-request timings and renders a summary for the CLI.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    RequestSolved {
        request: i64,
        stamps: u64,
        duration: Duration,
    },
    RequestFailed {
        request: i64,
        error: String,
    },
    BatchDispatched {
        requests: usize,
        workers: usize,
        duration: Duration,
    },
}

impl TelemetryEvent {
    /// One-line description for event listings
    pub fn describe(&self) -> String {
        match self {
            TelemetryEvent::RequestSolved {
                request,
                stamps,
                duration,
            } => format!("solved {} with {} stamps in {:?}", request, stamps, duration),
            TelemetryEvent::RequestFailed { request, error } => {
                format!("failed {}: {}", request, error)
            }
            TelemetryEvent::BatchDispatched {
                requests,
                workers,
                duration,
            } => format!(
                "batch of {} on {} workers in {:?}",
                requests, workers, duration
            ),
        }
    }
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub requests_solved: usize,
    pub requests_failed: usize,
    pub batches: usize,
    pub stamps_dispensed: u64,
    pub largest_request: i64,
    pub solve_time: Duration,
}

/// Telemetry collector
#[derive(Debug, Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Recorded data stays consistent even if a recording thread panicked
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: TelemetryEvent) {
        {
            let mut stats = lock(&self.stats);
            match &event {
                TelemetryEvent::RequestSolved {
                    request,
                    stamps,
                    duration,
                } => {
                    stats.requests_solved += 1;
                    stats.stamps_dispensed += stamps;
                    stats.largest_request = stats.largest_request.max(*request);
                    stats.solve_time += *duration;
                }
                TelemetryEvent::RequestFailed { .. } => {
                    stats.requests_failed += 1;
                }
                TelemetryEvent::BatchDispatched { duration, .. } => {
                    stats.batches += 1;
                    stats.solve_time += *duration;
                }
            }
        }

        lock(&self.events).push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        lock(&self.stats).clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        lock(&self.events).len()
    }

    /// Get recent events (last n)
    pub fn recent_events(&self, n: usize) -> Vec<TelemetryEvent> {
        let events = lock(&self.events);
        let start = events.len().saturating_sub(n);
        events[start..].to_vec()
    }

    /// Mean solve time per successful request
    pub fn average_solve_time(&self) -> Duration {
        let stats = lock(&self.stats);
        match u32::try_from(stats.requests_solved) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(count) => stats.solve_time / count,
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple telemetry display
#[derive(Debug)]
pub struct TelemetryDisplay {
    collector: TelemetryCollector,
}

impl TelemetryDisplay {
    /// Create a new display
    pub fn new(collector: TelemetryCollector) -> Self {
        Self { collector }
    }

    /// Render summary statistics
    pub fn render_summary(&self) -> String {
        let stats = self.collector.get_stats();
        let mut lines = vec![
            "Solve Summary".to_string(),
            "─────────────────────────────────────".to_string(),
            format!("Duration:          {:?}", self.collector.elapsed()),
            format!("Requests solved:   {}", stats.requests_solved),
            format!("Requests failed:   {}", stats.requests_failed),
            format!("Stamps dispensed:  {}", stats.stamps_dispensed),
            format!("Largest request:   {}", stats.largest_request),
            format!("Average solve:     {:?}", self.collector.average_solve_time()),
        ];
        if stats.batches > 0 {
            lines.push(format!("Batches:           {}", stats.batches));
        }
        lines.join("\n")
    }

    /// Render the last `n` events, oldest first
    pub fn render_recent(&self, n: usize) -> String {
        let events = self.collector.recent_events(n);
        let mut lines = vec![format!("Recent events ({})", events.len())];
        lines.extend(events.iter().map(|event| format!("  {}", event.describe())));
        lines.join("\n")
    }

    /// Display summary statistics
    pub fn display_summary(&self) {
        eprintln!("\n{}\n", self.render_summary());
    }

    /// Display the last `n` events
    pub fn display_recent(&self, n: usize) {
        eprintln!("{}\n", self.render_recent(n));
    }
}
