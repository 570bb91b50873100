//! Prometheus metrics for scan monitoring.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Odds fetch latency metric name.
pub const METRIC_ODDS_FETCH_LATENCY: &str = "odds_fetch_latency_ms";
/// Scan cycle duration metric name.
pub const METRIC_SCAN_CYCLE_DURATION: &str = "scan_cycle_duration_ms";
/// Scan cycles counter metric name.
pub const METRIC_SCAN_CYCLES: &str = "scan_cycles_total";
/// Events scanned counter metric name.
pub const METRIC_EVENTS_SCANNED: &str = "events_scanned_total";
/// Fetch failures counter metric name.
pub const METRIC_FETCH_FAILURES: &str = "fetch_failures_total";
/// Opportunities detected counter metric name.
pub const METRIC_OPPORTUNITIES_DETECTED: &str = "opportunities_detected_total";
/// Alerts sent counter metric name.
pub const METRIC_ALERTS_SENT: &str = "alerts_sent_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_ODDS_FETCH_LATENCY,
        "Odds API fetch latency in milliseconds"
    );
    describe_histogram!(
        METRIC_SCAN_CYCLE_DURATION,
        "Full scan cycle duration in milliseconds"
    );

    describe_counter!(METRIC_SCAN_CYCLES, "Total number of scan cycles completed");
    describe_counter!(METRIC_EVENTS_SCANNED, "Total number of events analyzed");
    describe_counter!(
        METRIC_FETCH_FAILURES,
        "Total number of failed odds fetches"
    );
    describe_counter!(
        METRIC_OPPORTUNITIES_DETECTED,
        "Total number of arbitrage opportunities detected"
    );
    describe_counter!(METRIC_ALERTS_SENT, "Total number of alerts delivered");

    debug!("Metrics initialized");
}

/// Record odds fetch latency for one sport.
pub fn record_fetch_latency(start: Instant, sport: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_ODDS_FETCH_LATENCY, "sport" => sport.to_string()).record(latency_ms);
}

/// Record full scan cycle duration.
pub fn record_cycle_duration(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_SCAN_CYCLE_DURATION).record(latency_ms);
}

/// Increment completed scan cycles counter.
pub fn inc_scan_cycles() {
    counter!(METRIC_SCAN_CYCLES).increment(1);
}

/// Increment events scanned counter.
pub fn inc_events_scanned() {
    counter!(METRIC_EVENTS_SCANNED).increment(1);
}

/// Increment fetch failures counter.
pub fn inc_fetch_failures() {
    counter!(METRIC_FETCH_FAILURES).increment(1);
}

/// Increment opportunities detected counter.
pub fn inc_opportunities_detected() {
    counter!(METRIC_OPPORTUNITIES_DETECTED).increment(1);
}

/// Increment alerts sent counter.
pub fn inc_alerts_sent() {
    counter!(METRIC_ALERTS_SENT).increment(1);
}
