//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::scanner::CycleReport;

/// Cumulative scanner statistics across all cycles.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScannerStats {
    /// Scan cycles completed.
    pub cycles_completed: u64,
    /// Events analyzed.
    pub events_scanned: u64,
    /// Sports fetches that failed.
    pub fetch_failures: u64,
    /// Opportunities detected.
    pub opportunities_found: u64,
    /// Alerts delivered.
    pub alerts_sent: u64,
}

impl ScannerStats {
    /// Fold one cycle's counters into the running totals.
    pub fn absorb(&mut self, report: &CycleReport) {
        self.cycles_completed += 1;
        self.events_scanned += report.events_scanned;
        self.fetch_failures += report.sports_failed;
        self.opportunities_found += report.opportunities_found;
        self.alerts_sent += report.alerts_sent;
    }
}

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Whether the scanner has completed its first cycle.
    pub ready: Arc<std::sync::atomic::AtomicBool>,
    /// Cumulative scanner stats.
    pub stats: Arc<tokio::sync::RwLock<ScannerStats>>,
    /// Prometheus render handle, when the recorder is installed.
    prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state.
    pub fn new() -> Self {
        Self {
            ready: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            stats: Arc::new(tokio::sync::RwLock::new(ScannerStats::default())),
            prometheus: None,
        }
    }

    /// Attach a Prometheus handle for the /metrics endpoint.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Set ready state.
    pub fn set_ready(&self, ready: bool) {
        self.ready
            .store(ready, std::sync::atomic::Ordering::SeqCst);
    }

    /// Check if ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether the scanner has completed a cycle.
    pub ready: bool,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service status.
    pub status: &'static str,
    /// Cumulative statistics.
    pub stats: ScannerStats,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check handler - returns 200 after the first scan cycle.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let is_ready = state.is_ready();
    let response = ReadyResponse { ready: is_ready };

    if is_ready {
        (StatusCode::OK, Json(response))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Status handler - returns scanner status and statistics.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let stats = *state.stats.read().await;
    let status = if state.is_ready() { "running" } else { "starting" };

    Json(StatusResponse { status, stats })
}

/// Prometheus metrics handler.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
