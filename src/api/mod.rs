//! HTTP API for health checks, status, and Prometheus metrics.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ScannerStats};
pub use routes::create_router;
