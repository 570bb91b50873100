//! Sports moneyline arbitrage scanner.
//!
//! This library polls The Odds API for decimal h2h (moneyline / 1x2) odds
//! across a configured set of sports, finds risk-free arbitrage
//! opportunities across bookmakers, and delivers alerts to Telegram.
//!
//! # Strategy
//!
//! When the best available prices across bookmakers imply a combined
//! probability below 100%, staking each outcome in proportion to its
//! inverse price locks in the shortfall as profit:
//!
//! ```text
//! Outcome A: 2.10 @ book x   implied 47.62%
//! Outcome B: 2.05 @ book y   implied 48.78%
//! ─────────────────────────────────────────
//! Total implied:   96.40% < 100% ✅
//! Guaranteed edge: 3.60% on total stake
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`odds`]: The Odds API client and event model
//! - [`arbitrage`]: Best-price selection, edge/stake math, alert formatting
//! - [`alert`]: Telegram alert delivery
//! - [`scanner`]: The scan cycle and polling helpers
//! - [`api`]: HTTP API for health/status
//! - [`metrics`]: Prometheus metrics

pub mod alert;
pub mod api;
pub mod arbitrage;
pub mod config;
pub mod error;
pub mod metrics;
pub mod odds;
pub mod scanner;

pub use config::Config;
pub use error::{BotError, Result};
