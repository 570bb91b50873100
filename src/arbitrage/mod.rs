//! Arbitrage engine: pure detection of risk-free opportunities.
//!
//! This module handles:
//! - Best-price selection per outcome across bookmakers
//! - Edge and stake calculations
//! - Opportunity assembly and alert formatting

pub mod calculator;
pub mod detector;
pub mod format;
pub mod selector;

pub use calculator::{build_opportunity, edge_pct, stake_allocation, ArbOpportunity};
pub use detector::{diagnose_no_arb, find_arbitrage, NoArbDiagnosis};
pub use format::{format_alert, startup_banner};
pub use selector::{best_prices, BestPrices};
