//! Odds source: event model and The Odds API client.
//!
//! This module handles:
//! - Event and odds data structures
//! - The Odds API client
//! - Mock source for testing

use serde_json::Value;

use crate::error::OddsError;

pub mod client;
pub mod mock;
pub mod types;

pub use client::TheOddsApiClient;
pub use mock::MockOddsSource;
pub use types::{Bookmaker, Event, Market, OutcomeQuote, Sport, MONEYLINE_MARKET};

/// Supplier of normalized events for a sport/region/market selection.
///
/// Events are returned as raw JSON values so the scanner can parse each
/// one individually and skip malformed payloads without losing the rest
/// of the fetch.
#[async_trait::async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch odds for one sport.
    async fn fetch_odds(
        &self,
        sport: &str,
        regions: &str,
        markets: &str,
    ) -> Result<Vec<Value>, OddsError>;
}
