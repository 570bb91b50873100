//! Edge and stake calculations for arbitrage opportunities.

use std::collections::BTreeMap;

use time::OffsetDateTime;

use super::selector::BestPrices;
use crate::odds::Event;

/// Guaranteed edge in percent: `(1 - Σ 1/price) * 100`.
///
/// The sum of implied probabilities is the fraction of a unit stake
/// needed to cover every outcome; a sum below 1 leaves the shortfall as
/// risk-free profit. A result <= 0 means no arbitrage exists.
pub fn edge_pct(prices: &BTreeMap<String, f64>) -> f64 {
    let implied_sum: f64 = prices.values().map(|p| 1.0 / p).sum();
    (1.0 - implied_sum) * 100.0
}

/// Proportional stake per outcome over a notional bankroll.
///
/// Each outcome is staked `bankroll * (1/price) / Σ(1/price)`, which
/// makes `stake * price` identical across outcomes and the stakes sum to
/// the bankroll exactly (up to floating-point rounding).
pub fn stake_allocation(prices: &BTreeMap<String, f64>, bankroll: f64) -> BTreeMap<String, f64> {
    let inv_sum: f64 = prices.values().map(|p| 1.0 / p).sum();

    prices
        .iter()
        .map(|(name, price)| (name.clone(), bankroll * (1.0 / price) / inv_sum))
        .collect()
}

/// Round to a fixed number of decimal places for presentation.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Detected arbitrage opportunity. Immutable once produced; handed to
/// the alert sink and discarded.
///
/// Numeric fields are rounded for presentation stability (edge to 4
/// decimal places, stakes to 2); internal computation stays in full f64
/// precision.
#[derive(Debug, Clone)]
pub struct ArbOpportunity {
    /// Event identifier.
    pub event_id: String,
    /// Human-readable sport name.
    pub sport_title: String,
    /// Scheduled start time.
    pub commence_time: OffsetDateTime,
    /// Home participant, when the sport has one.
    pub home_team: Option<String>,
    /// Away participant, when the sport has one.
    pub away_team: Option<String>,
    /// Best price per outcome.
    pub best_prices: BTreeMap<String, f64>,
    /// Bookmaker offering each best price.
    pub best_books: BTreeMap<String, String>,
    /// Guaranteed edge percent, rounded to 4 decimal places.
    pub edge_pct: f64,
    /// Bankroll the stakes are allocated over.
    pub bankroll: f64,
    /// Stake per outcome, rounded to 2 decimal places.
    pub stakes: BTreeMap<String, f64>,
    /// When the opportunity was detected.
    pub detected_at: OffsetDateTime,
}

impl ArbOpportunity {
    /// Payout if any single outcome wins, from full-precision prices.
    pub fn guaranteed_payout(&self) -> f64 {
        let implied_sum: f64 = self.best_prices.values().map(|p| 1.0 / p).sum();
        self.bankroll / implied_sum
    }
}

/// Assemble the opportunity record from event metadata and the snapshot.
pub fn build_opportunity(
    event: &Event,
    best: BestPrices,
    edge: f64,
    bankroll: f64,
) -> ArbOpportunity {
    let stakes = stake_allocation(&best.prices, bankroll)
        .into_iter()
        .map(|(name, stake)| (name, round_to(stake, 2)))
        .collect();

    ArbOpportunity {
        event_id: event.id.clone(),
        sport_title: event.sport_title.clone(),
        commence_time: event.commence_time,
        home_team: event.home_team.clone(),
        away_team: event.away_team.clone(),
        best_prices: best.prices,
        best_books: best.books,
        edge_pct: round_to(edge, 4),
        bankroll,
        stakes,
        detected_at: OffsetDateTime::now_utc(),
    }
}
