//! Best-price selection across bookmakers.

use std::collections::{BTreeMap, HashSet};

use crate::odds::{Bookmaker, MONEYLINE_MARKET};

/// Best decimal price per outcome and the bookmaker offering it.
///
/// Built fresh per detection call and never persisted. `BTreeMap` keeps
/// iteration deterministic for rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct BestPrices {
    /// Outcome label -> highest qualifying price.
    pub prices: BTreeMap<String, f64>,
    /// Outcome label -> lower-cased bookmaker identifier.
    pub books: BTreeMap<String, String>,
}

impl BestPrices {
    /// Number of distinct outcomes with a qualifying price.
    pub fn outcome_count(&self) -> usize {
        self.prices.len()
    }

    /// Whether this snapshot covers a supported 2- or 3-way market.
    pub fn is_analyzable(&self) -> bool {
        matches!(self.prices.len(), 2 | 3)
    }

    /// Sum of implied probabilities (1/price) over all outcomes.
    pub fn implied_sum(&self) -> f64 {
        self.prices.values().map(|p| 1.0 / p).sum()
    }
}

/// Select the best price per outcome over all allowed bookmakers.
///
/// Listings are skipped when the bookmaker is not whitelisted (an empty
/// whitelist accepts all), the market is not h2h, or the price is
/// non-finite or at most 1.0. On a price tie the first bookmaker
/// encountered keeps the outcome.
pub fn best_prices(bookmakers: &[Bookmaker], whitelist: &HashSet<String>) -> BestPrices {
    let mut best = BestPrices::default();

    for bm in bookmakers {
        let ident = bm.ident();
        if !whitelist.is_empty() && !whitelist.contains(&ident) {
            continue;
        }

        for market in &bm.markets {
            if market.key != MONEYLINE_MARKET {
                continue;
            }

            for quote in &market.outcomes {
                let price = quote.price;
                if !price.is_finite() || price <= 1.0 {
                    continue;
                }

                // Strict greater-than: ties keep the first bookmaker.
                let improved = best
                    .prices
                    .get(&quote.name)
                    .map_or(true, |current| price > *current);

                if improved {
                    best.prices.insert(quote.name.clone(), price);
                    best.books.insert(quote.name.clone(), ident.clone());
                }
            }
        }
    }

    best
}
