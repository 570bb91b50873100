//! Arbitrage opportunity detection.

use tracing::{debug, info, instrument};

use super::calculator::{build_opportunity, edge_pct, ArbOpportunity};
use super::selector::{best_prices, BestPrices};
use crate::config::Config;
use crate::odds::Event;

/// Check one event for an arbitrage opportunity.
///
/// Pure and stateless: selects best prices over allowed bookmakers,
/// skips events without 2 or 3 qualifying outcomes, and reports an
/// opportunity only when the edge strictly exceeds the configured
/// minimum. An event exactly at the threshold is not reported.
#[instrument(skip(event, config), fields(event_id = %event.id, sport = %event.sport_key))]
pub fn find_arbitrage(event: &Event, config: &Config) -> Option<ArbOpportunity> {
    if event.bookmakers.is_empty() {
        return None;
    }

    let whitelist = config.whitelist();
    let best = best_prices(&event.bookmakers, &whitelist);

    if !best.is_analyzable() {
        debug!(
            outcomes = best.outcome_count(),
            "Skipping event: not a 2- or 3-way market"
        );
        return None;
    }

    let edge = edge_pct(&best.prices);
    if edge <= config.min_edge_pct {
        debug!(
            diagnosis = %diagnose_no_arb(&best, config.min_edge_pct),
            "No arbitrage"
        );
        return None;
    }

    let opportunity = build_opportunity(event, best, edge, config.bankroll);
    info!(
        edge_pct = opportunity.edge_pct,
        outcomes = opportunity.best_prices.len(),
        "Arbitrage opportunity detected"
    );

    Some(opportunity)
}

/// Get diagnostic information about why there's no opportunity.
pub fn diagnose_no_arb(best: &BestPrices, threshold: f64) -> NoArbDiagnosis {
    NoArbDiagnosis {
        outcome_count: best.outcome_count(),
        implied_sum: best.implied_sum(),
        edge_pct: edge_pct(&best.prices),
        threshold,
    }
}

/// Diagnostic information for debugging.
#[derive(Debug, Clone)]
pub struct NoArbDiagnosis {
    /// Distinct outcomes with a qualifying price.
    pub outcome_count: usize,
    /// Sum of implied probabilities across best prices.
    pub implied_sum: f64,
    /// Computed edge percent (may be negative).
    pub edge_pct: f64,
    /// Minimum edge required to alert.
    pub threshold: f64,
}

impl std::fmt::Display for NoArbDiagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} outcomes, implied sum {:.4}, edge {:.4}% (threshold {}%)",
            self.outcome_count, self.implied_sum, self.edge_pct, self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;
    use crate::odds::{Bookmaker, Market, OutcomeQuote};
    use time::macros::datetime;

    fn book(title: &str, outcomes: Vec<(&str, f64)>) -> Bookmaker {
        Bookmaker {
            key: title.to_lowercase(),
            title: title.to_string(),
            markets: vec![Market {
                key: "h2h".to_string(),
                outcomes: outcomes
                    .into_iter()
                    .map(|(name, price)| OutcomeQuote {
                        name: name.to_string(),
                        price,
                    })
                    .collect(),
            }],
        }
    }

    fn event(bookmakers: Vec<Bookmaker>) -> Event {
        Event {
            id: "e1".to_string(),
            sport_key: "tennis_atp_singles".to_string(),
            sport_title: "ATP Singles".to_string(),
            commence_time: datetime!(2026-09-01 15:00 UTC),
            home_team: None,
            away_team: None,
            bookmakers,
        }
    }

    #[test]
    fn two_way_arb_is_detected() {
        // 2.10 @ x, 2.05 @ y -> edge ~3.6% > 0.5% threshold.
        let ev = event(vec![
            book("x", vec![("A", 2.10), ("B", 1.95)]),
            book("y", vec![("A", 2.00), ("B", 2.05)]),
        ]);

        let opp = find_arbitrage(&ev, &test_config()).expect("opportunity");

        assert_eq!(opp.best_prices["A"], 2.10);
        assert_eq!(opp.best_books["A"], "x");
        assert_eq!(opp.best_prices["B"], 2.05);
        assert_eq!(opp.best_books["B"], "y");
        assert_eq!(opp.edge_pct, 3.6005);
        assert_eq!(opp.stakes["A"], 49.40);
        assert_eq!(opp.stakes["B"], 50.60);
    }

    #[test]
    fn edge_below_threshold_is_not_reported() {
        // Same prices but a 5% minimum edge.
        let ev = event(vec![
            book("x", vec![("A", 2.10)]),
            book("y", vec![("B", 2.05)]),
        ]);
        let mut config = test_config();
        config.min_edge_pct = 5.0;

        assert!(find_arbitrage(&ev, &config).is_none());
    }

    #[test]
    fn edge_exactly_at_threshold_is_not_reported() {
        // 1/2.0 + 1/2.1 gives edge ~2.381%; set the threshold right there.
        let ev = event(vec![book("x", vec![("A", 2.0), ("B", 2.1)])]);
        let mut config = test_config();
        config.min_edge_pct = edge_pct(
            &[("A".to_string(), 2.0), ("B".to_string(), 2.1)]
                .into_iter()
                .collect(),
        );

        assert!(find_arbitrage(&ev, &config).is_none());
    }

    #[test]
    fn negative_edge_three_way_is_not_reported() {
        // 2.00/3.40/4.50 -> implied sum > 1.
        let ev = event(vec![book(
            "x",
            vec![("1", 2.00), ("X", 3.40), ("2", 4.50)],
        )]);

        assert!(find_arbitrage(&ev, &test_config()).is_none());
    }

    #[test]
    fn single_outcome_is_skipped() {
        let ev = event(vec![book("x", vec![("A", 5.0)])]);
        assert!(find_arbitrage(&ev, &test_config()).is_none());
    }

    #[test]
    fn four_outcomes_are_skipped() {
        // Four outcomes at 5.0 would be a 20% edge if it were analyzable.
        let ev = event(vec![book(
            "x",
            vec![("A", 5.0), ("B", 5.0), ("C", 5.0), ("D", 5.0)],
        )]);

        assert!(find_arbitrage(&ev, &test_config()).is_none());
    }

    #[test]
    fn no_bookmakers_is_skipped() {
        assert!(find_arbitrage(&event(vec![]), &test_config()).is_none());
    }

    #[test]
    fn whitelist_can_remove_the_arb() {
        let ev = event(vec![
            book("x", vec![("A", 2.10)]),
            book("y", vec![("B", 2.05)]),
        ]);
        let mut config = test_config();
        config.bookmaker_whitelist = vec!["x".to_string()];

        // Only one outcome survives the whitelist, so nothing to report.
        assert!(find_arbitrage(&ev, &config).is_none());
    }

    #[test]
    fn diagnosis_reports_implied_sum() {
        let ev = event(vec![book("x", vec![("A", 2.0), ("B", 2.0)])]);
        let best = best_prices(&ev.bookmakers, &std::collections::HashSet::new());

        let diagnosis = diagnose_no_arb(&best, 0.5);

        assert_eq!(diagnosis.outcome_count, 2);
        assert!((diagnosis.implied_sum - 1.0).abs() < 1e-9);
        assert!(diagnosis.to_string().contains("2 outcomes"));
    }
}
