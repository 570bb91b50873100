//! Scan cycle and polling helpers.
//!
//! One cycle fetches odds for every configured sport, runs each event
//! through the arbitrage engine, and delivers alerts. A failed fetch
//! skips that sport for the cycle; a malformed event skips that event.
//! Alert delivery failures propagate to the caller, which decides what
//! to do with the rest of the cycle.

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::alert::AlertSink;
use crate::arbitrage::{find_arbitrage, format_alert};
use crate::config::Config;
use crate::error::{BotError, Result};
use crate::metrics;
use crate::odds::{Event, OddsSource};

/// Counters from one scan cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Sports fetched successfully.
    pub sports_scanned: u64,
    /// Sports skipped because the fetch failed.
    pub sports_failed: u64,
    /// Events analyzed.
    pub events_scanned: u64,
    /// Events skipped as malformed.
    pub events_skipped: u64,
    /// Opportunities the engine produced.
    pub opportunities_found: u64,
    /// Alerts delivered to the sink.
    pub alerts_sent: u64,
}

/// Run one full scan cycle over every configured sport.
#[instrument(skip_all)]
pub async fn scan_once<S, A>(source: &S, sink: &A, config: &Config) -> Result<CycleReport>
where
    S: OddsSource + ?Sized,
    A: AlertSink + ?Sized,
{
    let regions = config.regions_param();
    let markets = config.markets_param();
    let mut report = CycleReport::default();

    for sport in &config.sports {
        let fetch_start = Instant::now();
        let raw_events = match source.fetch_odds(sport, &regions, &markets).await {
            Ok(events) => {
                metrics::record_fetch_latency(fetch_start, sport);
                events
            }
            Err(e) => {
                warn!(sport = %sport, error = %e, "Odds fetch failed, skipping sport");
                metrics::inc_fetch_failures();
                report.sports_failed += 1;
                sink.send_text(&format!("⚠️ Odds fetch failed for {}: {}", sport, e))
                    .await
                    .map_err(BotError::from)?;
                continue;
            }
        };
        report.sports_scanned += 1;

        for raw in raw_events {
            let event = match Event::from_value(raw) {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed event");
                    report.events_skipped += 1;
                    sink.send_text(&format!("⚠️ Skipping event: {}", e))
                        .await
                        .map_err(BotError::from)?;
                    continue;
                }
            };

            report.events_scanned += 1;
            metrics::inc_events_scanned();

            if let Some(opportunity) = find_arbitrage(&event, config) {
                report.opportunities_found += 1;
                metrics::inc_opportunities_detected();

                sink.send_text(&format_alert(&opportunity))
                    .await
                    .map_err(BotError::from)?;
                report.alerts_sent += 1;
                metrics::inc_alerts_sent();
            }
        }
    }

    info!(
        sports = report.sports_scanned,
        events = report.events_scanned,
        alerts = report.alerts_sent,
        "Scan cycle complete"
    );

    Ok(report)
}

/// Time to sleep so cycles start a fixed interval apart.
///
/// Cycle duration is subtracted from the interval with a floor of zero:
/// a slow cycle is followed immediately by the next one, never by a
/// catch-up burst.
pub fn poll_delay(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}

/// Resolves when the process receives ctrl-c.
pub async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
