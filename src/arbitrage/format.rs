//! Alert message rendering.
//!
//! Pure text rendering for Telegram delivery; total for any well-formed
//! opportunity.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::calculator::ArbOpportunity;
use crate::config::Config;

/// Fixed cautionary footer appended to every alert.
const FOOTER: &str = "⚠️ Check bookmaker limits and rules. Odds move fast.";

/// Render an opportunity as a multi-line alert message.
pub fn format_alert(opp: &ArbOpportunity) -> String {
    let mut lines = vec![
        format!("🎯 Arbitrage found ({})", opp.sport_title),
        format!("⏱ {}", format_time(opp.commence_time)),
        format!(
            "🏟 {} vs {}",
            opp.home_team.as_deref().unwrap_or("?"),
            opp.away_team.as_deref().unwrap_or("?")
        ),
        String::new(),
        "📈 Best prices:".to_string(),
    ];

    for (outcome, price) in &opp.best_prices {
        let book = opp.best_books.get(outcome).map(String::as_str).unwrap_or("?");
        lines.push(format!("• {}: {} (book: {})", outcome, price, book));
    }

    lines.push(String::new());
    lines.push(format!(
        "💰 Guaranteed edge: {}% on a ${} bankroll",
        opp.edge_pct, opp.bankroll
    ));

    let stake_parts: Vec<String> = opp
        .stakes
        .iter()
        .map(|(outcome, stake)| format!("{}: ${:.2}", outcome, stake))
        .collect();
    lines.push(format!("Stake split: {}", stake_parts.join(" | ")));

    lines.push(String::new());
    lines.push(FOOTER.to_string());

    lines.join("\n")
}

/// Startup banner announcing the active configuration.
pub fn startup_banner(config: &Config) -> String {
    let whitelist = if config.bookmaker_whitelist.is_empty() {
        "ALL".to_string()
    } else {
        let mut books: Vec<String> = config.whitelist().into_iter().collect();
        books.sort();
        books.join(", ")
    };

    format!(
        "🏁 Sports Arbitrage Bot started\n\
         Sports: {}\n\
         Regions: {}\n\
         Markets: {}\n\
         Min edge %: {} | Poll: {}s\n\
         Whitelist: {}",
        config.sports.join(", "),
        config.regions.join(", "),
        config.markets.join(", "),
        config.min_edge_pct,
        config.poll_seconds,
        whitelist
    )
}

fn format_time(time: OffsetDateTime) -> String {
    time.format(&Rfc3339).unwrap_or_else(|_| "?".to_string())
}
