//! Application configuration loaded from environment variables.

use std::collections::HashSet;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// List-valued variables (`SPORTS`, `REGIONS`, `MARKETS`,
/// `BOOKMAKER_WHITELIST`) are comma-separated.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Credentials ===
    /// The Odds API key (https://the-odds-api.com/).
    pub theodds_api_key: String,

    /// Telegram bot token from BotFather.
    pub telegram_bot_token: String,

    /// Telegram chat ID that receives alerts.
    pub telegram_chat_id: String,

    // === Scan Selection ===
    /// Sport keys to scan each cycle.
    #[serde(default = "default_sports")]
    pub sports: Vec<String>,

    /// Bookmaker regions to request.
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,

    /// Market keys to request (only h2h is analyzed).
    #[serde(default = "default_markets")]
    pub markets: Vec<String>,

    // === Detection Parameters ===
    /// Minimum guaranteed edge (percent) required to alert.
    #[serde(default = "default_min_edge_pct")]
    pub min_edge_pct: f64,

    /// Notional bankroll the stake breakdown is computed against.
    #[serde(default = "default_bankroll")]
    pub bankroll: f64,

    /// Bookmakers to consider; empty means all.
    #[serde(default)]
    pub bookmaker_whitelist: Vec<String>,

    // === Polling ===
    /// Seconds between scan cycle starts.
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u64,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_s: u64,

    // === Server Configuration ===
    /// HTTP server port for health/metrics endpoints.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_sports() -> Vec<String> {
    vec![
        "soccer_epl".to_string(),
        "basketball_nba".to_string(),
        "icehockey_nhl".to_string(),
        "tennis_atp_singles".to_string(),
    ]
}

fn default_regions() -> Vec<String> {
    vec![
        "eu".to_string(),
        "uk".to_string(),
        "us".to_string(),
        "au".to_string(),
    ]
}

fn default_markets() -> Vec<String> {
    vec!["h2h".to_string()]
}

fn default_min_edge_pct() -> f64 {
    0.5
}

fn default_bankroll() -> f64 {
    100.0
}

fn default_poll_seconds() -> u64 {
    120
}

fn default_http_timeout() -> u64 {
    20
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.theodds_api_key.is_empty() {
            return Err("THEODDS_API_KEY is required".to_string());
        }

        if self.telegram_bot_token.is_empty() || self.telegram_chat_id.is_empty() {
            return Err("TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID are required".to_string());
        }

        if self.sports.iter().all(|s| s.trim().is_empty()) {
            return Err("SPORTS must name at least one sport".to_string());
        }

        if self.min_edge_pct < 0.0 || !self.min_edge_pct.is_finite() {
            return Err("MIN_EDGE_PCT must be a non-negative number".to_string());
        }

        if self.bankroll <= 0.0 || !self.bankroll.is_finite() {
            return Err("BANKROLL must be a positive number".to_string());
        }

        if self.poll_seconds == 0 {
            return Err("POLL_SECONDS must be at least 1".to_string());
        }

        Ok(())
    }

    /// Whitelisted bookmaker identifiers, lower-cased. Empty means all.
    pub fn whitelist(&self) -> HashSet<String> {
        self.bookmaker_whitelist
            .iter()
            .map(|b| b.trim().to_lowercase())
            .filter(|b| !b.is_empty())
            .collect()
    }

    /// Regions joined for the odds API query string.
    pub fn regions_param(&self) -> String {
        self.regions.join(",")
    }

    /// Markets joined for the odds API query string.
    pub fn markets_param(&self) -> String {
        self.markets.join(",")
    }
}
