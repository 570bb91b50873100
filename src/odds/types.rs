//! Event and odds data model for The Odds API.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::EventError;

/// Market key for moneyline / 1x2 odds, the only market type analyzed.
pub const MONEYLINE_MARKET: &str = "h2h";

/// One match/fixture with per-bookmaker odds.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event identifier.
    pub id: String,
    /// Sport key (e.g. "soccer_epl").
    #[serde(default)]
    pub sport_key: String,
    /// Human-readable sport name (e.g. "EPL").
    #[serde(default)]
    pub sport_title: String,
    /// Scheduled start time.
    #[serde(with = "time::serde::rfc3339")]
    pub commence_time: OffsetDateTime,
    /// Home participant; absent for non-team sports.
    #[serde(default)]
    pub home_team: Option<String>,
    /// Away participant; absent for non-team sports.
    #[serde(default)]
    pub away_team: Option<String>,
    /// Price listings grouped by bookmaker.
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

impl Event {
    /// Parse one raw event from the odds API response.
    ///
    /// Parsing is per-event so that one malformed payload never aborts
    /// the rest of the fetch; the error carries the event id for logging.
    pub fn from_value(raw: Value) -> Result<Self, EventError> {
        let event_id = raw
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string();

        serde_json::from_value(raw).map_err(|e| EventError::MalformedEvent {
            event_id,
            reason: e.to_string(),
        })
    }
}

/// One bookmaker's quoted markets for an event.
#[derive(Debug, Clone, Deserialize)]
pub struct Bookmaker {
    /// Stable bookmaker key.
    #[serde(default)]
    pub key: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Quoted markets.
    #[serde(default)]
    pub markets: Vec<Market>,
}

impl Bookmaker {
    /// Lower-cased identifier used for whitelist checks and alert text.
    /// Prefers the display title, falling back to the key.
    pub fn ident(&self) -> String {
        if self.title.is_empty() {
            self.key.to_lowercase()
        } else {
            self.title.to_lowercase()
        }
    }
}

/// One market (e.g. h2h) with its outcome prices.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Market type key.
    #[serde(default)]
    pub key: String,
    /// Outcome prices in the bookmaker's listing order.
    #[serde(default)]
    pub outcomes: Vec<OutcomeQuote>,
}

/// One outcome's decimal price from one bookmaker.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeQuote {
    /// Outcome label (team name, or "Draw").
    pub name: String,
    /// Decimal price. Unparseable prices become NaN and are filtered
    /// during best-price selection rather than failing the event.
    #[serde(default = "price_nan", deserialize_with = "lenient_price")]
    pub price: f64,
}

fn price_nan() -> f64 {
    f64::NAN
}

/// Accept a price as a JSON number or numeric string; anything else maps
/// to NaN so one bad listing never poisons the whole event.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

/// One sport from the /v4/sports listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Sport {
    /// Sport key used in odds requests.
    pub key: String,
    /// Sport group (e.g. "Soccer").
    #[serde(default)]
    pub group: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Whether the sport currently has events.
    #[serde(default)]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_parses_from_api_payload() {
        let raw = json!({
            "id": "e1",
            "sport_key": "soccer_epl",
            "sport_title": "EPL",
            "commence_time": "2026-09-01T15:00:00Z",
            "home_team": "Arsenal",
            "away_team": "Chelsea",
            "bookmakers": [
                {
                    "key": "pinnacle",
                    "title": "Pinnacle",
                    "markets": [
                        {
                            "key": "h2h",
                            "outcomes": [
                                {"name": "Arsenal", "price": 2.1},
                                {"name": "Chelsea", "price": 3.4},
                                {"name": "Draw", "price": 3.2}
                            ]
                        }
                    ]
                }
            ]
        });

        let event = Event::from_value(raw).unwrap();
        assert_eq!(event.id, "e1");
        assert_eq!(event.home_team.as_deref(), Some("Arsenal"));
        assert_eq!(event.bookmakers.len(), 1);
        assert_eq!(event.bookmakers[0].markets[0].outcomes[0].price, 2.1);
    }

    #[test]
    fn malformed_event_reports_its_id() {
        let raw = json!({"id": "bad-event", "commence_time": "not-a-time"});

        let err = Event::from_value(raw).unwrap_err();
        assert!(err.to_string().contains("bad-event"));
    }

    #[test]
    fn event_without_id_reports_placeholder() {
        let raw = json!({"sport_key": "soccer_epl"});

        let err = Event::from_value(raw).unwrap_err();
        assert!(err.to_string().contains('?'));
    }

    #[test]
    fn string_prices_parse() {
        let raw = json!({
            "id": "e2",
            "commence_time": "2026-09-01T15:00:00Z",
            "bookmakers": [
                {
                    "key": "bk",
                    "markets": [
                        {"key": "h2h", "outcomes": [{"name": "A", "price": "2.05"}]}
                    ]
                }
            ]
        });

        let event = Event::from_value(raw).unwrap();
        assert_eq!(event.bookmakers[0].markets[0].outcomes[0].price, 2.05);
    }

    #[test]
    fn unparseable_price_becomes_nan() {
        let raw = json!({
            "id": "e3",
            "commence_time": "2026-09-01T15:00:00Z",
            "bookmakers": [
                {
                    "key": "bk",
                    "markets": [
                        {"key": "h2h", "outcomes": [
                            {"name": "A", "price": "n/a"},
                            {"name": "B", "price": null},
                            {"name": "C"}
                        ]}
                    ]
                }
            ]
        });

        let event = Event::from_value(raw).unwrap();
        for quote in &event.bookmakers[0].markets[0].outcomes {
            assert!(quote.price.is_nan());
        }
    }

    #[test]
    fn bookmaker_ident_prefers_title() {
        let bm = Bookmaker {
            key: "pinnacle".to_string(),
            title: "Pinnacle".to_string(),
            markets: vec![],
        };
        assert_eq!(bm.ident(), "pinnacle");

        let keyed = Bookmaker {
            key: "BetFair".to_string(),
            title: String::new(),
            markets: vec![],
        };
        assert_eq!(keyed.ident(), "betfair");
    }
}
