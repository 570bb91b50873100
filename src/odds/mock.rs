//! Mock odds source for unit testing.
//!
//! Scripts per-sport responses so scanner behavior can be exercised
//! without network requests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::OddsError;
use crate::odds::OddsSource;

/// Scripted response for one sport.
#[derive(Debug, Clone)]
enum Scripted {
    Events(Vec<Value>),
    FailWith { status: u16, body: String },
}

/// Mock odds source returning scripted per-sport results.
#[derive(Debug, Clone, Default)]
pub struct MockOddsSource {
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockOddsSource {
    /// Create an empty mock; unscripted sports return no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for a sport.
    pub fn set_events(&self, sport: &str, events: Vec<Value>) {
        self.responses
            .lock()
            .unwrap()
            .insert(sport.to_string(), Scripted::Events(events));
    }

    /// Script a fetch failure for a sport.
    pub fn set_failure(&self, sport: &str, status: u16, body: &str) {
        self.responses.lock().unwrap().insert(
            sport.to_string(),
            Scripted::FailWith {
                status,
                body: body.to_string(),
            },
        );
    }

    /// Sports fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OddsSource for MockOddsSource {
    async fn fetch_odds(
        &self,
        sport: &str,
        _regions: &str,
        _markets: &str,
    ) -> Result<Vec<Value>, OddsError> {
        self.calls.lock().unwrap().push(sport.to_string());

        match self.responses.lock().unwrap().get(sport) {
            Some(Scripted::Events(events)) => Ok(events.clone()),
            Some(Scripted::FailWith { status, body }) => Err(OddsError::ApiError {
                sport: sport.to_string(),
                status: *status,
                body: body.clone(),
            }),
            None => Ok(vec![]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn scripted_events_are_returned() {
        let source = MockOddsSource::new();
        source.set_events("soccer_epl", vec![json!({"id": "e1"})]);

        let events = source.fetch_odds("soccer_epl", "eu", "h2h").await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(source.calls(), vec!["soccer_epl".to_string()]);
    }

    #[tokio::test]
    async fn scripted_failure_is_returned() {
        let source = MockOddsSource::new();
        source.set_failure("basketball_nba", 500, "server error");

        let err = source
            .fetch_odds("basketball_nba", "eu", "h2h")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("basketball_nba"));
    }

    #[tokio::test]
    async fn unscripted_sport_returns_no_events() {
        let source = MockOddsSource::new();
        let events = source.fetch_odds("tennis_atp", "eu", "h2h").await.unwrap();
        assert!(events.is_empty());
    }
}
