//! The Odds API client wrapper.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::OddsError;
use crate::odds::types::Sport;
use crate::odds::OddsSource;

/// Default base URL for The Odds API.
pub const DEFAULT_BASE_URL: &str = "https://api.the-odds-api.com/v4";

/// HTTP client for The Odds API.
#[derive(Debug, Clone)]
pub struct TheOddsApiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the v4 API.
    base_url: String,
    /// API key sent with every request.
    api_key: String,
}

impl TheOddsApiClient {
    /// Create a new client from config with pooled HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_s))
            .connect_timeout(std::time::Duration::from_secs(5))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: config.theodds_api_key.clone(),
        }
    }

    /// Override the base URL (for tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the sports the API currently offers.
    #[instrument(skip(self))]
    pub async fn fetch_sports(&self) -> Result<Vec<Sport>, OddsError> {
        let url = format!("{}/sports", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(OddsError::ApiError {
                sport: "sports-listing".to_string(),
                status,
                body,
            });
        }

        let sports: Vec<Sport> = response.json().await.map_err(|e| OddsError::ParseError {
            sport: "sports-listing".to_string(),
            reason: e.to_string(),
        })?;

        debug!(count = sports.len(), "Fetched sports listing");

        Ok(sports)
    }
}

#[async_trait::async_trait]
impl OddsSource for TheOddsApiClient {
    /// Fetch odds for one sport. Events are returned raw so the caller
    /// can parse them individually.
    #[instrument(skip(self), fields(sport = %sport))]
    async fn fetch_odds(
        &self,
        sport: &str,
        regions: &str,
        markets: &str,
    ) -> Result<Vec<Value>, OddsError> {
        let url = format!("{}/sports/{}/odds", self.base_url, sport);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", regions),
                ("markets", markets),
                ("oddsFormat", "decimal"),
                ("dateFormat", "iso"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(OddsError::ApiError {
                sport: sport.to_string(),
                status,
                body,
            });
        }

        let events: Vec<Value> = response.json().await.map_err(|e| OddsError::ParseError {
            sport: sport.to_string(),
            reason: e.to_string(),
        })?;

        debug!(count = events.len(), "Fetched events");

        Ok(events)
    }
}
