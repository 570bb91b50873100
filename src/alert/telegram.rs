//! Telegram Bot API client.

use serde_json::json;
use tracing::{debug, instrument};

use crate::alert::AlertSink;
use crate::config::Config;
use crate::error::AlertError;

/// Default base URL for the Telegram Bot API.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Telegram client delivering alerts to a single chat.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Bot API base, including the bot token path segment.
    base: String,
    /// Target chat ID.
    chat_id: String,
}

impl TelegramClient {
    /// Create a new Telegram client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_s))
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base: format!("{}/bot{}", DEFAULT_API_URL, config.telegram_bot_token),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    /// Override the API base URL (for tests against a local server).
    pub fn with_api_url(config: &Config, api_url: &str) -> Self {
        let mut client = Self::new(config);
        client.base = format!("{}/bot{}", api_url, config.telegram_bot_token);
        client
    }

    #[instrument(skip(self, payload), fields(method = %method))]
    async fn post(&self, method: &str, payload: serde_json::Value) -> Result<(), AlertError> {
        let url = format!("{}/{}", self.base, method);

        let response = self.http.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::DeliveryFailed { status, body });
        }

        debug!("Telegram message delivered");

        Ok(())
    }
}

#[async_trait::async_trait]
impl AlertSink for TelegramClient {
    async fn send_text(&self, text: &str) -> Result<(), AlertError> {
        self.post(
            "sendMessage",
            json!({
                "chat_id": self.chat_id,
                "text": text,
            }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;

    #[test]
    fn base_url_embeds_the_bot_token() {
        let client = TelegramClient::new(&test_config());
        assert!(client.base.starts_with("https://api.telegram.org/bot"));
        assert!(client.base.contains("123456:token"));
    }

    #[test]
    fn api_url_override_works() {
        let client = TelegramClient::with_api_url(&test_config(), "http://localhost:9999");
        assert!(client.base.starts_with("http://localhost:9999/bot"));
    }
}
