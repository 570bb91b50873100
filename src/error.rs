//! Unified error types for the arbitrage scanner.

use thiserror::Error;

/// Unified error type for the arbitrage scanner.
#[derive(Error, Debug)]
pub enum BotError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Odds fetch error.
    #[error("odds error: {0}")]
    Odds(#[from] OddsError),

    /// Per-event analysis error.
    #[error("event error: {0}")]
    Event(#[from] EventError),

    /// Alert delivery error.
    #[error("alert error: {0}")]
    Alert(#[from] AlertError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Odds provider fetch errors. These are transient: the affected sport is
/// skipped for the current cycle and retried on the next poll.
#[derive(Error, Debug)]
pub enum OddsError {
    /// Non-success response for one sport's odds request.
    #[error("odds api returned HTTP {status} for {sport}: {body}")]
    ApiError {
        /// The sport key that was requested.
        sport: String,
        /// HTTP status code.
        status: u16,
        /// Response body (truncated by the caller for logging).
        body: String,
    },

    /// Failed to parse the response body.
    #[error("failed to parse odds response for {sport}: {reason}")]
    ParseError {
        /// The sport key that was requested.
        sport: String,
        /// Reason for failure.
        reason: String,
    },

    /// HTTP request failed.
    #[error("odds request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Per-event analysis errors. A malformed event is skipped; the rest of
/// the fetch proceeds.
#[derive(Error, Debug)]
pub enum EventError {
    /// Event payload did not match the expected shape.
    #[error("malformed event {event_id}: {reason}")]
    MalformedEvent {
        /// Event identifier, or "?" when the payload carries none.
        event_id: String,
        /// Reason for failure.
        reason: String,
    },
}

/// Alert delivery errors. Delivery is atomic: the message was either
/// accepted by Telegram or it was not.
#[derive(Error, Debug)]
pub enum AlertError {
    /// Telegram rejected the message.
    #[error("telegram returned HTTP {status}: {body}")]
    DeliveryFailed {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// HTTP request failed.
    #[error("telegram request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_error_names_the_sport() {
        let err = OddsError::ApiError {
            sport: "soccer_epl".to_string(),
            status: 401,
            body: "invalid key".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("soccer_epl"));
        assert!(msg.contains("401"));
    }

    #[test]
    fn event_error_names_the_event() {
        let err = EventError::MalformedEvent {
            event_id: "abc123".to_string(),
            reason: "missing field `id`".to_string(),
        };
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn errors_convert_into_bot_error() {
        let err: BotError = AlertError::DeliveryFailed {
            status: 502,
            body: "bad gateway".to_string(),
        }
        .into();
        assert!(matches!(err, BotError::Alert(_)));
    }
}
