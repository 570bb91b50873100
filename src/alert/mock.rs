//! Recording alert sink for unit testing.

use std::sync::{Arc, Mutex};

use crate::alert::AlertSink;
use crate::error::AlertError;

/// Alert sink that records messages instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct MockAlertSink {
    messages: Arc<Mutex<Vec<String>>>,
    fail_with_status: Arc<Mutex<Option<u16>>>,
}

impl MockAlertSink {
    /// Create a sink that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail with the given HTTP status.
    pub fn fail_with(&self, status: u16) {
        *self.fail_with_status.lock().unwrap() = Some(status);
    }

    /// Stop failing sends.
    pub fn recover(&self) {
        *self.fail_with_status.lock().unwrap() = None;
    }

    /// Messages recorded so far, in send order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AlertSink for MockAlertSink {
    async fn send_text(&self, text: &str) -> Result<(), AlertError> {
        if let Some(status) = *self.fail_with_status.lock().unwrap() {
            return Err(AlertError::DeliveryFailed {
                status,
                body: "mock failure".to_string(),
            });
        }

        self.messages.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
