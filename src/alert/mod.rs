//! Alert sink: Telegram delivery of rendered messages.

use crate::error::AlertError;

pub mod mock;
pub mod telegram;

pub use mock::MockAlertSink;
pub use telegram::TelegramClient;

/// Destination for rendered alert text.
///
/// Delivery is atomic: the message either reaches the sink or the call
/// fails; there is no partial delivery.
#[async_trait::async_trait]
pub trait AlertSink: Send + Sync {
    /// Send one text message.
    async fn send_text(&self, text: &str) -> Result<(), AlertError>;
}
