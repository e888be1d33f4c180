pub mod telegram;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub use telegram::{MockNotifier, SendMessageRequest, TelegramNotifier};

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Configuration error: TELEGRAM_BOT_TOKEN is not set")]
    MissingCredential,

    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request to Telegram failed: {0}")]
    Transport(reqwest::Error),

    #[error("Telegram returned unexpected status: {0}")]
    UpstreamStatus(StatusCode),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the request URL in its messages, and ours carries
        // the bot token.
        DeliveryError::Transport(err.without_url())
    }
}

/// One outbound delivery attempt per call. Implementations never retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, chat_id: &str, message: &str) -> Result<(), DeliveryError>;

    /// Whether a credential is available. Deliveries fail fast when it is not.
    fn is_configured(&self) -> bool;
}
