use super::{DeliveryError, Notifier};
use crate::config::TelegramConfig;
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

const PARSE_MODE: &str = "Markdown";

/// Body of the Bot API `sendMessage` call.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
}

impl<'a> SendMessageRequest<'a> {
    pub fn new(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: PARSE_MODE,
        }
    }
}

pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn send_message_url(&self, token: &str) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base_url.trim_end_matches('/'),
            token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, chat_id: &str, message: &str) -> Result<(), DeliveryError> {
        let token = self
            .config
            .bot_token
            .as_ref()
            .ok_or(DeliveryError::MissingCredential)?;

        let url = self.send_message_url(token.expose_secret());
        let body = serde_json::to_vec(&SendMessageRequest::new(chat_id, message))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        // Body is never read; dropping the response releases the connection.
        drop(response);

        if !status.is_success() {
            return Err(DeliveryError::UpstreamStatus(status));
        }

        tracing::info!(chat_id = %chat_id, "Notification delivered via Telegram");

        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.config.bot_token.is_some()
    }
}

/// Mock notifier for testing
pub struct MockNotifier {
    fail_with: Option<StatusCode>,
    send_count: AtomicU64,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            fail_with: None,
            send_count: AtomicU64::new(0),
        }
    }

    /// Every delivery fails as if Telegram had answered with `status`.
    pub fn failing(status: StatusCode) -> Self {
        Self {
            fail_with: Some(status),
            send_count: AtomicU64::new(0),
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn deliver(&self, chat_id: &str, message: &str) -> Result<(), DeliveryError> {
        self.send_count.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.fail_with {
            return Err(DeliveryError::UpstreamStatus(status));
        }

        tracing::info!(
            chat_id = %chat_id,
            message_length = %message.len(),
            "[MOCK] Notification would be sent"
        );

        Ok(())
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_uses_markdown_parse_mode() {
        let payload = serde_json::to_value(SendMessageRequest::new("123", "*hi*")).unwrap();
        assert_eq!(
            payload,
            json!({"chat_id": "123", "text": "*hi*", "parse_mode": "Markdown"})
        );
    }

    #[test]
    fn url_embeds_token_as_path_segment() {
        let notifier = TelegramNotifier::new(TelegramConfig::new(
            Some("42:secret".to_string()),
            "https://api.telegram.org/",
        ));
        assert_eq!(
            notifier.send_message_url("42:secret"),
            "https://api.telegram.org/bot42:secret/sendMessage"
        );
    }

    #[tokio::test]
    async fn missing_token_fails_without_network_call() {
        // Unroutable base URL: reaching the network would surface as Transport.
        let notifier = TelegramNotifier::new(TelegramConfig::new(None, "http://0.0.0.0:1"));
        assert!(!notifier.is_configured());

        let err = notifier.deliver("123", "hi").await.unwrap_err();
        assert!(matches!(err, DeliveryError::MissingCredential));
    }

    #[tokio::test]
    async fn failing_mock_reports_upstream_status() {
        let notifier = MockNotifier::failing(StatusCode::BAD_GATEWAY);
        let err = notifier.deliver("123", "hi").await.unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::UpstreamStatus(StatusCode::BAD_GATEWAY)
        ));
        assert_eq!(notifier.send_count(), 1);
    }
}
