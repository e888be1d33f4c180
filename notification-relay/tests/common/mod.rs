use notification_relay::config::{RelayConfig, TelegramConfig};
use notification_relay::startup::Application;
use service_core::config::Config as CoreConfig;
use wiremock::MockServer;

pub const TEST_BOT_TOKEN: &str = "123456:test-token";

pub struct TestApp {
    pub address: String,
    /// Stands in for the Telegram Bot API.
    pub telegram: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_token(Some(TEST_BOT_TOKEN)).await
    }

    pub async fn spawn_with_token(token: Option<&str>) -> Self {
        Self::spawn_with(token, None).await
    }

    /// Spawn the relay. `api_base_url` overrides the mock server as the
    /// upstream, e.g. to point at an address nothing listens on.
    pub async fn spawn_with(token: Option<&str>, api_base_url: Option<String>) -> Self {
        let telegram = MockServer::start().await;
        let api_base_url = api_base_url.unwrap_or_else(|| telegram.uri());

        // Use random port for testing (port 0)
        let config = RelayConfig {
            common: CoreConfig { port: 0 },
            telegram: TelegramConfig::new(token.map(str::to_string), api_base_url),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, telegram }
    }

    pub fn send_message_path(&self) -> String {
        format!("/bot{}/sendMessage", TEST_BOT_TOKEN)
    }

    /// Bodies of every request Telegram received, parsed as JSON.
    pub async fn telegram_payloads(&self) -> Vec<serde_json::Value> {
        self.telegram
            .received_requests()
            .await
            .expect("Request recording is enabled")
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("Telegram payload is JSON"))
            .collect()
    }

    pub async fn post_notification(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/notification", self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
