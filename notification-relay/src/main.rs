use notification_relay::config::RelayConfig;
use notification_relay::startup::Application;
use service_core::config::load_dotenv;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Before the subscriber, so RUST_LOG from .env is honoured.
    let dotenv = load_dotenv();
    init_tracing("notification-relay", "info");
    dotenv.log();

    let config = RelayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start server: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
