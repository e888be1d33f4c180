use config::{Config as Cfg, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub telegram: TelegramConfig,
}

/// Read from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_API_BASE_URL`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot credential. `None` is allowed at startup; every delivery then
    /// fails with a configuration error.
    #[serde(default)]
    pub bot_token: Option<Secret<String>>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_TELEGRAM_API_BASE_URL.to_string()
}

fn telegram_environment() -> Environment {
    Environment::with_prefix("TELEGRAM").prefix_separator("_")
}

impl TelegramConfig {
    pub fn new(bot_token: Option<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.map(Secret::new),
            api_base_url: api_base_url.into(),
        }
        .normalized()
    }

    pub fn load() -> Result<Self, AppError> {
        Self::load_from(telegram_environment())
    }

    fn load_from(environment: Environment) -> Result<Self, AppError> {
        let config: TelegramConfig = Cfg::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(config.normalized())
    }

    /// Empty values count as unset.
    fn normalized(mut self) -> Self {
        if self
            .bot_token
            .as_ref()
            .is_some_and(|t| t.expose_secret().is_empty())
        {
            self.bot_token = None;
        }
        if self.api_base_url.is_empty() {
            self.api_base_url = default_api_base_url();
        }
        self
    }
}

impl RelayConfig {
    /// Load configuration from the process environment. Any `.env` file must
    /// already have been applied with [`core_config::load_dotenv`].
    pub fn load() -> Result<Self, AppError> {
        Ok(RelayConfig {
            common: core_config::Config::load()?,
            telegram: TelegramConfig::load()?,
        })
    }
}
