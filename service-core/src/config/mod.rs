use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8081
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// `APP_PORT` style variables; nested keys use `__` (`APP_SERVER__HOST`).
fn app_environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

impl Config {
    /// Load the common settings from an optional `configuration` file and
    /// `APP_*` environment variables.
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(app_environment())
    }

    fn load_from(environment: Environment) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(environment)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Result of reading a local `.env` file.
///
/// The file has to be read before the tracing subscriber is installed so
/// that `RUST_LOG` from it takes effect, which is also why the outcome is
/// returned for logging later instead of logged here.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    Failed(String),
}

impl DotenvOutcome {
    fn from_result(result: dotenvy::Result<PathBuf>) -> Self {
        match result {
            Ok(path) => DotenvOutcome::Loaded(path),
            Err(e) if e.not_found() => DotenvOutcome::NotFound,
            Err(e) => DotenvOutcome::Failed(e.to_string()),
        }
    }

    pub fn log(&self) {
        match self {
            DotenvOutcome::Loaded(path) => {
                tracing::info!("Loaded environment overrides from {}", path.display())
            }
            DotenvOutcome::NotFound => {
                tracing::warn!(".env file not found, using process environment")
            }
            DotenvOutcome::Failed(e) => tracing::warn!("Failed to load .env file: {}", e),
        }
    }
}

/// Best-effort load of a local `.env` file. A missing file is not an error.
pub fn load_dotenv() -> DotenvOutcome {
    DotenvOutcome::from_result(dotenvy::dotenv())
}
