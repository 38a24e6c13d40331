use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model requested when the client does not name one.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-pro";

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openrouter: OpenRouterSettings,
    pub default_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterSettings {
    pub api_key: Secret<String>,
    pub base_url: String,
    /// Unset means no client-side timeout beyond reqwest's defaults.
    pub timeout_secs: Option<u64>,
}

impl OpenRouterSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let api_key = get_env("OPENROUTER_API_KEY", None).map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!(
                "OPENROUTER_API_KEY not found in environment variables. Please set it in your .env file."
            ))
        })?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "OPENROUTER_API_KEY is set but empty"
            )));
        }

        let timeout_secs = match env::var("OPENROUTER_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "OPENROUTER_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?),
            Err(_) => None,
        };

        Ok(RelayConfig {
            common: common_config,
            openrouter: OpenRouterSettings {
                api_key: Secret::new(api_key),
                base_url: get_env("OPENROUTER_BASE_URL", Some(DEFAULT_OPENROUTER_BASE_URL))?,
                timeout_secs,
            },
            default_model: get_env("RELAY_DEFAULT_MODEL", Some(DEFAULT_MODEL))?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.openrouter.api_key.expose_secret().is_empty()
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
