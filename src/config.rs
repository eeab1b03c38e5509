//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values: `TORN_API_KEY` and `TELEGRAM_BOT_TOKEN`
//! are read from the environment at load time and never from the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub torn: TornConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub travel: TravelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Torn API access configuration.
///
/// The API key is loaded from the `TORN_API_KEY` env var at runtime
/// (never from the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct TornConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(skip)]
    pub api_key: String,
    /// Request timeout in seconds for a single API call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.torn.com".into()
}

const fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for TornConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Telegram notification configuration.
///
/// The bot token is loaded from the `TELEGRAM_BOT_TOKEN` env var at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Enable telegram notifications (falls back to log-only when off).
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Target chat for all notifications (single authorized recipient).
    #[serde(default)]
    pub chat_id: i64,
    #[serde(skip)]
    pub bot_token: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chat_id: 0,
            bot_token: String::new(),
        }
    }
}

/// Background monitor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Poll period in seconds.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Company check period in seconds.
    #[serde(default = "default_company_interval_secs")]
    pub company_interval_secs: u64,
    /// Path of the persisted monitor state record.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

const fn default_interval_secs() -> u64 {
    60
}

const fn default_company_interval_secs() -> u64 {
    300
}

fn default_state_file() -> PathBuf {
    PathBuf::from("state.json")
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            company_interval_secs: default_company_interval_secs(),
            state_file: default_state_file(),
        }
    }
}

/// Travel advisor configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TravelConfig {
    /// Whether the account owns a Large Suitcase (+10 carry capacity).
    #[serde(default)]
    pub large_suitcase: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

const fn default_true() -> bool {
    true
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // Secrets come from the environment, never from the config file.
        config.torn.api_key = std::env::var("TORN_API_KEY").unwrap_or_default();
        config.telegram.bot_token = std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.torn.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.torn.api_key.is_empty() {
            return Err(ConfigError::MissingEnv {
                var: "TORN_API_KEY",
            }
            .into());
        }
        if self.monitor.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.monitor.company_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "company_interval_secs",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.telegram.enabled {
            if self.telegram.bot_token.is_empty() {
                return Err(ConfigError::MissingEnv {
                    var: "TELEGRAM_BOT_TOKEN",
                }
                .into());
            }
            if self.telegram.chat_id == 0 {
                return Err(ConfigError::MissingField { field: "chat_id" }.into());
            }
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            torn: TornConfig::default(),
            telegram: TelegramConfig::default(),
            monitor: MonitorConfig::default(),
            travel: TravelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
