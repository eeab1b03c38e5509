use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("missing required environment variable: {var}")]
    MissingEnv { var: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors from the snapshot fetcher boundary.
///
/// Carries a retryable/non-retryable distinction: the scheduler skips the
/// cycle and waits for the next tick on retryable errors, and escalates on
/// non-retryable ones (bad API key, insufficient permissions).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Torn API error {code}: {message}")]
    Api { code: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Whether the next scheduled tick should retry the fetch.
    ///
    /// Torn error codes 1/2 (missing or incorrect key) and 16 (access level
    /// too low) indicate a misconfigured key and never heal on their own.
    /// Rate limits, maintenance windows, and transport failures do.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { code, .. } => !matches!(code, 1 | 2 | 16),
            Self::Http(_) | Self::Malformed(_) => true,
        }
    }
}

/// Notification delivery errors.
///
/// Per-event and non-fatal: a failed delivery for one alert never blocks
/// the rest of the cycle.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to send message: {0}")]
    Send(String),

    #[error("notification channel closed")]
    ChannelClosed,
}

/// Persisted state store errors.
///
/// Fatal to the process: a state record that cannot be committed would
/// replay the same alerts on every restart.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to read state file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write state file: {0}")]
    Write(#[source] std::io::Error),

    #[error("corrupt state file: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
