//! Integration tests for configuration loading.

use std::io::Write;
use std::sync::Mutex;

use consigliere::config::Config;
use consigliere::error::{ConfigError, Error};
use tempfile::NamedTempFile;

/// Serializes tests that modify process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn set_secrets() {
    std::env::set_var("TORN_API_KEY", "test-torn-key");
    std::env::set_var("TELEGRAM_BOT_TOKEN", "test-bot-token");
}

fn clear_secrets() {
    std::env::remove_var("TORN_API_KEY");
    std::env::remove_var("TELEGRAM_BOT_TOKEN");
}

#[test]
fn minimal_config_loads_with_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_secrets();

    let file = write_config(
        r#"
[telegram]
chat_id = 123456
"#,
    );
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.torn.api_url, "https://api.torn.com");
    assert_eq!(config.torn.api_key, "test-torn-key");
    assert_eq!(config.monitor.interval_secs, 60);
    assert_eq!(config.monitor.company_interval_secs, 300);
    assert_eq!(config.telegram.chat_id, 123456);
    assert!(config.telegram.enabled);
    assert!(!config.travel.large_suitcase);
    assert_eq!(config.logging.level, "info");

    clear_secrets();
}

#[test]
fn sections_override_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_secrets();

    let file = write_config(
        r#"
[telegram]
chat_id = 42

[monitor]
interval_secs = 30
state_file = "/tmp/consigliere-state.json"

[travel]
large_suitcase = true

[logging]
level = "debug"
format = "json"
"#,
    );
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.monitor.interval_secs, 30);
    assert_eq!(
        config.monitor.state_file.to_str().unwrap(),
        "/tmp/consigliere-state.json"
    );
    assert!(config.travel.large_suitcase);
    assert_eq!(config.logging.format, "json");

    clear_secrets();
}

#[test]
fn missing_torn_key_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_secrets();

    let file = write_config("[telegram]\nchat_id = 1\n");
    let result = Config::load(file.path());

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingEnv {
            var: "TORN_API_KEY"
        }))
    ));
}

#[test]
fn telegram_enabled_requires_chat_id() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_secrets();

    let file = write_config("");
    let result = Config::load(file.path());
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "chat_id" }))
    ));

    clear_secrets();
}

#[test]
fn disabled_telegram_needs_no_bot_settings() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_secrets();
    std::env::set_var("TORN_API_KEY", "test-torn-key");

    let file = write_config("[telegram]\nenabled = false\n");
    let config = Config::load(file.path()).unwrap();
    assert!(!config.telegram.enabled);

    clear_secrets();
}

#[test]
fn zero_interval_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_secrets();

    let file = write_config("[telegram]\nchat_id = 1\n\n[monitor]\ninterval_secs = 0\n");
    let result = Config::load(file.path());
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { .. }))
    ));

    clear_secrets();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_secrets();

    let file = write_config("[telegram\nchat_id = ");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));

    clear_secrets();
}
