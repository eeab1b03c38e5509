use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use consigliere::adapter::TornClient;
use consigliere::config::Config;
use consigliere::monitor::{Monitor, StateStore};
use consigliere::port::{LogNotifier, Notifier};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load("config.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("consigliere starting");

    let fetcher = match TornClient::new(&config.torn) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "Failed to build Torn client");
            std::process::exit(1);
        }
    };

    let notifier: Arc<dyn Notifier> = build_notifier(&config);

    let monitor = Monitor::new(
        fetcher.clone(),
        notifier,
        StateStore::new(config.monitor.state_file.clone()),
        config.travel.clone(),
        Duration::from_secs(config.monitor.interval_secs),
    )
    .with_company(
        fetcher,
        Duration::from_secs(config.monitor.company_interval_secs),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut handle = tokio::spawn(monitor.run_with_shutdown(shutdown_rx));

    // Let the in-flight cycle finish its commit before exiting.
    tokio::select! {
        result = &mut handle => {
            if let Err(e) = flatten(result) {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
            if let Err(e) = flatten(handle.await) {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
    }

    info!("consigliere stopped");
}

fn flatten(
    result: Result<consigliere::error::Result<()>, tokio::task::JoinError>,
) -> consigliere::error::Result<()> {
    match result {
        Ok(inner) => inner,
        Err(e) => Err(std::io::Error::other(e.to_string()).into()),
    }
}

#[cfg(feature = "telegram")]
fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    if config.telegram.enabled {
        Arc::new(consigliere::adapter::TelegramNotifier::new(&config.telegram))
    } else {
        info!("Telegram disabled; alerts go to the log only");
        Arc::new(LogNotifier)
    }
}

#[cfg(not(feature = "telegram"))]
fn build_notifier(_config: &Config) -> Arc<dyn Notifier> {
    info!("Built without telegram support; alerts go to the log only");
    Arc::new(LogNotifier)
}
