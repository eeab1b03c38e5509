//! Background poll scheduler.
//!
//! Drives fetch -> detect -> notify -> commit on a fixed period for the
//! lifetime of the process. One cycle runs to completion before the next
//! tick is considered; ticks that would overlap are skipped, not queued.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::TravelConfig;
use crate::error::Result;
use crate::monitor::company::check_company;
use crate::monitor::detector::detect;
use crate::monitor::format::{format_alert, format_company_alert};
use crate::monitor::state::{MonitorState, StateStore};
use crate::port::{CompanyFetcher, Notifier, SnapshotFetcher};

/// The background monitoring engine.
pub struct Monitor {
    fetcher: Arc<dyn SnapshotFetcher>,
    notifier: Arc<dyn Notifier>,
    store: StateStore,
    travel_cfg: TravelConfig,
    interval: Duration,
    company: Option<CompanyCheck>,
}

struct CompanyCheck {
    fetcher: Arc<dyn CompanyFetcher>,
    interval: Duration,
}

impl Monitor {
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn SnapshotFetcher>,
        notifier: Arc<dyn Notifier>,
        store: StateStore,
        travel_cfg: TravelConfig,
        interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            store,
            travel_cfg,
            interval,
            company: None,
        }
    }

    /// Attach the slower company stock/staff check.
    #[must_use]
    pub fn with_company(mut self, fetcher: Arc<dyn CompanyFetcher>, interval: Duration) -> Self {
        self.company = Some(CompanyCheck { fetcher, interval });
        self
    }

    /// Run until the process is killed.
    pub async fn run(self) -> Result<()> {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        self.run_with_shutdown(shutdown_rx).await
    }

    /// Run until a shutdown signal arrives.
    ///
    /// The in-flight cycle always finishes its commit before this returns.
    pub async fn run_with_shutdown(self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        let mut state = self.store.load()?;
        if !state.initialized {
            info!("No prior monitor state; first cycle will absorb current conditions");
        }

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut company_ticker = tokio::time::interval(
            self.company
                .as_ref()
                .map_or(Duration::from_secs(3600), |c| c.interval),
        );
        company_ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        info!(interval_secs = self.interval.as_secs(), "Monitor started");

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!("Shutdown signal received");
                                break;
                            }
                        }
                        Err(_) => {
                            info!("Shutdown channel closed");
                            break;
                        }
                    }
                }
                _ = ticker.tick() => {
                    if let Some(next) = self.run_cycle(&state).await? {
                        state = next;
                    }
                }
                _ = company_ticker.tick(), if self.company.is_some() => {
                    if let Some(next) = self.run_company_cycle(&state).await? {
                        state = next;
                    }
                }
            }
        }

        info!("Monitor stopped");
        Ok(())
    }

    /// Run one poll cycle against the given previous state.
    ///
    /// Returns the committed next state, or `None` when the cycle was
    /// skipped on a retryable fetch failure (state untouched; the retry
    /// waits for the next scheduled tick, never a tight loop).
    ///
    /// # Errors
    ///
    /// Escalates non-retryable fetch errors and state-commit failures;
    /// both mean the loop cannot make progress.
    pub async fn run_cycle(&self, prev: &MonitorState) -> Result<Option<MonitorState>> {
        let snapshot = match self.fetcher.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_retryable() => {
                warn!(error = %e, "Fetch failed; retrying on next tick");
                return Ok(None);
            }
            Err(e) => {
                error!(error = %e, "Fetch failed with non-retryable error");
                return Err(e.into());
            }
        };

        let now = Utc::now().timestamp();
        let detection = detect(prev, &snapshot, now);

        debug!(alerts = detection.alerts.len(), "Cycle detected");

        // Best-effort dispatch: one failed delivery never blocks the rest.
        for alert in &detection.alerts {
            let text = format_alert(alert, &snapshot, &self.travel_cfg);
            match self.notifier.send(&text).await {
                Ok(()) => info!(kind = alert.kind(), "Alert delivered"),
                Err(e) => warn!(kind = alert.kind(), error = %e, "Failed to deliver alert"),
            }
        }

        // Commit only after every alert has been attempted. A crash before
        // this point re-detects (and re-sends) on restart; duplicates are
        // the accepted tradeoff over missed alerts.
        self.store.save(&detection.next).map_err(|e| {
            error!(error = %e, "Failed to commit monitor state");
            e
        })?;

        Ok(Some(detection.next))
    }

    /// Run one company check against the given previous state.
    ///
    /// Returns an updated state only when the check disabled itself; stock
    /// and staff alerts carry no detection state of their own. A key
    /// without company access (non-retryable fetch error) flips the
    /// persisted `company_enabled` flag off and reports it once.
    pub async fn run_company_cycle(&self, prev: &MonitorState) -> Result<Option<MonitorState>> {
        let Some(company) = &self.company else {
            return Ok(None);
        };
        if !prev.company_enabled {
            return Ok(None);
        }

        let snapshot = match company.fetcher.fetch_company().await {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_retryable() => {
                warn!(error = %e, "Company fetch failed; retrying on next tick");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "Company data inaccessible; disabling company checks");
                let next = MonitorState {
                    company_enabled: false,
                    ..prev.clone()
                };
                self.store.save(&next)?;
                let text = format_company_alert(&crate::domain::Alert::CompanyMonitorDisabled);
                if let Err(e) = self.notifier.send(&text).await {
                    warn!(error = %e, "Failed to deliver company-disabled notice");
                }
                return Ok(Some(next));
            }
        };

        let now = Utc::now().timestamp();
        let alerts = check_company(&snapshot, now);
        debug!(alerts = alerts.len(), "Company check ran");

        for alert in &alerts {
            let text = format_company_alert(alert);
            match self.notifier.send(&text).await {
                Ok(()) => info!(kind = alert.kind(), "Alert delivered"),
                Err(e) => warn!(kind = alert.kind(), error = %e, "Failed to deliver alert"),
            }
        }

        Ok(None)
    }
}
