//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`ScriptedFetcher`] - pre-loaded fetch results, popped per cycle.
//! - [`RecordingNotifier`] - captures delivered text, with scripted failures.
//! - Snapshot builders for common fixture shapes.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal_macros::dec;

use crate::domain::{Bar, CompanySnapshot, Snapshot};
use crate::error::{FetchError, NotifyError};
use crate::port::{CompanyFetcher, Notifier, SnapshotFetcher};

/// A fetcher with a scripted queue of results.
///
/// Each `fetch_snapshot` call pops the next result; an exhausted queue
/// yields a retryable error so a runaway loop fails loudly instead of
/// spinning on stale data.
pub struct ScriptedFetcher {
    results: Mutex<VecDeque<Result<Snapshot, FetchError>>>,
}

impl ScriptedFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
        }
    }

    #[must_use]
    pub fn with_snapshots(snapshots: impl IntoIterator<Item = Snapshot>) -> Self {
        let fetcher = Self::new();
        for s in snapshots {
            fetcher.push_ok(s);
        }
        fetcher
    }

    pub fn push_ok(&self, snapshot: Snapshot) {
        self.results.lock().push_back(Ok(snapshot));
    }

    pub fn push_err(&self, error: FetchError) {
        self.results.lock().push_back(Err(error));
    }
}

impl Default for ScriptedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotFetcher for ScriptedFetcher {
    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Malformed("scripted fetcher exhausted".into())))
    }
}

/// A company fetcher with a scripted queue of results.
pub struct ScriptedCompanyFetcher {
    results: Mutex<VecDeque<Result<CompanySnapshot, FetchError>>>,
}

impl ScriptedCompanyFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_ok(&self, company: CompanySnapshot) {
        self.results.lock().push_back(Ok(company));
    }

    pub fn push_err(&self, error: FetchError) {
        self.results.lock().push_back(Err(error));
    }

    /// Number of scripted results not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.results.lock().len()
    }
}

impl Default for ScriptedCompanyFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyFetcher for ScriptedCompanyFetcher {
    async fn fetch_company(&self) -> Result<CompanySnapshot, FetchError> {
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Malformed("scripted fetcher exhausted".into())))
    }
}

/// A notifier that records every delivered message.
///
/// Failures can be scripted per call; unscripted calls succeed.
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    failures: Mutex<VecDeque<NotifyError>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a failure for the next send attempt.
    pub fn fail_next(&self, error: NotifyError) {
        self.failures.lock().push_back(error);
    }

    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        if let Some(err) = self.failures.lock().pop_front() {
            return Err(err);
        }
        self.sent.lock().push(text.to_string());
        Ok(())
    }
}

/// A quiet baseline snapshot: mid bars, no hospital, no travel, no
/// cooldowns, empty inbox.
#[must_use]
pub fn idle_snapshot() -> Snapshot {
    Snapshot {
        level: 30,
        cash_on_hand: dec!(500000),
        energy: Bar::new(50, 150),
        nerve: Bar::new(10, 45),
        ..Snapshot::default()
    }
}

/// The idle snapshot with a full energy bar.
#[must_use]
pub fn full_energy_snapshot() -> Snapshot {
    Snapshot {
        energy: Bar::new(150, 150),
        ..idle_snapshot()
    }
}
