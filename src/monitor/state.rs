//! Persisted monitor state.
//!
//! A single durable record of the last fully processed cycle's view of
//! every monitored signal. Loaded whole at startup, written whole after
//! each cycle with a temp-file-then-rename replace so a crash never leaves
//! a torn record on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

/// Current state file schema version.
const STATE_VERSION: u32 = 1;

/// Last-seen values for every monitored signal.
///
/// The detector reads this and produces the next state; only the scheduler
/// commits it, and only after every alert in the cycle has been attempted
/// for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorState {
    /// Schema version for forward compatibility.
    #[serde(default = "default_version")]
    pub version: u32,
    /// False until the first successful cycle has been absorbed. While
    /// false, already-true conditions are treated as acknowledged and
    /// produce no alerts.
    #[serde(default)]
    pub initialized: bool,
    #[serde(default)]
    pub energy_was_full: bool,
    #[serde(default)]
    pub nerve_was_full: bool,
    /// Hospital release time observed last cycle; `None` when out.
    #[serde(default)]
    pub hospital_until: Option<i64>,
    #[serde(default)]
    pub drug_until: Option<i64>,
    #[serde(default)]
    pub booster_until: Option<i64>,
    #[serde(default)]
    pub was_traveling: bool,
    /// Arrival time for which the landing alert has already been sent.
    #[serde(default)]
    pub landing_alerted_for: Option<i64>,
    /// Course end time for which the education alert has already been sent.
    #[serde(default)]
    pub education_alerted_for: Option<i64>,
    /// Newest account-event timestamp already reported.
    #[serde(default)]
    pub last_event_ts: i64,
    #[serde(default)]
    pub last_inbox_unread: u32,
    /// Company checks run while true; flipped off permanently when the
    /// API key turns out to lack company access.
    #[serde(default = "default_company_enabled")]
    pub company_enabled: bool,
}

fn default_version() -> u32 {
    STATE_VERSION
}

fn default_company_enabled() -> bool {
    true
}

impl Default for MonitorState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            initialized: false,
            energy_was_full: false,
            nerve_was_full: false,
            hospital_until: None,
            drug_until: None,
            booster_until: None,
            was_traveling: false,
            landing_alerted_for: None,
            education_alerted_for: None,
            last_event_ts: 0,
            last_inbox_unread: 0,
            company_enabled: true,
        }
    }
}

/// Durable store for [`MonitorState`].
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or the empty default on first run.
    pub fn load(&self) -> Result<MonitorState, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(PersistenceError::Corrupt),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(MonitorState::default()),
            Err(e) => Err(PersistenceError::Read(e)),
        }
    }

    /// Atomically replace the persisted state.
    ///
    /// Writes to a temp file, fsyncs, then renames over the target.
    pub fn save(&self, state: &MonitorState) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(state).map_err(PersistenceError::Encode)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(PersistenceError::Write)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).map_err(PersistenceError::Write)?;

        // Clean up the temp file if any step after creation fails.
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            PersistenceError::Write(e)
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}
