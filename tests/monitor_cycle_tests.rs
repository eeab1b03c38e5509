//! Integration tests for the poll-cycle scheduler.

use std::sync::Arc;
use std::time::Duration;

use consigliere::config::TravelConfig;
use consigliere::domain::{Bar, Snapshot};
use consigliere::error::{Error, FetchError, NotifyError};
use consigliere::monitor::{Monitor, MonitorState, StateStore};
use consigliere::testkit::{idle_snapshot, full_energy_snapshot, RecordingNotifier, ScriptedFetcher};
use tempfile::TempDir;

fn make_monitor(
    fetcher: Arc<ScriptedFetcher>,
    notifier: Arc<RecordingNotifier>,
    dir: &TempDir,
) -> Monitor {
    Monitor::new(
        fetcher,
        notifier,
        StateStore::new(dir.path().join("state.json")),
        TravelConfig::default(),
        Duration::from_secs(60),
    )
}

fn armed() -> MonitorState {
    MonitorState {
        initialized: true,
        ..MonitorState::default()
    }
}

#[tokio::test]
async fn first_cycle_absorbs_then_second_fires() {
    let dir = TempDir::new().unwrap();
    let fetcher = Arc::new(ScriptedFetcher::with_snapshots([
        full_energy_snapshot(),
        idle_snapshot(),
        full_energy_snapshot(),
    ]));
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = make_monitor(fetcher, notifier.clone(), &dir);

    // First ever cycle: energy already full, absorbed silently.
    let state = monitor
        .run_cycle(&MonitorState::default())
        .await
        .unwrap()
        .unwrap();
    assert!(state.initialized);
    assert_eq!(notifier.sent_count(), 0);

    // Bar drains, then refills: now it alerts.
    let state = monitor.run_cycle(&state).await.unwrap().unwrap();
    assert_eq!(notifier.sent_count(), 0);

    let _state = monitor.run_cycle(&state).await.unwrap().unwrap();
    assert_eq!(notifier.sent_count(), 1);
    assert!(notifier.sent()[0].contains("Energy Full"));
}

#[tokio::test]
async fn retryable_fetch_failure_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    let fetcher = Arc::new(ScriptedFetcher::new());
    fetcher.push_err(FetchError::Api {
        code: 5,
        message: "Too many requests".into(),
    });
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = make_monitor(fetcher, notifier.clone(), &dir);

    let result = monitor.run_cycle(&armed()).await.unwrap();
    assert!(result.is_none());
    assert_eq!(notifier.sent_count(), 0);
    // No commit happened: the state file was never created.
    assert!(!dir.path().join("state.json").exists());
}

#[tokio::test]
async fn non_retryable_fetch_failure_escalates() {
    let dir = TempDir::new().unwrap();
    let fetcher = Arc::new(ScriptedFetcher::new());
    fetcher.push_err(FetchError::Api {
        code: 2,
        message: "Incorrect key".into(),
    });
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = make_monitor(fetcher, notifier, &dir);

    let result = monitor.run_cycle(&armed()).await;
    assert!(matches!(result, Err(Error::Fetch(_))));
}

#[tokio::test]
async fn failed_delivery_does_not_block_other_alerts_or_the_commit() {
    let dir = TempDir::new().unwrap();
    let both_full = Snapshot {
        energy: Bar::new(150, 150),
        nerve: Bar::new(45, 45),
        ..idle_snapshot()
    };
    let fetcher = Arc::new(ScriptedFetcher::with_snapshots([both_full]));
    let notifier = Arc::new(RecordingNotifier::new());
    notifier.fail_next(NotifyError::Send("telegram down".into()));
    let monitor = make_monitor(fetcher, notifier.clone(), &dir);

    let state = monitor.run_cycle(&armed()).await.unwrap().unwrap();

    // First alert failed, second still went out.
    assert_eq!(notifier.sent_count(), 1);
    // Both transitions committed regardless.
    assert!(state.energy_was_full);
    assert!(state.nerve_was_full);
    let on_disk = StateStore::new(dir.path().join("state.json")).load().unwrap();
    assert_eq!(on_disk, state);
}

#[tokio::test]
async fn restart_with_stale_state_replays_the_same_alerts() {
    // Crash between dispatch and commit: the persisted state still says
    // "in hospital" while the world has moved on.
    let dir = TempDir::new().unwrap();
    let stale = MonitorState {
        hospital_until: Some(1_600_000_000),
        ..armed()
    };
    StateStore::new(dir.path().join("state.json"))
        .save(&stale)
        .unwrap();

    // The crashed run: its commit lands on a scratch path, as if lost.
    let scratch = TempDir::new().unwrap();
    let fetcher = Arc::new(ScriptedFetcher::with_snapshots([idle_snapshot()]));
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = make_monitor(fetcher, notifier.clone(), &scratch);
    monitor.run_cycle(&stale).await.unwrap();
    let first_run = notifier.sent();

    // Restart: same stale state loaded from disk, same snapshot.
    let fetcher = Arc::new(ScriptedFetcher::with_snapshots([idle_snapshot()]));
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = make_monitor(fetcher, notifier.clone(), &dir);
    let reloaded = StateStore::new(dir.path().join("state.json")).load().unwrap();
    monitor.run_cycle(&reloaded).await.unwrap();

    assert_eq!(first_run, notifier.sent());
    assert!(first_run.iter().any(|m| m.contains("Hospital")));
}

#[tokio::test]
async fn shutdown_stops_the_loop_cleanly() {
    let dir = TempDir::new().unwrap();
    let fetcher = Arc::new(ScriptedFetcher::with_snapshots([idle_snapshot()]));
    let notifier = Arc::new(RecordingNotifier::new());
    let monitor = make_monitor(fetcher, notifier, &dir);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let handle = tokio::spawn(monitor.run_with_shutdown(shutdown_rx));

    // Let the immediate first tick complete, then signal shutdown.
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown_tx.send(true).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("loop did not stop")
        .expect("task panicked");
    assert!(result.is_ok());

    // The first cycle committed before shutdown.
    let state = StateStore::new(dir.path().join("state.json")).load().unwrap();
    assert!(state.initialized);
}
