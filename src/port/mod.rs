//! Boundary traits the monitor core depends on.

pub mod fetcher;
pub mod notifier;

pub use fetcher::{CompanyFetcher, SnapshotFetcher};
pub use notifier::{LogNotifier, Notifier, NullNotifier};
