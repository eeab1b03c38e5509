//! Snapshot fetcher port.
//!
//! The monitor treats the game API as an opaque capability that either
//! yields a parsed [`Snapshot`] or a [`FetchError`]. Rate limiting, auth,
//! and transport mechanics live behind this trait.

use async_trait::async_trait;

use crate::domain::{CompanySnapshot, Snapshot};
use crate::error::FetchError;

/// Port for fetching the current account state.
///
/// Implementations must be thread-safe (`Send + Sync`) and must bound
/// their own request time; the scheduler treats a timeout as an ordinary
/// retryable [`FetchError`], never as a hang.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// Fetch a fresh snapshot of the account.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] whose `is_retryable` flag tells the
    /// scheduler whether to wait for the next tick or escalate.
    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError>;
}

/// Port for fetching company stock and staff data.
///
/// Separate from [`SnapshotFetcher`] because it needs director-level API
/// access; a non-retryable error here disables the company checks rather
/// than stopping the account monitor.
#[async_trait]
pub trait CompanyFetcher: Send + Sync {
    /// Fetch the current company view.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`]; a non-retryable one means the key cannot
    /// read company data at all.
    async fn fetch_company(&self) -> Result<CompanySnapshot, FetchError>;
}
