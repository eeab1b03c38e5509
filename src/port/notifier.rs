//! Notifier port for alert delivery.
//!
//! The recipient is fixed by the adapter (single authorized user); the
//! core only hands over pre-formatted text. Delivery is best-effort per
//! alert: a failure is reported back so the cycle can log it, but it must
//! never block the other alerts of the same cycle.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;

/// Trait for notification backends.
///
/// Implementations must be thread-safe (`Send + Sync`) and bound their own
/// send time.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one pre-formatted message to the configured recipient.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when delivery fails; the caller treats this
    /// as per-alert and non-fatal.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _text: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// A notifier that logs messages via tracing instead of delivering them.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!(message = %text, "Notification");
        Ok(())
    }
}
