//! Adapters implementing the boundary ports against real services.

pub mod torn;

#[cfg(feature = "telegram")]
pub mod telegram;

pub use torn::TornClient;

#[cfg(feature = "telegram")]
pub use telegram::TelegramNotifier;
