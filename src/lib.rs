//! Consigliere - Torn account monitoring and advisory bot core.
//!
//! This crate provides the background engine for watching a single Torn
//! account and pushing Telegram notifications on state transitions, plus
//! the two analytics views embedded in those notifications.
//!
//! # Architecture
//!
//! One snapshot flows one direction per poll cycle:
//!
//! fetch -> detect (reads persisted state) -> enrich -> notify -> commit
//!
//! - **`monitor::detector`** - Edge-triggered transition detection over
//!   periodic snapshots; at most one alert per occurrence.
//! - **`monitor::scheduler`** - The fixed-period poll loop with skip-on-miss
//!   ticks and graceful shutdown.
//! - **`travel`** - Anti-Zonk travel-profit estimator over static tables.
//! - **`crime`** - Effective Arsons progression and crime safety advisor.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML with env-var secrets
//! - [`domain`] - Typed account snapshot and alert types
//! - [`error`] - Error taxonomy for the crate
//! - [`port`] - Fetcher and notifier boundary traits
//! - [`adapter`] - Torn API client and Telegram delivery (feature `telegram`)
//! - [`monitor`] - Persisted state, detector, formatter, scheduler
//!
//! # Features
//!
//! - `telegram` - Enable Telegram delivery via teloxide (default)
//! - `testkit` - Expose scripted mocks and fixture builders to tests

pub mod adapter;
pub mod config;
pub mod crime;
pub mod domain;
pub mod error;
pub mod monitor;
pub mod port;
pub mod travel;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
