//! Torn API client implementing the [`SnapshotFetcher`] port.

pub mod model;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::TornConfig;
use crate::domain::{CompanySnapshot, Snapshot};
use crate::error::{FetchError, Result};
use crate::port::{CompanyFetcher, SnapshotFetcher};

use model::{WireCompany, WireUser};

/// Selections batched into the single monitoring call per cycle.
const MONITOR_SELECTIONS: &str =
    "basic,bars,cooldowns,travel,education,events,messages,criminalrecord,money";

/// Selections for the slower company check (director access).
const COMPANY_SELECTIONS: &str = "stock,employees";

/// HTTP client for the Torn user endpoint.
pub struct TornClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TornClient {
    pub fn new(config: &TornConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(FetchError::Http)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn fetch_wire(&self) -> std::result::Result<WireUser, FetchError> {
        let url = format!(
            "{}/user/?selections={}&key={}",
            self.base_url, MONITOR_SELECTIONS, self.api_key
        );

        let mut wire: WireUser = self.client.get(&url).send().await?.json().await?;

        if let Some(err) = wire.error.take() {
            return Err(FetchError::Api {
                code: err.code,
                message: err.message,
            });
        }

        Ok(wire)
    }

    async fn fetch_company_wire(&self) -> std::result::Result<WireCompany, FetchError> {
        let url = format!(
            "{}/company/?selections={}&key={}",
            self.base_url, COMPANY_SELECTIONS, self.api_key
        );

        let mut wire: WireCompany = self.client.get(&url).send().await?.json().await?;

        if let Some(err) = wire.error.take() {
            return Err(FetchError::Api {
                code: err.code,
                message: err.message,
            });
        }

        Ok(wire)
    }
}

#[async_trait]
impl SnapshotFetcher for TornClient {
    async fn fetch_snapshot(&self) -> std::result::Result<Snapshot, FetchError> {
        let wire = self.fetch_wire().await?;
        let now = Utc::now().timestamp();
        let snapshot = wire.into_snapshot(now);

        debug!(
            level = snapshot.level,
            energy = snapshot.energy.current,
            nerve = snapshot.nerve.current,
            "Fetched snapshot"
        );

        Ok(snapshot)
    }
}

#[async_trait]
impl CompanyFetcher for TornClient {
    async fn fetch_company(&self) -> std::result::Result<CompanySnapshot, FetchError> {
        let wire = self.fetch_company_wire().await?;
        let company = wire.into_company();

        debug!(
            stock_items = company.stock.len(),
            employees = company.employees.len(),
            "Fetched company data"
        );

        Ok(company)
    }
}
