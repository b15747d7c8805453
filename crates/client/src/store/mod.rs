//! Record store HTTP client.
//!
//! The store exposes per-country read/write endpoints:
//!
//! - `GET {base}/db/get-{route}?year={year}` — rows for a country/year key;
//!   404 means the key has never been written (a true miss, not an error).
//! - `POST {base}/db/save-{route}` — upsert a JSON record list; the store
//!   assigns `cache_time` server-side at write time.

pub mod error;
pub mod response;

pub use error::StoreError;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use holidays_core::{AppConfig, CacheLookup, CountryRoute, HolidayRecord};

use crate::ports::HolidayStore;
use response::{StoreReadBody, StoreWriteAck};

/// Default store base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Default request timeout. The store is assumed local, so this is short.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Record store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store service.
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: "holidays/0.1".to_string(),
        }
    }
}

impl StoreConfig {
    /// Derive a store client configuration from the application config.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.store_base_url.clone(),
            timeout: config.store_timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Record store HTTP client.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Create a new store client with the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Build(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn read_url(&self, route: &CountryRoute) -> String {
        format!("{}/db/get-{}", self.config.base_url.trim_end_matches('/'), route.route())
    }

    fn write_url(&self, route: &CountryRoute) -> String {
        format!("{}/db/save-{}", self.config.base_url.trim_end_matches('/'), route.route())
    }
}

#[async_trait]
impl HolidayStore for StoreClient {
    async fn read(&self, route: &CountryRoute, year: &str) -> Result<CacheLookup, StoreError> {
        let url = self.read_url(route);
        tracing::debug!(%url, year, "querying record store");

        let response = self.http.get(&url).query(&[("year", year)]).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(country = route.code(), year, "store has no rows for key");
            return Ok(CacheLookup::miss());
        }
        if !status.is_success() {
            return Err(StoreError::Http { status: status.as_u16() });
        }

        let body: StoreReadBody = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        tracing::debug!(country = route.code(), year, rows = body.data.len(), "store returned rows");
        Ok(CacheLookup::hit(body.data))
    }

    async fn write(&self, route: &CountryRoute, records: &[HolidayRecord]) -> Result<usize, StoreError> {
        let url = self.write_url(route);
        tracing::debug!(%url, rows = records.len(), "persisting batch to record store");

        let response = self.http.post(&url).json(records).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Http { status: status.as_u16() });
        }

        let ack: StoreWriteAck = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        Ok(ack.count.unwrap_or(records.len()))
    }
}
