//! Upstream holiday provider client (Nager.Date-compatible API).
//!
//! ### Specification
//!
//! - **Endpoint**: `GET {base}/PublicHolidays/{year}/{countryCode}`
//! - **Response**: JSON array of raw holiday entries; only `date` and
//!   `name` are consumed downstream.
//! - **Policy**: one attempt per call, no retries; the orchestrator treats
//!   a failure here as service-unavailable.

pub mod error;

pub use error::ProviderError;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use holidays_core::{AppConfig, RawHoliday};

use crate::ports::HolidayProvider;

/// Default base URL for the Nager.Date v3 API.
const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Default request timeout. The upstream is remote, so this is the long one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider client configuration.
#[derive(Debug, Clone)]
pub struct NagerConfig {
    /// Base URL (default: https://date.nager.at/api/v3).
    pub base_url: String,
    /// Request timeout (default: 30s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
}

impl Default for NagerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: "holidays/0.1".to_string(),
        }
    }
}

impl NagerConfig {
    /// Derive a provider client configuration from the application config.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.upstream_base_url.clone(),
            timeout: config.upstream_timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Upstream provider HTTP client.
#[derive(Debug, Clone)]
pub struct NagerClient {
    http: reqwest::Client,
    config: NagerConfig,
}

impl NagerClient {
    /// Create a new provider client with the given configuration.
    pub fn new(config: NagerConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Build(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn holidays_url(&self, country_code: &str, year: &str) -> String {
        format!("{}/PublicHolidays/{}/{}", self.config.base_url.trim_end_matches('/'), year, country_code)
    }
}

#[async_trait]
impl HolidayProvider for NagerClient {
    async fn fetch(&self, country_code: &str, year: &str) -> Result<Vec<RawHoliday>, ProviderError> {
        let url = self.holidays_url(country_code, year);
        tracing::debug!(%url, "fetching holidays from upstream provider");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(country = country_code, year, status = status.as_u16(), "upstream response");

        if !status.is_success() {
            return Err(ProviderError::Http { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        let raw: Vec<RawHoliday> =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Parse(e.to_string()))?;

        tracing::debug!(country = country_code, year, entries = raw.len(), "upstream fetch complete");
        Ok(raw)
    }
}
