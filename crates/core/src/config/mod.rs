//! Application configuration with layered loading.
//!
//! Configuration is loaded via figment from three layers:
//!
//! 1. Environment variables (HOLIDAYS_*)
//! 2. TOML config file (if HOLIDAYS_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration as StdDuration;

use chrono::Duration;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (HOLIDAYS_*)
/// 2. TOML config file (if HOLIDAYS_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the record store service.
    ///
    /// Set via HOLIDAYS_STORE_BASE_URL environment variable.
    #[serde(default = "default_store_base_url")]
    pub store_base_url: String,

    /// Base URL of the upstream authoritative holiday API.
    ///
    /// Set via HOLIDAYS_UPSTREAM_BASE_URL environment variable.
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    /// Cache time-to-live in seconds. Stored rows older than this are
    /// refetched rather than served.
    ///
    /// Set via HOLIDAYS_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Country codes this deployment serves.
    ///
    /// Set via HOLIDAYS_SUPPORTED_COUNTRIES environment variable.
    #[serde(default = "default_supported_countries")]
    pub supported_countries: Vec<String>,

    /// Record store request timeout in milliseconds. The store is assumed
    /// local/low-latency, so this is the short one.
    ///
    /// Set via HOLIDAYS_STORE_TIMEOUT_MS environment variable.
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,

    /// Upstream API request timeout in milliseconds.
    ///
    /// Set via HOLIDAYS_UPSTREAM_TIMEOUT_MS environment variable.
    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,

    /// User-Agent string for outgoing HTTP requests.
    ///
    /// Set via HOLIDAYS_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_store_base_url() -> String {
    "http://localhost:5001".into()
}

fn default_upstream_base_url() -> String {
    "https://date.nager.at/api/v3".into()
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_supported_countries() -> Vec<String> {
    vec!["CN".into(), "IE".into()]
}

fn default_store_timeout_ms() -> u64 {
    10_000
}

fn default_upstream_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    "holidays/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_base_url: default_store_base_url(),
            upstream_base_url: default_upstream_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            supported_countries: default_supported_countries(),
            store_timeout_ms: default_store_timeout_ms(),
            upstream_timeout_ms: default_upstream_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Cache TTL as a chrono duration for freshness arithmetic.
    pub fn cache_ttl(&self) -> Duration {
        Duration::seconds(self.cache_ttl_secs as i64)
    }

    /// Store timeout as a Duration for use with reqwest.
    pub fn store_timeout(&self) -> StdDuration {
        StdDuration::from_millis(self.store_timeout_ms)
    }

    /// Upstream timeout as a Duration for use with reqwest.
    pub fn upstream_timeout(&self) -> StdDuration {
        StdDuration::from_millis(self.upstream_timeout_ms)
    }

    /// Whether `code` (already uppercased) is served by this deployment.
    pub fn supports_country(&self, code: &str) -> bool {
        self.supported_countries.iter().any(|c| c == code)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `HOLIDAYS_`
    /// 2. TOML file from `HOLIDAYS_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a layer cannot be read or validation fails
    /// after loading.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("HOLIDAYS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("HOLIDAYS_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
