//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values after they
//! have been loaded from environment, files, or defaults.

use thiserror::Error;
use url::Url;

use crate::config::AppConfig;
use crate::country::CountryRoute;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - either base URL does not parse as an absolute http(s) URL
    /// - `cache_ttl_secs` is 0
    /// - a timeout is below 100ms or above 5 minutes
    /// - `supported_countries` is empty, contains a malformed code, or names
    ///   a country without a store route
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("store_base_url", &self.store_base_url), ("upstream_base_url", &self.upstream_base_url)] {
            let url = Url::parse(value)
                .map_err(|e| ConfigError::Invalid { field: field.into(), reason: e.to_string() })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::Invalid {
                    field: field.into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        for (field, value) in [("store_timeout_ms", self.store_timeout_ms), ("upstream_timeout_ms", self.upstream_timeout_ms)] {
            if value < 100 {
                return Err(ConfigError::Invalid { field: field.into(), reason: "must be at least 100ms".into() });
            }
            if value > 300_000 {
                return Err(ConfigError::Invalid {
                    field: field.into(),
                    reason: "must not exceed 5 minutes (300000ms)".into(),
                });
            }
        }

        if self.supported_countries.is_empty() {
            return Err(ConfigError::Invalid {
                field: "supported_countries".into(),
                reason: "must list at least one country".into(),
            });
        }

        for code in &self.supported_countries {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(ConfigError::Invalid {
                    field: "supported_countries".into(),
                    reason: format!("not a 2-letter uppercase code: {code:?}"),
                });
            }
            if CountryRoute::for_code(code).is_none() {
                return Err(ConfigError::Invalid {
                    field: "supported_countries".into(),
                    reason: format!("no store route defined for {code}"),
                });
            }
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        Ok(())
    }
}
