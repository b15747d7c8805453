//! The cache-aside fetch orchestrator.
//!
//! Per request: query the record store, judge freshness, refetch from the
//! upstream provider on miss or staleness, normalize, persist best-effort,
//! filter, and attribute the source. Store failures are downgraded to the
//! refetch path; only upstream failure is surfaced to the caller.

use std::sync::Arc;

use holidays_client::{
    HolidayProvider, HolidayStore, NagerClient, NagerConfig, ProviderError, StoreClient, StoreConfig, StoreError,
};
use holidays_core::{AppConfig, Clock, CountryRoute, Error, Freshness, HolidayRecord, SystemClock, filter, normalize};

use crate::types::{HolidayPage, HolidayQuery, HolidaysReply, Source};

/// Failure wiring the production clients at construction time.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("store client: {0}")]
    Store(#[from] StoreError),

    #[error("provider client: {0}")]
    Provider(#[from] ProviderError),
}

/// Orchestrates the record store, the upstream provider, and the
/// filter/response assembly behind a single lookup operation.
pub struct HolidayService {
    config: AppConfig,
    store: Arc<dyn HolidayStore>,
    provider: Arc<dyn HolidayProvider>,
    clock: Arc<dyn Clock>,
}

impl HolidayService {
    /// Create a service with explicit collaborators.
    pub fn new(
        config: AppConfig, store: Arc<dyn HolidayStore>, provider: Arc<dyn HolidayProvider>, clock: Arc<dyn Clock>,
    ) -> Self {
        Self { config, store, provider, clock }
    }

    /// Create a service wired to the real HTTP store and provider clients,
    /// on the system clock.
    pub fn from_config(config: AppConfig) -> Result<Self, BuildError> {
        let store = StoreClient::new(StoreConfig::from_app_config(&config))?;
        let provider = NagerClient::new(NagerConfig::from_app_config(&config))?;

        Ok(Self::new(config, Arc::new(store), Arc::new(provider), Arc::new(SystemClock)))
    }

    /// Look up public holidays for a country and year, with optional month
    /// and name filters.
    ///
    /// Makes at most one upstream call and at most one store write. An
    /// empty result after filtering is `Ok(HolidaysReply::NotFound)`, not
    /// an error.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for a missing or unsupported country/year;
    ///   no downstream calls are made.
    /// - [`Error::UpstreamUnavailable`] when the refetch path was taken and
    ///   the provider failed. Stale cached rows are never substituted.
    pub async fn get_holidays(&self, query: &HolidayQuery) -> Result<HolidaysReply, Error> {
        let route = self.validate(query)?;
        let country = route.code();
        let year = query.year.as_str();

        let mut fresh_rows = None;
        let mut have_stale_rows = false;

        match self.store.read(&route, year).await {
            Ok(lookup) if lookup.found => {
                let verdict = Freshness::evaluate(&lookup.records, self.config.cache_ttl(), self.clock.now_utc());
                if verdict.is_expired() {
                    have_stale_rows = !lookup.records.is_empty();
                    tracing::info!(country, year, ?verdict, "cached rows unusable, refetching");
                } else {
                    tracing::info!(country, year, "serving from cache");
                    fresh_rows = Some(lookup.records);
                }
            }
            Ok(_) => {
                tracing::info!(country, year, "cache miss, refetching");
            }
            Err(e) => {
                // A dead store only forces a refetch; it never fails the request.
                tracing::warn!(country, year, error = %e, "store read failed, refetching");
            }
        }

        let (records, source) = match fresh_rows {
            Some(rows) => (rows, Source::Cache),
            None => (self.refetch(&route, year, have_stale_rows).await?, Source::Api),
        };

        let data = filter::apply(records, query.month.as_deref(), query.name.as_deref());

        if data.is_empty() {
            tracing::info!(country, year, %source, "no holidays matched");
            return Ok(HolidaysReply::NotFound { source, country: country.to_string(), year: year.to_string() });
        }

        Ok(HolidaysReply::Page(HolidayPage {
            country: country.to_string(),
            year: year.to_string(),
            count: data.len(),
            source,
            data,
        }))
    }

    /// Check required parameters and resolve the store route.
    fn validate(&self, query: &HolidayQuery) -> Result<CountryRoute, Error> {
        if query.country.is_empty() || query.year.is_empty() {
            return Err(Error::Validation("missing required parameters: country and year".into()));
        }

        if query.year.len() != 4 || !query.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(format!("invalid year: {}", query.year)));
        }

        let code = query.country.to_uppercase();
        match CountryRoute::for_code(&code) {
            Some(route) if self.config.supports_country(&code) => Ok(route),
            _ => Err(Error::Validation(format!("unsupported country code: {}", query.country))),
        }
    }

    /// Fetch from the provider, normalize, and persist best-effort.
    async fn refetch(&self, route: &CountryRoute, year: &str, have_stale_rows: bool) -> Result<Vec<HolidayRecord>, Error> {
        let country = route.code();

        let raw = match self.provider.fetch(country, year).await {
            Ok(raw) => raw,
            Err(e) => {
                if have_stale_rows {
                    tracing::warn!(country, year, "cached rows exist but are beyond TTL, not serving them");
                }
                tracing::error!(country, year, error = %e, "upstream fetch failed");
                return Err(Error::UpstreamUnavailable(upstream_reason(&e)));
            }
        };

        let records = normalize(&raw, country);
        tracing::debug!(country, year, raw = raw.len(), kept = records.len(), "normalized upstream batch");

        if !records.is_empty() {
            // Fire-and-forget relative to the response: a write failure must
            // never fail the user-facing request.
            match self.store.write(route, &records).await {
                Ok(count) => tracing::info!(country, year, count, "persisted batch to record store"),
                Err(e) => tracing::warn!(country, year, error = %e, "store write failed, serving anyway"),
            }
        }

        Ok(records)
    }
}

/// Human-readable reason for an upstream failure, without leaking
/// internals into the response.
fn upstream_reason(err: &ProviderError) -> String {
    match err {
        ProviderError::Timeout => "the holiday provider timed out".into(),
        ProviderError::Http { status } => format!("the holiday provider returned status {status}"),
        ProviderError::Parse(_) => "the holiday provider returned an unreadable response".into(),
        _ => "the holiday provider could not be reached".into(),
    }
}
