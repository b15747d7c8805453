//! Traits the orchestrator consumes.
//!
//! The orchestrator takes its store and provider as trait objects so tests
//! can substitute in-memory doubles; [`crate::StoreClient`] and
//! [`crate::NagerClient`] are the production implementations.

use async_trait::async_trait;

use holidays_core::{CacheLookup, CountryRoute, HolidayRecord, RawHoliday};

use crate::nager::ProviderError;
use crate::store::StoreError;

/// Persistent record store, keyed by `(country, year)`.
#[async_trait]
pub trait HolidayStore: Send + Sync {
    /// Read all stored rows for a country/year key.
    ///
    /// A key with no rows is a successful lookup with `found = false`, not
    /// an error; `Err` means the store itself was unreachable.
    async fn read(&self, route: &CountryRoute, year: &str) -> Result<CacheLookup, StoreError>;

    /// Upsert a batch of records. The store assigns `cache_time` at write
    /// time and replaces rows sharing `(date, countryCode)`.
    ///
    /// Returns the number of rows the store acknowledged.
    async fn write(&self, route: &CountryRoute, records: &[HolidayRecord]) -> Result<usize, StoreError>;
}

/// Upstream authoritative holiday source.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetch the raw holiday list for a country and year. One attempt, no
    /// retries; the caller decides what a failure means.
    async fn fetch(&self, country_code: &str, year: &str) -> Result<Vec<RawHoliday>, ProviderError>;
}
