//! Core types and domain logic for the holiday lookup service.
//!
//! This crate provides:
//! - Canonical and wire record types
//! - The country routing table
//! - Cache freshness evaluation, normalization, and result filtering
//! - Configuration structures
//! - The service-level error type
//!
//! Everything here is pure; HTTP clients live in `holidays-client` and the
//! cache-aside orchestrator in `holidays-service`.

pub mod clock;
pub mod config;
pub mod country;
pub mod error;
pub mod filter;
pub mod freshness;
pub mod holiday;
pub mod normalize;

pub use clock::{Clock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use country::CountryRoute;
pub use error::Error;
pub use freshness::Freshness;
pub use holiday::{CACHE_TIME_FORMAT, CacheLookup, HolidayRecord, RawHoliday};
pub use normalize::normalize;
