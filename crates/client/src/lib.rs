//! HTTP clients for the holiday lookup service.
//!
//! This crate provides the record store client, the upstream provider
//! client, and the traits ([`HolidayStore`], [`HolidayProvider`]) the
//! orchestrator consumes.

pub mod nager;
pub mod ports;
pub mod store;

pub use nager::{NagerClient, NagerConfig, ProviderError};
pub use ports::{HolidayProvider, HolidayStore};
pub use store::{StoreClient, StoreConfig, StoreError};
