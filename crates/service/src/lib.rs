//! Cache-aside orchestration for public-holiday lookups.
//!
//! This crate composes the record store client, the upstream provider
//! client, and the core filter/normalize logic into one operation:
//! [`HolidayService::get_holidays`]. It is a library; a thin presentation
//! layer (HTTP gateway, RPC handler) embeds it and owns transport concerns.
//!
//! ```no_run
//! use holidays_core::AppConfig;
//! use holidays_service::{HolidayQuery, HolidayService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HolidayService::from_config(AppConfig::load()?)?;
//! let query = HolidayQuery { country: "IE".into(), year: "2026".into(), ..Default::default() };
//! let reply = service.get_holidays(&query).await?;
//! # Ok(())
//! # }
//! ```

pub mod service;
pub mod types;

pub use service::{BuildError, HolidayService};
pub use types::{HolidayPage, HolidayQuery, HolidaysReply, Source};
