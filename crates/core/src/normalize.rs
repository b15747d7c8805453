//! Conversion of raw upstream records into canonical [`HolidayRecord`]s.
//!
//! Partial success is the policy: a malformed entry is dropped and logged,
//! never fails the batch.

use chrono::{Datelike, NaiveDate};

use crate::holiday::{HolidayRecord, RawHoliday};

/// Normalize a raw provider batch for `country_code`.
///
/// Entries missing `date` or `name`, or with a date that does not parse as
/// `YYYY-MM-DD`, are dropped. Output order follows input order, and
/// duplicate dates are kept; deduplication happens at persistence time via
/// the store's upsert-by-key.
pub fn normalize(raw: &[RawHoliday], country_code: &str) -> Vec<HolidayRecord> {
    let mut records = Vec::with_capacity(raw.len());

    for entry in raw {
        let (Some(date), Some(name)) = (entry.date.as_deref(), entry.name.as_deref()) else {
            tracing::warn!("skipping raw entry missing date or name");
            continue;
        };

        let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            tracing::warn!(date, "skipping raw entry with invalid date format");
            continue;
        };

        records.push(HolidayRecord {
            date: date.to_string(),
            country_code: country_code.to_string(),
            month: format!("{:02}", parsed.month()),
            name: name.to_string(),
            cache_time: None,
        });
    }

    records
}
