//! Canonical and wire record types for public-holiday data.
//!
//! Two shapes matter here:
//!
//! - [`RawHoliday`] is whatever the upstream provider sends; only `date` and
//!   `name` are required downstream, everything else rides along and is ignored.
//! - [`HolidayRecord`] is the canonical shape shared with the record store.
//!   Field names match the store's wire format (`countryCode`, `cache_time`).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format the record store uses for `cache_time` (UTC).
pub const CACHE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A public holiday in canonical form.
///
/// Identity is `(date, countryCode)`; the store upserts by that key, so a
/// later write replaces an earlier one. `month` is always derived from
/// `date`, never supplied independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// ISO 3166-1 alpha-2 country code, uppercase.
    #[serde(rename = "countryCode")]
    pub country_code: String,

    /// Month component of `date`, zero-padded to two digits.
    pub month: String,

    /// Holiday name, free text.
    pub name: String,

    /// Write timestamp assigned by the store at persistence time.
    ///
    /// `None` everywhere except on records read back from the store, and
    /// stripped again before any record reaches a public response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<String>,
}

impl HolidayRecord {
    /// Parse `cache_time` as a UTC timestamp.
    ///
    /// Returns `None` when the field is absent or not in the store's
    /// `%Y-%m-%d %H:%M:%S` format; callers treat that as expired.
    pub fn parsed_cache_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.cache_time.as_deref()?;
        NaiveDateTime::parse_from_str(raw, CACHE_TIME_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// A raw holiday entry as returned by the upstream provider.
///
/// Deserialization is deliberately lenient: the provider sends more fields
/// than we use, and entries missing `date` or `name` still parse (they are
/// dropped later by normalization, not by serde).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHoliday {
    #[serde(default)]
    pub date: Option<String>,

    /// English holiday name.
    #[serde(default)]
    pub name: Option<String>,

    /// Name in the local language.
    #[serde(default, rename = "localName", skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,

    #[serde(default, rename = "countryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Whether the holiday applies country-wide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
}

/// Outcome of a record store read.
///
/// `found = false` is a true miss: the store answered but has no rows for
/// the key. Rows that exist but fail the freshness check are a hit that
/// goes stale, and an unreachable store is an `Err` from the client; the
/// three cases are handled differently by the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct CacheLookup {
    pub records: Vec<HolidayRecord>,
    pub found: bool,
}

impl CacheLookup {
    /// A lookup that found no rows for the key.
    pub fn miss() -> Self {
        Self { records: Vec::new(), found: false }
    }

    /// A lookup that found rows.
    pub fn hit(records: Vec<HolidayRecord>) -> Self {
        Self { records, found: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cache_time: Option<&str>) -> HolidayRecord {
        HolidayRecord {
            date: "2025-10-01".into(),
            country_code: "CN".into(),
            month: "10".into(),
            name: "National Day".into(),
            cache_time: cache_time.map(String::from),
        }
    }

    #[test]
    fn test_parsed_cache_time_valid() {
        let rec = record(Some("2025-06-01 12:30:00"));
        let parsed = rec.parsed_cache_time().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-01T12:30:00+00:00");
    }

    #[test]
    fn test_parsed_cache_time_absent_or_garbage() {
        assert!(record(None).parsed_cache_time().is_none());
        assert!(record(Some("not a timestamp")).parsed_cache_time().is_none());
        assert!(record(Some("2025-06-01T12:30:00Z")).parsed_cache_time().is_none());
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let json = serde_json::to_value(record(None)).unwrap();
        assert_eq!(json["countryCode"], "CN");
        assert!(json.get("cache_time").is_none());

        let json = serde_json::to_value(record(Some("2025-06-01 12:30:00"))).unwrap();
        assert_eq!(json["cache_time"], "2025-06-01 12:30:00");
    }

    #[test]
    fn test_raw_holiday_tolerates_missing_fields() {
        let raw: RawHoliday = serde_json::from_str(r#"{"localName":"Lá Fhéile Pádraig"}"#).unwrap();
        assert!(raw.date.is_none());
        assert!(raw.name.is_none());
        assert_eq!(raw.local_name.as_deref(), Some("Lá Fhéile Pádraig"));
    }

    #[test]
    fn test_raw_holiday_parses_provider_payload() {
        let raw: RawHoliday = serde_json::from_str(
            r#"{"date":"2026-03-17","localName":"Lá Fhéile Pádraig","name":"St. Patrick's Day",
                "countryCode":"IE","fixed":true,"global":true,"counties":null,"launchYear":null,
                "types":["Public"]}"#,
        )
        .unwrap();
        assert_eq!(raw.date.as_deref(), Some("2026-03-17"));
        assert_eq!(raw.name.as_deref(), Some("St. Patrick's Day"));
        assert_eq!(raw.global, Some(true));
    }
}
