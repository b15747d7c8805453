//! Boundary types for the holiday lookup operation.
//!
//! These are the shapes a thin presentation layer works with: the incoming
//! query parameters and the tagged reply. Records in a reply never carry
//! `cache_time`.

use serde::{Deserialize, Serialize};

use holidays_core::HolidayRecord;

/// Input parameters for a holiday lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayQuery {
    /// Country code (required). Case-insensitive; normalized to uppercase.
    pub country: String,

    /// Four-digit year (required).
    pub year: String,

    /// Optional month filter, 1-2 digits.
    #[serde(default)]
    pub month: Option<String>,

    /// Optional case-insensitive name filter.
    #[serde(default)]
    pub name: Option<String>,
}

/// Where the served records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Served from the record store within TTL.
    Cache,
    /// Refetched from the upstream provider this request.
    Api,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Cache => f.write_str("cache"),
            Source::Api => f.write_str("api"),
        }
    }
}

/// A successful holiday lookup result.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayPage {
    /// Echoed country code, uppercase.
    pub country: String,
    /// Echoed year.
    pub year: String,
    /// Number of records in `data`.
    pub count: usize,
    pub source: Source,
    /// Filtered records, free of internal bookkeeping fields.
    pub data: Vec<HolidayRecord>,
}

/// Outcome of a holiday lookup that did not fail.
///
/// An empty result after filtering is a `NotFound`, not an error; the
/// request itself succeeded.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum HolidaysReply {
    Page(HolidayPage),
    NotFound { source: Source, country: String, year: String },
}

impl HolidaysReply {
    /// Source attribution, regardless of outcome.
    pub fn source(&self) -> Source {
        match self {
            HolidaysReply::Page(page) => page.source,
            HolidaysReply::NotFound { source, .. } => *source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display_and_serde() {
        assert_eq!(Source::Cache.to_string(), "cache");
        assert_eq!(Source::Api.to_string(), "api");
        assert_eq!(serde_json::to_string(&Source::Api).unwrap(), "\"api\"");
    }

    #[test]
    fn test_query_deserializes_with_optional_filters() {
        let query: HolidayQuery = serde_json::from_str(r#"{"country":"IE","year":"2026"}"#).unwrap();
        assert_eq!(query.country, "IE");
        assert!(query.month.is_none());
        assert!(query.name.is_none());
    }

    #[test]
    fn test_page_serializes_flat() {
        let reply = HolidaysReply::Page(HolidayPage {
            country: "CN".into(),
            year: "2025".into(),
            count: 0,
            source: Source::Cache,
            data: vec![],
        });
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["country"], "CN");
        assert_eq!(json["source"], "cache");
    }

    #[test]
    fn test_reply_source_helper() {
        let reply = HolidaysReply::NotFound { source: Source::Api, country: "IE".into(), year: "2026".into() };
        assert_eq!(reply.source(), Source::Api);
    }
}
