//! Time-based cache freshness evaluation.
//!
//! A cached batch is written in one store call and stamped with one
//! server-side `cache_time`, so freshness is judged from the first record's
//! timestamp only. Anything ambiguous (empty batch, missing or unparseable
//! timestamp) resolves toward refetching rather than serving possibly-bad
//! data.

use chrono::{DateTime, Duration, Utc};

use crate::holiday::HolidayRecord;

/// Verdict on a cached batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Within TTL; safe to serve.
    Fresh,
    /// Readable timestamp, but older than TTL.
    Stale,
    /// Empty batch, or a `cache_time` that is missing or unparseable.
    Invalid,
}

impl Freshness {
    /// Evaluate a cached batch against `ttl` at time `now`.
    ///
    /// Never panics; every anomaly maps to [`Freshness::Invalid`].
    pub fn evaluate(records: &[HolidayRecord], ttl: Duration, now: DateTime<Utc>) -> Self {
        let Some(first) = records.first() else {
            tracing::debug!("cache batch is empty, treating as expired");
            return Freshness::Invalid;
        };

        let Some(cache_time) = first.parsed_cache_time() else {
            tracing::warn!(
                cache_time = first.cache_time.as_deref().unwrap_or("<absent>"),
                "cache_time missing or unparseable, treating as expired"
            );
            return Freshness::Invalid;
        };

        let expiry = cache_time + ttl;
        if now > expiry {
            tracing::info!("cache expired at {}", expiry.format("%Y-%m-%d %H:%M:%S %Z"));
            Freshness::Stale
        } else {
            tracing::info!("cache valid, {} remaining", expiry - now);
            Freshness::Fresh
        }
    }

    /// Collapse the verdict to the serve/refetch decision.
    pub fn is_expired(&self) -> bool {
        !matches!(self, Freshness::Fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ttl() -> Duration {
        Duration::hours(1)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn batch(cache_time: Option<&str>) -> Vec<HolidayRecord> {
        vec![HolidayRecord {
            date: "2025-10-01".into(),
            country_code: "CN".into(),
            month: "10".into(),
            name: "National Day".into(),
            cache_time: cache_time.map(String::from),
        }]
    }

    #[test]
    fn test_empty_batch_is_expired() {
        let verdict = Freshness::evaluate(&[], ttl(), now());
        assert_eq!(verdict, Freshness::Invalid);
        assert!(verdict.is_expired());
    }

    #[test]
    fn test_within_ttl_is_fresh() {
        let verdict = Freshness::evaluate(&batch(Some("2025-06-01 11:30:00")), ttl(), now());
        assert_eq!(verdict, Freshness::Fresh);
        assert!(!verdict.is_expired());
    }

    #[test]
    fn test_beyond_ttl_is_stale() {
        // Two hours old against a one-hour TTL.
        let verdict = Freshness::evaluate(&batch(Some("2025-06-01 10:00:00")), ttl(), now());
        assert_eq!(verdict, Freshness::Stale);
        assert!(verdict.is_expired());
    }

    #[test]
    fn test_exactly_at_expiry_is_still_fresh() {
        // Expired iff now > cache_time + ttl, strictly.
        let verdict = Freshness::evaluate(&batch(Some("2025-06-01 11:00:00")), ttl(), now());
        assert_eq!(verdict, Freshness::Fresh);
    }

    #[test]
    fn test_missing_cache_time_is_invalid() {
        let verdict = Freshness::evaluate(&batch(None), ttl(), now());
        assert_eq!(verdict, Freshness::Invalid);
        assert!(verdict.is_expired());
    }

    #[test]
    fn test_unparseable_cache_time_is_invalid() {
        let verdict = Freshness::evaluate(&batch(Some("last tuesday")), ttl(), now());
        assert_eq!(verdict, Freshness::Invalid);
    }

    #[test]
    fn test_only_first_record_is_inspected() {
        let mut records = batch(Some("2025-06-01 11:45:00"));
        records.extend(batch(Some("2020-01-01 00:00:00")));
        let verdict = Freshness::evaluate(&records, ttl(), now());
        assert_eq!(verdict, Freshness::Fresh);
    }
}
