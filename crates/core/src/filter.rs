//! Month/name filtering and public-shape cleanup for response assembly.

use crate::holiday::HolidayRecord;

/// Apply the optional month and name filters and strip internal bookkeeping.
///
/// `month` is left-padded to two digits and matched exactly against the
/// record's derived month; `name` is a case-insensitive substring match.
/// Both apply conjunctively when given. Every returned record has
/// `cache_time` cleared, since it is never part of the public result shape.
pub fn apply(records: Vec<HolidayRecord>, month: Option<&str>, name: Option<&str>) -> Vec<HolidayRecord> {
    let month = month.map(|m| format!("{m:0>2}"));
    let name = name.map(str::to_lowercase);

    records
        .into_iter()
        .filter(|r| month.as_deref().is_none_or(|m| r.month == m))
        .filter(|r| name.as_deref().is_none_or(|n| r.name.to_lowercase().contains(n)))
        .map(|mut r| {
            r.cache_time = None;
            r
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, month: &str, name: &str) -> HolidayRecord {
        HolidayRecord {
            date: date.into(),
            country_code: "CN".into(),
            month: month.into(),
            name: name.into(),
            cache_time: Some("2025-06-01 10:00:00".into()),
        }
    }

    fn sample() -> Vec<HolidayRecord> {
        vec![
            record("2025-01-01", "01", "New Year's Day"),
            record("2025-03-08", "03", "International Women's Day"),
            record("2025-10-01", "10", "National Day"),
        ]
    }

    #[test]
    fn test_no_filters_returns_all() {
        assert_eq!(apply(sample(), None, None).len(), 3);
    }

    #[test]
    fn test_month_filter_pads_to_two_digits() {
        let filtered = apply(sample(), Some("3"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].month, "03");

        let filtered = apply(sample(), Some("03"), None);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_month_filter_no_match() {
        assert!(apply(sample(), Some("12"), None).is_empty());
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filtered = apply(sample(), None, Some("national"));
        assert_eq!(filtered.len(), 2);

        let filtered = apply(sample(), None, Some("DAY"));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filtered = apply(sample(), Some("10"), Some("day"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "National Day");

        assert!(apply(sample(), Some("10"), Some("women")).is_empty());
    }

    #[test]
    fn test_filter_order_is_commutative() {
        // month-then-name must equal name-then-month.
        let month_first = apply(apply(sample(), Some("03"), None), None, Some("day"));
        let name_first = apply(apply(sample(), None, Some("day")), Some("03"), None);
        assert_eq!(month_first, name_first);
    }

    #[test]
    fn test_strips_cache_time_from_every_record() {
        let filtered = apply(sample(), None, None);
        assert!(filtered.iter().all(|r| r.cache_time.is_none()));
    }
}
