//! Record store wire shapes.

use serde::Deserialize;

use holidays_core::HolidayRecord;

/// Successful read body: `{ message, count, data }`.
#[derive(Debug, Deserialize)]
pub struct StoreReadBody {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub count: Option<usize>,

    #[serde(default)]
    pub data: Vec<HolidayRecord>,
}

/// Write acknowledgement: `{ message, count }`.
#[derive(Debug, Deserialize)]
pub struct StoreWriteAck {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_body() {
        let body: StoreReadBody = serde_json::from_str(
            r#"{"message":"CN holiday data get successfully","count":1,
                "data":[{"date":"2025-10-01","countryCode":"CN","month":"10",
                         "name":"National Day","cache_time":"2025-06-01 10:00:00"}]}"#,
        )
        .unwrap();
        assert_eq!(body.count, Some(1));
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].country_code, "CN");
        assert_eq!(body.data[0].cache_time.as_deref(), Some("2025-06-01 10:00:00"));
    }

    #[test]
    fn test_parse_read_body_missing_fields() {
        let body: StoreReadBody = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(body.message.is_none());
        assert!(body.data.is_empty());
    }

    #[test]
    fn test_parse_write_ack() {
        let ack: StoreWriteAck =
            serde_json::from_str(r#"{"message":"IE Holiday data saved/updated successfully","count":12}"#).unwrap();
        assert_eq!(ack.count, Some(12));
    }
}
