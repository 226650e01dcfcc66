//! JSON event record parsing.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use verkko_types::{Observation, Result, VerkkoError};

/// Wire shape of one event record.
///
/// The platform formats timestamps with a numeric offset and no colon
/// (`2021-01-01T00:00:00+0000`), which RFC 3339 parsing rejects, so the
/// fields arrive as strings and are converted explicitly.
#[derive(Debug, Deserialize)]
struct EventRecord {
    variable_id: u32,
    start_time: String,
    end_time: String,
    value: f64,
}

fn parse_api_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| VerkkoError::Parse(format!("bad timestamp {raw:?}: {e}")))
}

/// Parses a JSON array of event records into observations.
///
/// # Errors
///
/// Returns an error if the body is not a JSON record array or a record
/// carries an unparseable timestamp.
pub fn parse_events(body: &str) -> Result<Vec<Observation>> {
    let records: Vec<EventRecord> = serde_json::from_str(body)?;
    records
        .into_iter()
        .map(|r| {
            Ok(Observation::new(
                r.variable_id,
                parse_api_timestamp(&r.start_time)?,
                parse_api_timestamp(&r.end_time)?,
                r.value,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_platform_offset_format() {
        let body = r#"[{"value":1530.0,"start_time":"2021-01-01T00:00:00+0000","end_time":"2021-01-01T00:03:00+0000","variable_id":191}]"#;
        let rows = parse_events(body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].variable_id, 191);
        assert_eq!(
            rows[0].start_time,
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_format() {
        let body = r#"[{"value":2.5,"start_time":"2021-06-01T12:00:00Z","end_time":"2021-06-01T13:00:00Z","variable_id":124}]"#;
        let rows = parse_events(body).unwrap();
        assert_eq!(rows[0].value, 2.5);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_events("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_events(r#"{"message":"error"}"#).is_err());
    }
}
