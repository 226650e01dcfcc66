//! Flexible timestamp input parsing.
//!
//! The platform accepts request timestamps as `YYYY-MM-DDTHH:MM:SSZ`. Callers
//! may supply digit strings of varying precision (year only up to full
//! seconds); shorter strings imply coarser precision and missing components
//! default to their minimum.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Error for unparseable timestamp input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampParseError {
    /// The digit string length does not match any accepted precision.
    #[error("Unrecognized timestamp length: {0:?} (expected 4-14 digits)")]
    UnrecognizedLength(String),
    /// The digits do not form a valid calendar timestamp.
    #[error("Invalid timestamp: {0:?}")]
    Invalid(String),
}

/// Parses a digit string of year to full-second precision into a UTC
/// timestamp.
///
/// Accepted shapes: `YYYY`, `YYYYMM`, `YYYYMMDD`, `YYYYMMDDHH`,
/// `YYYYMMDDHHMM`, `YYYYMMDDHHMMSS`.
///
/// # Errors
///
/// Returns an error if the string length matches no accepted precision or
/// the digits form no valid calendar timestamp.
pub fn parse_flexible(raw: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    let s = raw.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        // Fall back to the canonical wire format for already-formed inputs.
        return DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| TimestampParseError::Invalid(raw.to_string()));
    }

    let digits = |range: std::ops::Range<usize>| -> Result<u32, TimestampParseError> {
        s.get(range)
            .and_then(|part| part.parse().ok())
            .ok_or_else(|| TimestampParseError::Invalid(raw.to_string()))
    };

    if s.len() < 4 || s.len() > 14 || s.len() % 2 != 0 {
        return Err(TimestampParseError::UnrecognizedLength(raw.to_string()));
    }

    let year = digits(0..4)? as i32;
    let month = if s.len() >= 6 { digits(4..6)? } else { 1 };
    let day = if s.len() >= 8 { digits(6..8)? } else { 1 };
    let hour = if s.len() >= 10 { digits(8..10)? } else { 0 };
    let minute = if s.len() >= 12 { digits(10..12)? } else { 0 };
    let second = if s.len() >= 14 { digits(12..14)? } else { 0 };

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TimestampParseError::Invalid(raw.to_string()))?;
    let naive: NaiveDateTime = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| TimestampParseError::Invalid(raw.to_string()))?;

    Ok(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_year_only() {
        let t = parse_flexible("2021").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_full_precision() {
        let t = parse_flexible("20210315123045").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2021, 3, 15, 12, 30, 45).unwrap());
    }

    #[test]
    fn test_intermediate_precisions() {
        assert_eq!(
            parse_flexible("202103").unwrap(),
            Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_flexible("2021031512").unwrap(),
            Utc.with_ymd_and_hms(2021, 3, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rfc3339_passthrough() {
        let t = parse_flexible("2021-03-15T12:30:45Z").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2021, 3, 15, 12, 30, 45).unwrap());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_flexible("21").is_err());
        assert!(parse_flexible("20219999").is_err());
        assert!(parse_flexible("not a date").is_err());
    }
}
