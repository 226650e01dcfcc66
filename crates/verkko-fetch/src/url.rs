//! Fingrid Open Data URL construction.

use chrono::{DateTime, Utc};
use verkko_types::TimeWindow;

/// Base URL for the Fingrid Open Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.fingrid.fi/v1";

/// Canonical wire format for request timestamps.
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a timestamp in the canonical wire format with colons
/// percent-encoded, as the platform expects inside query strings.
#[must_use]
pub fn encode_timestamp(t: DateTime<Utc>) -> String {
    t.format(WIRE_TIMESTAMP_FORMAT).to_string().replace(':', "%3A")
}

/// Joins variable ids into the single percent-encoded comma-separated
/// segment used by the batched latest-events request.
#[must_use]
pub fn id_segment(variable_ids: &[u32]) -> String {
    variable_ids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("%2C")
}

/// Builds the URL for one dataset's events over a time window.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use verkko_fetch::url::{DEFAULT_BASE_URL, events_url};
/// use verkko_types::TimeWindow;
///
/// let window = TimeWindow::new(
///     Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap(),
/// ).unwrap();
/// let url = events_url(DEFAULT_BASE_URL, 191, window);
/// assert_eq!(
///     url,
///     "https://api.fingrid.fi/v1/variable/191/events/json?start_time=2021-01-01T00%3A00%3A00Z&end_time=2021-01-02T00%3A00%3A00Z"
/// );
/// ```
#[must_use]
pub fn events_url(base: &str, variable_id: u32, window: TimeWindow) -> String {
    format!(
        "{base}/variable/{variable_id}/events/json?start_time={}&end_time={}",
        encode_timestamp(window.start),
        encode_timestamp(window.end)
    )
}

/// Builds the URL for the batched latest-events request.
#[must_use]
pub fn latest_url(base: &str, variable_ids: &[u32]) -> String {
    format!("{base}/variable/event/json/{}", id_segment(variable_ids))
}
