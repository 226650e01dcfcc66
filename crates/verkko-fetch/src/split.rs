//! Adaptive bisection of oversized time windows.

use std::collections::VecDeque;

use chrono::TimeDelta;
use tracing::{debug, warn};
use verkko_types::{Observation, RetrievalFailure, TimeWindow};

use crate::client::Fetch;
use crate::parse::parse_events;

/// Substring the platform puts in the error body when a request would
/// return more rows than one call permits.
pub const TOO_MANY_ROWS_MARKER: &str = "Requested row count is too large";

/// Tuning for window bisection.
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Maximum bisection depth before a window fails terminally.
    pub max_depth: u32,
    /// Error-body substring identifying a too-many-rows rejection.
    pub too_many_rows_marker: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_depth: 24,
            too_many_rows_marker: TOO_MANY_ROWS_MARKER.to_string(),
        }
    }
}

/// Outcome of collecting one dataset over a (possibly subdivided) window.
#[derive(Debug, Default)]
pub struct SplitOutcome {
    /// Accumulated rows, chronological across sub-windows.
    pub rows: Vec<Observation>,
    /// Sub-windows that failed terminally.
    pub failures: Vec<RetrievalFailure>,
    /// Number of requests issued.
    pub requests: usize,
}

impl SplitOutcome {
    /// Returns true if every sub-window succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collects one dataset's events over a window, bisecting on too-many-rows
/// rejections.
///
/// An explicit work queue of pending windows is processed in temporal
/// order, so accumulated rows stay chronological without sorting. A window
/// the platform rejects as too large is replaced by its two halves at the
/// front of the queue; each split halves the span, so depth is logarithmic
/// in the original span, and `max_depth` bounds the pathological case of an
/// endpoint that rejects every window. Rows are concatenated, not
/// deduplicated; sub-window boundaries are half-open.
pub async fn collect_events<F: Fetch>(
    fetcher: &F,
    config: &SplitterConfig,
    variable_id: u32,
    window: TimeWindow,
) -> SplitOutcome {
    let mut queue: VecDeque<(TimeWindow, u32)> = VecDeque::from([(window, 0)]);
    let mut outcome = SplitOutcome::default();

    while let Some((window, depth)) = queue.pop_front() {
        outcome.requests += 1;

        let response = match fetcher.events(variable_id, window).await {
            Ok(response) => response,
            Err(e) => {
                warn!(variable_id, %window, error = %e, "transport failure");
                outcome.failures.push(RetrievalFailure::Transport {
                    window,
                    message: e.to_string(),
                });
                continue;
            }
        };

        if response.is_success() {
            match parse_events(&response.body) {
                Ok(rows) => outcome.rows.extend(rows),
                Err(e) => outcome.failures.push(RetrievalFailure::Parse {
                    window,
                    message: e.to_string(),
                }),
            }
            continue;
        }

        if response.body.contains(&config.too_many_rows_marker) {
            if depth >= config.max_depth || window.span() <= TimeDelta::seconds(1) {
                warn!(variable_id, %window, depth, "bisection depth exhausted");
                outcome
                    .failures
                    .push(RetrievalFailure::DepthExceeded { window, depth });
                continue;
            }
            debug!(variable_id, %window, depth, "window too large, bisecting");
            let (first, second) = window.bisect();
            // Front of the queue, first half first, to keep temporal order.
            queue.push_front((second, depth + 1));
            queue.push_front((first, depth + 1));
            continue;
        }

        warn!(variable_id, %window, status = response.status, "request failed");
        outcome.failures.push(RetrievalFailure::Request {
            window,
            status: response.status,
            body: response.body,
        });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex;
    use verkko_types::{Result, VerkkoError};

    use crate::client::RawResponse;

    /// Succeeds for windows at most `max_span` wide, otherwise answers with
    /// the too-many-rows rejection. Records every window it was asked for.
    struct ThresholdEndpoint {
        max_span: TimeDelta,
        seen: Mutex<Vec<TimeWindow>>,
    }

    impl ThresholdEndpoint {
        fn new(max_span: TimeDelta) -> Self {
            Self {
                max_span,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, window: TimeWindow) {
            self.seen.lock().unwrap().push(window);
        }
    }

    #[async_trait]
    impl Fetch for ThresholdEndpoint {
        async fn events(&self, variable_id: u32, window: TimeWindow) -> Result<RawResponse> {
            self.record(window);
            if window.span() > self.max_span {
                return Ok(RawResponse {
                    status: 416,
                    body: TOO_MANY_ROWS_MARKER.to_string(),
                });
            }
            let row = format!(
                r#"[{{"value":1.0,"start_time":"{}","end_time":"{}","variable_id":{variable_id}}}]"#,
                window.start.format("%Y-%m-%dT%H:%M:%SZ"),
                window.end.format("%Y-%m-%dT%H:%M:%SZ"),
            );
            Ok(RawResponse {
                status: 200,
                body: row,
            })
        }

        async fn latest(&self, _variable_ids: &[u32]) -> Result<RawResponse> {
            Err(VerkkoError::Http("not used".to_string()))
        }
    }

    /// Rejects every window as too large.
    struct AlwaysTooLarge;

    #[async_trait]
    impl Fetch for AlwaysTooLarge {
        async fn events(&self, _variable_id: u32, _window: TimeWindow) -> Result<RawResponse> {
            Ok(RawResponse {
                status: 416,
                body: format!("error: {TOO_MANY_ROWS_MARKER}"),
            })
        }

        async fn latest(&self, _variable_ids: &[u32]) -> Result<RawResponse> {
            Err(VerkkoError::Http("not used".to_string()))
        }
    }

    fn hour(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 1, h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_four_hour_window_becomes_four_one_hour_requests() {
        let endpoint = ThresholdEndpoint::new(TimeDelta::hours(1));
        let window = TimeWindow::new(hour(0), hour(4)).unwrap();

        let outcome =
            collect_events(&endpoint, &SplitterConfig::default(), 191, window).await;

        assert!(outcome.is_complete());

        let seen = endpoint.seen.lock().unwrap();
        let succeeded: Vec<_> = seen
            .iter()
            .filter(|w| w.span() <= TimeDelta::hours(1))
            .collect();
        assert_eq!(succeeded.len(), 4);

        // Full coverage, no gaps, chronological.
        for (i, w) in succeeded.iter().enumerate() {
            assert_eq!(w.start, hour(i as u32));
            assert_eq!(w.end, hour(i as u32 + 1));
        }

        // No over-wide window is ever sent twice.
        let mut wide: Vec<_> = seen
            .iter()
            .filter(|w| w.span() > TimeDelta::hours(1))
            .collect();
        let total = wide.len();
        wide.sort_by_key(|w| (w.start, w.end));
        wide.dedup();
        assert_eq!(wide.len(), total);
    }

    #[tokio::test]
    async fn test_rows_accumulate_chronologically() {
        let endpoint = ThresholdEndpoint::new(TimeDelta::hours(1));
        let window = TimeWindow::new(hour(0), hour(4)).unwrap();

        let outcome =
            collect_events(&endpoint, &SplitterConfig::default(), 191, window).await;

        assert_eq!(outcome.rows.len(), 4);
        for pair in outcome.rows.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
        }
    }

    #[tokio::test]
    async fn test_pathological_endpoint_terminates_at_depth_bound() {
        let config = SplitterConfig {
            max_depth: 5,
            ..SplitterConfig::default()
        };
        let window = TimeWindow::new(hour(0), hour(16)).unwrap();

        let outcome = collect_events(&AlwaysTooLarge, &config, 191, window).await;

        assert!(outcome.rows.is_empty());
        assert!(!outcome.is_complete());
        assert!(
            outcome
                .failures
                .iter()
                .all(|f| matches!(f, RetrievalFailure::DepthExceeded { depth: 5, .. }))
        );
        // Full binary subdivision: 2^0 + 2^1 + ... + 2^5 requests.
        assert_eq!(outcome.requests, 63);
    }

    #[tokio::test]
    async fn test_other_failures_are_terminal_not_retried() {
        struct ServerError(Mutex<usize>);

        #[async_trait]
        impl Fetch for ServerError {
            async fn events(&self, _id: u32, _window: TimeWindow) -> Result<RawResponse> {
                *self.0.lock().unwrap() += 1;
                Ok(RawResponse {
                    status: 500,
                    body: "internal error".to_string(),
                })
            }

            async fn latest(&self, _ids: &[u32]) -> Result<RawResponse> {
                Err(VerkkoError::Http("not used".to_string()))
            }
        }

        let endpoint = ServerError(Mutex::new(0));
        let window = TimeWindow::new(hour(0), hour(4)).unwrap();
        let outcome =
            collect_events(&endpoint, &SplitterConfig::default(), 191, window).await;

        assert_eq!(*endpoint.0.lock().unwrap(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0],
            RetrievalFailure::Request { status: 500, .. }
        ));
    }
}
