//! Time window for event retrieval.

use chrono::{DateTime, TimeDelta, Utc};

use crate::TimeWindowError;

/// A half-open retrieval interval `[start, end)`.
///
/// Sub-windows produced by bisection share their boundary timestamp; the
/// half-open convention means a boundary row belongs to exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeWindowError> {
        if start > end {
            return Err(TimeWindowError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the window duration.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the temporal midpoint of the window.
    #[must_use]
    pub fn midpoint(&self) -> DateTime<Utc> {
        self.start + self.span() / 2
    }

    /// Splits the window at its midpoint into two adjacent halves.
    ///
    /// The halves share the midpoint as a boundary; under the half-open
    /// convention no timestamp is covered twice.
    #[must_use]
    pub fn bisect(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (
            Self {
                start: self.start,
                end: mid,
            },
            Self {
                start: mid,
                end: self.end,
            },
        )
    }

    /// Returns true if the given timestamp falls inside the window.
    #[must_use]
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%dT%H:%M:%SZ"),
            self.end.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window(h0: u32, h1: u32) -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2021, 1, 1, h0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 1, h1, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_invalid() {
        let start = Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert!(TimeWindow::new(start, end).is_err());
    }

    #[test]
    fn test_bisect_halves() {
        let w = window(0, 4);
        let (a, b) = w.bisect();
        assert_eq!(a.end, b.start);
        assert_eq!(a.start, w.start);
        assert_eq!(b.end, w.end);
        assert_eq!(a.span(), b.span());
    }

    #[test]
    fn test_contains_half_open() {
        let w = window(0, 2);
        assert!(w.contains(w.start));
        assert!(!w.contains(w.end));
    }
}
