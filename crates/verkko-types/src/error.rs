//! Error types for verkko.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::TimeWindow;
use crate::timestamp::TimestampParseError;

/// Result type alias for verkko operations.
pub type Result<T> = std::result::Result<T, VerkkoError>;

/// Errors that can occur during dataset resolution and retrieval.
#[derive(Error, Debug)]
pub enum VerkkoError {
    /// HTTP transport failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The platform answered with a non-success status.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated by the caller if needed.
        body: String,
    },

    /// None of the requested datasets matched a catalog entry.
    #[error("No matches found in the dataset catalog")]
    NoMatches,

    /// A single dataset lookup failed in strict mode.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// A history request gave an end time without a start time.
    #[error("End time given without start time")]
    EndWithoutStart,

    /// Invalid time window.
    #[error(transparent)]
    TimeWindow(#[from] TimeWindowError),

    /// Unparseable timestamp input.
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),

    /// Response body was not the expected JSON record array.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid time windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeWindowError {
    /// Window start is after its end.
    #[error("Invalid time window: {start} > {end}")]
    InvalidWindow {
        /// The window start.
        start: DateTime<Utc>,
        /// The window end.
        end: DateTime<Utc>,
    },
}

/// Terminal failure for one dataset or sub-window, carried in results
/// instead of aborting the whole retrieval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalFailure {
    /// The platform rejected the request and subdivision does not apply.
    #[error("Request failed for window {window} (status {status}): {body}")]
    Request {
        /// The window the request covered.
        window: TimeWindow,
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The window still reported too many rows at the subdivision depth cap.
    #[error("Window {window} still too large at depth {depth}")]
    DepthExceeded {
        /// The window that could not be narrowed further.
        window: TimeWindow,
        /// The depth at which subdivision stopped.
        depth: u32,
    },

    /// Transport failed for this window.
    #[error("Transport failed for window {window}: {message}")]
    Transport {
        /// The window the request covered.
        window: TimeWindow,
        /// Underlying transport error message.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("Unparseable response for window {window}: {message}")]
    Parse {
        /// The window the request covered.
        window: TimeWindow,
        /// Underlying parse error message.
        message: String,
    },
}
