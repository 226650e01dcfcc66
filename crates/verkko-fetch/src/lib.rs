//! HTTP client and data fetching for the verkko Fingrid open data client.
//!
//! This crate provides the retrieval pipeline:
//!
//! - [`url`] - Constructs events and latest-events URLs with the platform's
//!   timestamp and separator encoding
//! - [`ApiClient`] - HTTP client with api-key auth and a rolling call quota
//! - [`RateLimiter`] - Rolling-window call quota shared across requests
//! - [`parse_events`] - JSON event record parsing
//! - [`collect_events`] - Work-queue bisection of oversized time windows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/verkko-data/verkko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod rate_limit;
mod split;
pub mod url;

pub use client::{ApiClient, ApiKeyPlacement, ClientConfig, Fetch, RawResponse};
pub use parse::parse_events;
pub use rate_limit::RateLimiter;
pub use split::{SplitOutcome, SplitterConfig, collect_events};
