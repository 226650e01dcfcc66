//! Core types for the verkko Fingrid open data client.
//!
//! This crate provides the fundamental data structures used throughout verkko:
//!
//! - [`Dataset`] - A catalog entry describing one published time series
//! - [`DatasetQuery`] - A caller-supplied dataset reference (id or name)
//! - [`ResolvedDataset`] - A query resolved against the catalog
//! - [`TimeWindow`] - A half-open retrieval interval
//! - [`Observation`] - A single timestamped measurement row

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/verkko-data/verkko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod error;
mod observation;
mod time_window;
mod timestamp;

pub use dataset::{Dataset, DatasetQuery, Format, ResolvedDataset};
pub use error::{Result, RetrievalFailure, TimeWindowError, VerkkoError};
pub use observation::{AnnotatedObservation, Observation};
pub use time_window::TimeWindow;
pub use timestamp::{TimestampParseError, parse_flexible};
