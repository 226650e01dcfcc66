//! Output formatting for verkko observation tables.
//!
//! This crate writes retrieved observations to delimited or JSON output:
//!
//! - [`CsvFormatter`] - Delimited text with optional header
//! - [`JsonFormatter`] - JSON array or newline-delimited records
//! - [`output_filename`] - Conventional `{dataset}_{start}_{end}` naming

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/verkko-data/verkko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod path;

pub use csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use path::output_filename;
