//! Rust client library for the Fingrid open data platform.
//!
//! This is a facade crate that re-exports functionality from the verkko
//! workspace crates and hosts [`OpenDataClient`], the high-level retrieval
//! entry point.
//!
//! # Quick Start
//!
//! ```ignore
//! use verkko_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenDataClient::with_api_key("your-api-key")?;
//!
//!     let queries = [DatasetQuery::parse("electricity consumption in finland")];
//!     let start = chrono::Utc::now() - chrono::TimeDelta::days(1);
//!
//!     match client.get_data(&queries, Some(start), None).await? {
//!         Retrieval::History(tables) => {
//!             for table in tables {
//!                 println!("{}: {} rows", table.name, table.rows.len());
//!             }
//!         }
//!         Retrieval::Latest(rows) => {
//!             for row in rows {
//!                 println!("{}: {}", row.dataset_name, row.observation.value);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/verkko-data/verkko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "fetch")]
mod client;

// Re-export core types
pub use verkko_types::*;

// Re-export the dataset catalog and name resolution
pub use verkko_catalog::{DEFAULT_CUTOFF, DatasetCatalog, NameResolver};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use verkko_fetch::{
    ApiClient, ApiKeyPlacement, ClientConfig, Fetch, RateLimiter, RawResponse, SplitOutcome,
    SplitterConfig, collect_events,
};

#[cfg(feature = "fetch")]
pub use client::{DatasetTable, OpenDataClient, Retrieval};

// Re-export formatters
#[cfg(feature = "format")]
pub use verkko_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, output_filename,
};

/// Prelude module for convenient imports.
///
/// ```
/// use verkko_lib::prelude::*;
/// ```
pub mod prelude {
    pub use verkko_types::{
        Dataset, DatasetQuery, Observation, ResolvedDataset, Result, TimeWindow, VerkkoError,
    };

    pub use verkko_catalog::{DatasetCatalog, NameResolver};

    #[cfg(feature = "fetch")]
    pub use verkko_fetch::{ApiClient, ClientConfig, Fetch, SplitterConfig};

    #[cfg(feature = "fetch")]
    pub use crate::client::{DatasetTable, OpenDataClient, Retrieval};

    #[cfg(feature = "format")]
    pub use verkko_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
