//! Display utilities and output formatting for the verkko CLI.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use std::io::Write;
use verkko_lib::prelude::*;
use verkko_lib::{AnnotatedObservation, parse_flexible};

/// Output format for retrieved data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write one dataset's rows in the specified format.
pub(crate) fn write_observations<W: Write + Send>(
    rows: &[Observation],
    writer: W,
    format: Format,
) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_observations(rows, writer)?,
        Format::Json => JsonFormatter::new().write_observations(rows, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_observations(rows, writer)?,
    }
    Ok(())
}

/// Write name-annotated rows in the specified format.
pub(crate) fn write_annotated<W: Write + Send>(
    rows: &[AnnotatedObservation],
    writer: W,
    format: Format,
) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_annotated(rows, writer)?,
        Format::Json => JsonFormatter::new().write_annotated(rows, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_annotated(rows, writer)?,
    }
    Ok(())
}

/// Parse a command-line timestamp argument.
pub(crate) fn parse_timestamp(raw: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    parse_flexible(raw).with_context(|| format!("Invalid timestamp: {raw}"))
}

/// Resolve the api key from the flag or the environment.
pub(crate) fn resolve_api_key(flag: Option<&str>) -> Result<String> {
    if let Some(key) = flag {
        return Ok(key.to_string());
    }
    match std::env::var("VERKKO_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => bail!("No api key: pass --api-key or set VERKKO_API_KEY"),
    }
}
