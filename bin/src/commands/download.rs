//! Download command implementation.
//!
//! Retrieves each requested dataset's events over a time period and writes
//! one output file per dataset, bisecting windows the platform rejects as
//! too large.

use anyhow::{Result, bail};
use chrono::Utc;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use verkko_lib::output_filename;
use verkko_lib::prelude::*;

use crate::display::{Format, parse_timestamp, resolve_api_key, write_observations};

/// Download dataset events over a time period, one file per dataset.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn download(
    datasets: &[String],
    start: &str,
    end: Option<&str>,
    output_dir: &Path,
    format: Format,
    cutoff: f64,
    api_key: Option<&str>,
) -> Result<()> {
    let api_key = resolve_api_key(api_key)?;
    let start = parse_timestamp(start)?;
    let end = end.map(parse_timestamp).transpose()?.unwrap_or_else(Utc::now);
    let window = TimeWindow::new(start, end)?;

    let client = OpenDataClient::with_api_key(api_key)?.with_cutoff(cutoff);

    let queries: Vec<DatasetQuery> = datasets.iter().map(|s| DatasetQuery::parse(s)).collect();
    let resolved = client.resolve(&queries);
    if resolved.is_empty() {
        bail!("No dataset matched; run `verkko list` to see available datasets");
    }

    std::fs::create_dir_all(output_dir)?;
    let tables = client.history(&resolved, window).await;

    for table in &tables {
        let filename = output_filename(&table.name, &window, format.extension());
        let path = output_dir.join(filename);
        let file = File::create(&path)?;
        write_observations(&table.rows, BufWriter::new(file), format)?;
        println!("{}: {} rows -> {}", table.name, table.rows.len(), path.display());
        for failure in &table.failures {
            eprintln!("  warning: {failure}");
        }
    }

    let incomplete = tables.iter().filter(|t| !t.is_complete()).count();
    if incomplete > 0 {
        println!("\n{incomplete} dataset(s) had incomplete windows.");
    }

    Ok(())
}
