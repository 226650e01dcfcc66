//! Latest command implementation.
//!
//! Fetches the most recent event of each requested dataset in one batched
//! call and writes the annotated rows to stdout or a file.

use anyhow::{Result, bail};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use verkko_lib::prelude::*;

use crate::display::{Format, resolve_api_key, write_annotated};

/// Fetch and write the latest event of each dataset.
pub(crate) async fn latest(
    datasets: &[String],
    format: Format,
    output: Option<&Path>,
    api_key: Option<&str>,
) -> Result<()> {
    let api_key = resolve_api_key(api_key)?;
    let client = OpenDataClient::with_api_key(api_key)?;

    let queries: Vec<DatasetQuery> = datasets.iter().map(|s| DatasetQuery::parse(s)).collect();
    let resolved = client.resolve(&queries);
    if resolved.is_empty() {
        bail!("No dataset matched; run `verkko list` to see available datasets");
    }

    let rows = client.latest(&resolved).await?;

    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_annotated(&rows, BufWriter::new(file), format)?;
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            write_annotated(&rows, std::io::stdout(), format)?;
        }
    }

    Ok(())
}
