//! List command implementation.
//!
//! This module handles listing catalog datasets with optional filtering.

use anyhow::Result;
use verkko_lib::prelude::*;

/// List catalog datasets with an optional search pattern.
pub(crate) fn list_datasets(search: Option<&str>) -> Result<()> {
    let catalog = DatasetCatalog::global();

    let datasets: Vec<_> = match search {
        Some(pattern) => catalog.search(pattern),
        None => catalog.all().collect(),
    };

    if datasets.is_empty() {
        println!("No datasets found.");
        return Ok(());
    }

    println!("{:<8} {:<18} NAME", "ID", "FORMATS");
    println!("{}", "-".repeat(70));

    for dataset in &datasets {
        let id = dataset
            .variable_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let formats = dataset
            .formats()
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        println!("{:<8} {:<18} {}", id, formats, dataset.name());
    }

    println!("\nTotal: {} datasets", datasets.len());
    Ok(())
}
