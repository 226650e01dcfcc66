//! Info command implementation.
//!
//! This module handles displaying detailed information about a single
//! catalog dataset, located by id, exact name, or fuzzy name match.

use anyhow::{Context, Result};
use verkko_lib::prelude::*;

/// Show detailed information about a dataset.
pub(crate) fn show_info(reference: &str) -> Result<()> {
    let catalog = DatasetCatalog::global();

    let query = DatasetQuery::parse(reference);
    let dataset = match &query {
        DatasetQuery::Id(id) => catalog.get_by_id(*id),
        DatasetQuery::Name(name) => catalog.get_by_name(name).or_else(|| {
            NameResolver::new(catalog)
                .resolve(&query)
                .first()
                .and_then(|r| catalog.get_by_id(r.variable_id))
        }),
    }
    .with_context(|| format!("Unknown dataset: {reference}"))?;

    println!("Dataset: {}", dataset.name());
    match dataset.variable_id() {
        Some(id) => println!("ID:      {id}"),
        None => println!("ID:      - (archive only, not queryable)"),
    }
    let formats = dataset
        .formats()
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Formats: {formats}");
    println!("Description: {}", dataset.description());

    Ok(())
}
