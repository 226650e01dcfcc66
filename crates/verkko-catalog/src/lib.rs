//! Dataset catalog for the verkko Fingrid open data client.
//!
//! This crate provides access to the full list of datasets published on the
//! Fingrid Open Data platform, with their variable ids and supported
//! response formats, plus fuzzy resolution of approximate dataset names.
//!
//! # Example
//!
//! ```
//! use verkko_catalog::DatasetCatalog;
//!
//! let catalog = DatasetCatalog::global();
//!
//! // Lookup by variable id
//! if let Some(dataset) = catalog.get_by_id(191) {
//!     println!("{}", dataset.name());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/verkko-data/verkko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use verkko_types::Dataset;

mod resolver;

pub use resolver::{DEFAULT_CUTOFF, NameResolver};

/// The dataset metadata JSON embedded at compile time.
const DATASETS_JSON: &str = include_str!("../data/datasets.json");

/// Global catalog instance.
static CATALOG: OnceLock<DatasetCatalog> = OnceLock::new();

/// Catalog of all datasets published on the platform.
///
/// Entries keep their publication order; lookups by id and by case-folded
/// name are indexed.
#[derive(Debug)]
pub struct DatasetCatalog {
    datasets: Vec<Dataset>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
}

impl DatasetCatalog {
    /// Returns the global catalog.
    ///
    /// The catalog is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::load)
    }

    /// Loads the catalog from the embedded JSON data.
    fn load() -> Self {
        let datasets: Vec<Dataset> =
            serde_json::from_str(DATASETS_JSON).expect("Invalid datasets.json");
        Self::from_datasets(datasets)
    }

    /// Builds a catalog from an explicit dataset list.
    ///
    /// Mostly useful in tests; production code goes through [`Self::global`].
    #[must_use]
    pub fn from_datasets(datasets: Vec<Dataset>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        for (idx, dataset) in datasets.iter().enumerate() {
            if let Some(id) = dataset.variable_id() {
                by_id.insert(id, idx);
            }
            by_name.insert(dataset.name().to_lowercase(), idx);
        }
        Self {
            datasets,
            by_id,
            by_name,
        }
    }

    /// Looks up a dataset by variable id.
    #[must_use]
    pub fn get_by_id(&self, variable_id: u32) -> Option<&Dataset> {
        self.by_id.get(&variable_id).map(|&idx| &self.datasets[idx])
    }

    /// Looks up a dataset by exact name (case-insensitive).
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Dataset> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.datasets[idx])
    }

    /// Returns all datasets in publication order.
    pub fn all(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    /// Returns the total number of datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Searches datasets by name or description substring (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Dataset> {
        let pattern = pattern.to_lowercase();
        self.datasets
            .iter()
            .filter(|d| {
                d.name().to_lowercase().contains(&pattern)
                    || d.description().to_lowercase().contains(&pattern)
            })
            .collect()
    }

    /// Returns all dataset names in publication order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().map(Dataset::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = DatasetCatalog::global();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = DatasetCatalog::global();
        let hydro = catalog.get_by_id(191).expect("id 191 should exist");
        assert_eq!(hydro.name(), "Hydro power production - real time data");
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let catalog = DatasetCatalog::global();
        assert!(catalog.get_by_name("Electricity consumption in Finland").is_some());
        assert!(catalog.get_by_name("ELECTRICITY CONSUMPTION IN FINLAND").is_some());
    }

    #[test]
    fn test_names_unique() {
        let catalog = DatasetCatalog::global();
        let mut names: Vec<_> = catalog.names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_search() {
        let catalog = DatasetCatalog::global();
        let results = catalog.search("wind");
        assert!(!results.is_empty());
    }

    #[test]
    fn test_archive_only_dataset_has_no_id() {
        let catalog = DatasetCatalog::global();
        let frequency = catalog
            .get_by_name("Frequency - historical data")
            .expect("archive dataset should exist");
        assert!(!frequency.is_queryable());
    }
}
