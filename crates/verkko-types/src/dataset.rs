//! Dataset catalog entry definitions.

use serde::{Deserialize, Serialize};

/// Response format supported by a dataset endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Comma-separated values.
    Csv,
    /// JSON array of event records.
    Json,
    /// Mobile application feed.
    App,
    /// Monthly zip archives of measurement files.
    Zip,
}

impl Format {
    /// Returns the format as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::App => "app",
            Self::Zip => "zip",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dataset published on the Fingrid Open Data platform.
///
/// Entries are embedded at compile time and never mutated after the catalog
/// is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Human-readable name, unique within the catalog.
    name: String,
    /// Numeric variable id used on the wire. Absent for datasets that are
    /// only published as downloadable archives.
    variable_id: Option<u32>,
    /// Response formats the platform offers for this dataset.
    formats: Vec<Format>,
    /// Short description of the dataset.
    description: String,
}

impl Dataset {
    /// Creates a new dataset descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        variable_id: Option<u32>,
        formats: Vec<Format>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            variable_id,
            formats,
            description: description.into(),
        }
    }

    /// Returns the dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numeric variable id, if the dataset has one.
    #[must_use]
    pub const fn variable_id(&self) -> Option<u32> {
        self.variable_id
    }

    /// Returns the supported response formats.
    #[must_use]
    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// Returns the dataset description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the dataset can be queried through the events API.
    #[must_use]
    pub const fn is_queryable(&self) -> bool {
        self.variable_id.is_some()
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.variable_id {
            Some(id) => write!(f, "{} (id {id})", self.name),
            None => write!(f, "{} (no id)", self.name),
        }
    }
}

/// A caller-supplied dataset reference.
///
/// The variant is decided once, when the query enters the API: anything that
/// parses as an integer is an id, everything else is a name fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatasetQuery {
    /// An exact numeric variable id.
    Id(u32),
    /// A free-text name or keyword fragment.
    Name(String),
}

impl DatasetQuery {
    /// Parses a raw string into a query, preferring the id interpretation.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<u32>()
            .map_or_else(|_| Self::Name(raw.to_string()), Self::Id)
    }
}

impl From<u32> for DatasetQuery {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for DatasetQuery {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for DatasetQuery {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl std::fmt::Display for DatasetQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A query resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedDataset {
    /// The exact catalog name that matched.
    pub name: String,
    /// The variable id belonging to the matched entry.
    pub variable_id: u32,
}

impl ResolvedDataset {
    /// Creates a new resolved dataset.
    #[must_use]
    pub fn new(name: impl Into<String>, variable_id: u32) -> Self {
        Self {
            name: name.into(),
            variable_id,
        }
    }
}

impl std::fmt::Display for ResolvedDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (id {})", self.name, self.variable_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parse_id() {
        assert_eq!(DatasetQuery::parse("191"), DatasetQuery::Id(191));
        assert_eq!(DatasetQuery::parse(" 75 "), DatasetQuery::Id(75));
    }

    #[test]
    fn test_query_parse_name() {
        assert_eq!(
            DatasetQuery::parse("Hydro power"),
            DatasetQuery::Name("Hydro power".to_string())
        );
        // Mixed alphanumerics are names, not ids.
        assert_eq!(
            DatasetQuery::parse("75b"),
            DatasetQuery::Name("75b".to_string())
        );
    }

    #[test]
    fn test_dataset_queryable() {
        let with_id = Dataset::new("A", Some(1), vec![Format::Json], "");
        let without = Dataset::new("B", None, vec![Format::Zip], "");
        assert!(with_id.is_queryable());
        assert!(!without.is_queryable());
    }
}
