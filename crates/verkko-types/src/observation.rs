//! Observation rows returned by the events API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped measurement row.
///
/// Matches the JSON record shape of the platform's events endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Variable id of the dataset the row belongs to.
    pub variable_id: u32,
    /// Start of the measurement interval.
    pub start_time: DateTime<Utc>,
    /// End of the measurement interval.
    pub end_time: DateTime<Utc>,
    /// Measured value.
    pub value: f64,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(
        variable_id: u32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self {
            variable_id,
            start_time,
            end_time,
            value,
        }
    }

    /// Annotates the row with the catalog name of its dataset.
    #[must_use]
    pub fn annotate(self, dataset_name: impl Into<String>) -> AnnotatedObservation {
        AnnotatedObservation {
            dataset_name: dataset_name.into(),
            observation: self,
        }
    }
}

/// An observation row annotated with its dataset name.
///
/// Produced by the batched latest-events request, where rows from several
/// datasets arrive in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedObservation {
    /// Catalog name of the dataset.
    pub dataset_name: String,
    /// The underlying observation.
    #[serde(flatten)]
    pub observation: Observation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_annotate() {
        let t = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let row = Observation::new(191, t, t, 1530.0);
        let annotated = row.clone().annotate("Hydro power production - real time data");
        assert_eq!(
            annotated.dataset_name,
            "Hydro power production - real time data"
        );
        assert_eq!(annotated.observation, row);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"value":7362.0,"start_time":"2021-01-01T00:00:00Z","end_time":"2021-01-01T01:00:00Z","variable_id":124}"#;
        let row: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(row.variable_id, 124);
        assert_eq!(row.value, 7362.0);
    }
}
