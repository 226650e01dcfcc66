//! CSV output format.

use std::io::Write;

use verkko_types::{AnnotatedObservation, Observation};

use crate::{FormatError, Formatter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_observations<W: Write + Send>(
        &self,
        rows: &[Observation],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "variable_id{d}start_time{d}end_time{d}value")?;
        }

        for row in rows {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                row.variable_id,
                row.start_time.format(TIMESTAMP_FORMAT),
                row.end_time.format(TIMESTAMP_FORMAT),
                row.value
            )?;
        }

        Ok(())
    }

    fn write_annotated<W: Write + Send>(
        &self,
        rows: &[AnnotatedObservation],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "dataset_name{d}variable_id{d}start_time{d}end_time{d}value"
            )?;
        }

        for row in rows {
            let o = &row.observation;
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}",
                row.dataset_name,
                o.variable_id,
                o.start_time.format(TIMESTAMP_FORMAT),
                o.end_time.format(TIMESTAMP_FORMAT),
                o.value
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_row() -> Observation {
        let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 1, 1, 1, 0, 0).unwrap();
        Observation::new(191, start, end, 1530.5)
    }

    #[test]
    fn test_csv_rows() {
        let formatter = CsvFormatter::new();
        let rows = vec![create_test_row()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_observations(&rows, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("variable_id,start_time,end_time,value"));
        assert!(result.contains("191,2021-01-01T00:00:00Z,2021-01-01T01:00:00Z,1530.5"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let rows = vec![create_test_row()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_observations(&rows, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("variable_id,start_time"));
    }

    #[test]
    fn test_annotated_rows() {
        let formatter = CsvFormatter::tsv();
        let rows = vec![create_test_row().annotate("Hydro power production - real time data")];
        let mut output = Cursor::new(Vec::new());

        formatter.write_annotated(&rows, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("dataset_name\tvariable_id"));
        assert!(result.contains("Hydro power production - real time data\t191"));
    }
}
