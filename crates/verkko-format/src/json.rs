//! JSON output formats.

use std::io::Write;

use verkko_types::{AnnotatedObservation, Observation};

use crate::{FormatError, Formatter, OutputFormat};

/// JSON formatter.
///
/// Writes either a single JSON array or newline-delimited records, one
/// object per row.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    /// Whether to emit newline-delimited records instead of one array.
    ndjson: bool,
    /// Whether to pretty-print array output.
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    /// Creates a JSON array formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ndjson: false,
            pretty: false,
        }
    }

    /// Creates a newline-delimited JSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            ndjson: true,
            pretty: false,
        }
    }

    /// Sets whether array output is pretty-printed. Ignored for NDJSON.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the output format this formatter produces.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        if self.ndjson {
            OutputFormat::Ndjson
        } else {
            OutputFormat::Json
        }
    }

    fn write_rows<T: serde::Serialize, W: Write>(
        &self,
        rows: &[T],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.ndjson {
            for row in rows {
                serde_json::to_writer(&mut writer, row)?;
                writeln!(writer)?;
            }
        } else if self.pretty {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
        } else {
            serde_json::to_writer(&mut writer, rows)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_observations<W: Write + Send>(
        &self,
        rows: &[Observation],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(rows, writer)
    }

    fn write_annotated<W: Write + Send>(
        &self,
        rows: &[AnnotatedObservation],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(rows, writer)
    }

    fn extension(&self) -> &str {
        self.format().extension()
    }
}
