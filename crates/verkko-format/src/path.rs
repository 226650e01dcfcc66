//! Output file naming.

use verkko_types::TimeWindow;

const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Builds the conventional output file name for one dataset and window:
/// `{dataset}_{start}_{end}.{extension}`.
///
/// Characters that are unsafe in file names are replaced with `-`, and
/// whitespace with `_`.
#[must_use]
pub fn output_filename(dataset_name: &str, window: &TimeWindow, extension: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        sanitize(dataset_name),
        window.start.format(FILENAME_TIMESTAMP_FORMAT),
        window.end.format(FILENAME_TIMESTAMP_FORMAT),
        extension
    )
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            c if c.is_whitespace() => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_output_filename() {
        let window = TimeWindow::new(
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();

        let name = output_filename("Electricity consumption in Finland", &window, "csv");
        assert_eq!(
            name,
            "Electricity_consumption_in_Finland_20210101T000000Z_20210201T000000Z.csv"
        );
    }

    #[test]
    fn test_sanitize_unsafe_characters() {
        let window = TimeWindow::new(
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap(),
        )
        .unwrap();

        let name = output_filename("Peak load - under 10 MW/unit: test", &window, "json");
        assert!(!name.contains('/'));
        assert!(!name.contains(": "));
        assert!(name.starts_with("Peak_load_-_under_10_MW-unit-_test_"));
    }
}
