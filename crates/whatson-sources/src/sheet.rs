//! Static sheet-file event source.
//!
//! The site keeps hand-maintained events in a tab-separated text file
//! exported from a spreadsheet: the first row names the columns, every
//! later row maps positionally onto those names. Column names are folded
//! to lowercase with spaces removed, so "Ticket Link" becomes `ticketlink`.

use std::path::PathBuf;

use serde::Deserialize;
use whatson_core::RawEvent;

use crate::error::SourceResult;
use crate::source::EventSource;

fn default_start_column() -> String {
    "date".to_string()
}

/// Configuration for the sheet-file source.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Path to the tab-separated event file.
    pub path: PathBuf,

    /// Which column holds the event start (date or datetime text).
    #[serde(default = "default_start_column")]
    pub start_column: String,
}

impl SheetConfig {
    /// Creates a config with the default `date` start column.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            start_column: default_start_column(),
        }
    }
}

/// Event source reading the static sheet file.
pub struct SheetSource {
    config: SheetConfig,
}

impl SheetSource {
    /// Creates a source for the configured file.
    pub fn new(config: SheetConfig) -> Self {
        Self { config }
    }
}

impl EventSource for SheetSource {
    fn name(&self) -> &str {
        "sheet"
    }

    fn fetch_all(&self) -> SourceResult<Vec<RawEvent>> {
        let content = std::fs::read_to_string(&self.config.path)?;
        Ok(parse_sheet(&content, &self.config.start_column))
    }
}

/// Parses header-plus-rows tab-separated text into raw records.
///
/// Blank rows are skipped. A row with fewer cells than the header, or with
/// blank cells, simply omits those fields; the normalizer downstream decides
/// whether the record survives.
pub fn parse_sheet(content: &str, start_column: &str) -> Vec<RawEvent> {
    let mut lines = content.lines();

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns: Vec<String> = header.split('\t').map(normalize_column_name).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(line, &columns, start_column))
        .collect()
}

fn normalize_column_name(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

fn parse_row(line: &str, columns: &[String], start_column: &str) -> RawEvent {
    let mut raw = RawEvent::new();

    for (column, cell) in columns.iter().zip(line.split('\t')) {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        raw = raw.with_field(column, cell);
        if column == start_column {
            raw = raw.with_start(cell);
        }
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SHEET: &str = "Date\tLocation\tTicket Link\n\
                         2025/06/02\tTown Hall\thttps://tickets.example/1\n\
                         \n\
                         2025/06/05\tThe Basement\n\
                         \tNo Date Venue\t\n";

    #[test]
    fn header_names_are_folded() {
        assert_eq!(normalize_column_name("Ticket Link"), "ticketlink");
        assert_eq!(normalize_column_name("Date"), "date");
    }

    #[test]
    fn rows_map_positionally_onto_the_header() {
        let raws = parse_sheet(SHEET, "date");
        assert_eq!(raws.len(), 3);

        assert_eq!(raws[0].start.as_deref(), Some("2025/06/02"));
        assert_eq!(raws[0].location(), Some("Town Hall"));
        assert_eq!(
            raws[0].fields.get("ticketlink").unwrap(),
            "https://tickets.example/1"
        );
    }

    #[test]
    fn blank_rows_are_skipped() {
        // Four data lines in the fixture, one blank.
        assert_eq!(parse_sheet(SHEET, "date").len(), 3);
    }

    #[test]
    fn short_rows_omit_trailing_fields() {
        let raws = parse_sheet(SHEET, "date");
        assert_eq!(raws[1].location(), Some("The Basement"));
        assert!(!raws[1].fields.contains_key("ticketlink"));
    }

    #[test]
    fn blank_cells_omit_the_field() {
        let raws = parse_sheet(SHEET, "date");
        assert_eq!(raws[2].start, None);
        assert_eq!(raws[2].location(), Some("No Date Venue"));
    }

    #[test]
    fn empty_file_yields_nothing() {
        assert!(parse_sheet("", "date").is_empty());
        assert!(parse_sheet("Date\tLocation\n", "date").is_empty());
    }

    #[test]
    fn configurable_start_column() {
        let raws = parse_sheet("when\twhere\tlocation\n2025-06-02\tdowntown\tThe Spot\n", "when");
        assert_eq!(raws[0].start.as_deref(), Some("2025-06-02"));
        assert_eq!(raws[0].location(), Some("The Spot"));
    }

    #[test]
    fn source_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SHEET).unwrap();

        let source = SheetSource::new(SheetConfig::new(file.path()));
        let raws = source.fetch_all().unwrap();
        assert_eq!(raws.len(), 3);
        assert_eq!(source.name(), "sheet");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = SheetSource::new(SheetConfig::new("/nonexistent/events.tsv"));
        assert!(source.fetch_all().is_err());
    }
}
