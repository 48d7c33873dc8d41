//! CSV loading

use crate::error::{JournalChartError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every journal must provide. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["start", "end", "category"];

/// One journal row as text, before any type conversion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(skip)]
    pub line: u64,
    pub start: String,
    pub end: String,
    pub category: String,
}

/// Read a journal CSV file from disk
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|source| JournalChartError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Read journal rows from any reader. The first row is the header.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while rdr.read_record(&mut row)? {
        let mut record: RawRecord = row.deserialize(Some(&headers))?;
        record.line = row.position().map(|p| p.line()).unwrap_or_default();
        records.push(record);
    }

    Ok(records)
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(JournalChartError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_records_with_line_numbers() {
        let data = "start,end,category\n\
                    01.01.2024 09:00,01.01.2024 10:00,work\n\
                    01.01.2024 10:00,01.01.2024 11:00,reading\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[0].start, "01.01.2024 09:00");
        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].category, "reading");
    }

    #[test]
    fn test_leading_whitespace_tolerated() {
        let data = "start, end, category\n01.01.2024 09:00, 01.01.2024 10:00,  work\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].end, "01.01.2024 10:00");
        assert_eq!(records[0].category, "work");
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let data = "note,category,end,start\nmeeting,work,01.01.2024 10:00,01.01.2024 09:00\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].start, "01.01.2024 09:00");
        assert_eq!(records[0].end, "01.01.2024 10:00");
        assert_eq!(records[0].category, "work");
    }

    #[test]
    fn test_missing_column() {
        let data = "start,category\n01.01.2024 09:00,work\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, JournalChartError::MissingColumn(ref c) if c == "end"));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let data = "start,end,category\n01.01.2024 09:00,01.01.2024 10:00\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, JournalChartError::Csv(_)));
    }

    #[test]
    fn test_header_only() {
        let records = read_records("start,end,category\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_csv_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.csv");
        fs::write(&path, "start,end,category\n01.01.2024 09:00,01.01.2024 10:00,work\n").unwrap();

        let records = load_csv(&path).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_csv(&temp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, JournalChartError::Read { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
