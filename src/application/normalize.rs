//! Column normalization: raw CSV text to typed journal entries

use crate::domain::{Category, CategorySet, JournalEntry};
use crate::error::{JournalChartError, Result};
use crate::infrastructure::RawRecord;
use chrono::NaiveDateTime;

/// Parse timestamps and category labels of every record.
///
/// Fails on the first field that does not parse; the error names the line.
pub fn normalize(records: Vec<RawRecord>, timestamp_format: &str) -> Result<Vec<JournalEntry>> {
    records
        .into_iter()
        .map(|record| normalize_record(record, timestamp_format))
        .collect()
}

fn normalize_record(record: RawRecord, timestamp_format: &str) -> Result<JournalEntry> {
    let start = parse_timestamp(record.line, "start", &record.start, timestamp_format)?;
    let end = parse_timestamp(record.line, "end", &record.end, timestamp_format)?;
    let category = Category::new(&record.category).ok_or_else(|| JournalChartError::Parse {
        line: record.line,
        field: "category",
        value: record.category.clone(),
        reason: "label is empty".to_string(),
    })?;

    Ok(JournalEntry::new(record.line, start, end, category))
}

fn parse_timestamp(
    line: u64,
    field: &'static str,
    value: &str,
    format: &str,
) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).map_err(|e| JournalChartError::Parse {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// The label set present in the journal
pub fn categories(entries: &[JournalEntry]) -> CategorySet {
    entries.iter().map(|entry| entry.category.clone()).collect()
}
