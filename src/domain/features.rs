//! Derived columns: duration and week bucket

use crate::domain::{JournalEntry, WeekStart};
use chrono::NaiveDate;

/// A validated entry together with its derived features
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedEntry {
    pub entry: JournalEntry,
    /// `(end - start)` in fractional hours
    pub duration_hours: f64,
    /// First day of the calendar week containing `start`
    pub start_week: NaiveDate,
}

impl DerivedEntry {
    pub fn from_entry(entry: JournalEntry, week_start: WeekStart) -> Self {
        let duration_hours = entry.duration().num_seconds() as f64 / 3600.0;
        let start_week = week_start.week_of(entry.start);
        DerivedEntry {
            entry,
            duration_hours,
            start_week,
        }
    }
}

/// Compute duration and week bucket for every entry, preserving input order
pub fn derive_features(entries: Vec<JournalEntry>, week_start: WeekStart) -> Vec<DerivedEntry> {
    entries
        .into_iter()
        .map(|entry| DerivedEntry::from_entry(entry, week_start))
        .collect()
}
