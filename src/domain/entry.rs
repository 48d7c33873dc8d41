//! Journal entries

use crate::domain::Category;
use chrono::{Duration, NaiveDateTime};

/// One tracked activity: a half-open `[start, end)` interval with a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// 1-based line number in the source file
    pub line: u64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: Category,
}

impl JournalEntry {
    pub fn new(line: u64, start: NaiveDateTime, end: NaiveDateTime, category: Category) -> Self {
        JournalEntry {
            line,
            start,
            end,
            category,
        }
    }

    /// True when the entry does not end strictly after it starts
    pub fn is_inverted(&self) -> bool {
        self.start >= self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether two intervals share any instant. Touching intervals do not overlap.
    pub fn overlaps(&self, other: &JournalEntry) -> bool {
        self.start < other.end && other.start < self.end
    }
}
