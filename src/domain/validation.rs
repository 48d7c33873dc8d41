//! Temporal consistency checks for journal entries

use crate::domain::JournalEntry;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How overlapping entries are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlapCheck {
    /// Sweep over entries sorted by (start, end), comparing each start against
    /// the latest end seen so far. Finds every entry that overlaps an earlier one,
    /// including short entries nested inside a long one.
    #[default]
    Full,
    /// Compare each entry only with its immediate predecessor in sorted order.
    /// Misses a nested entry when a non-overlapping entry sorts between the two.
    Adjacent,
}

impl FromStr for OverlapCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(OverlapCheck::Full),
            "adjacent" => Ok(OverlapCheck::Adjacent),
            _ => Err(format!(
                "Invalid overlap check: '{}'. Valid values are: full, adjacent",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// start >= end
    Inverted,
    /// interval shares an instant with an earlier entry
    Overlapping,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Inverted => f.write_str("have a start time at or after the end time"),
            ViolationKind::Overlapping => f.write_str("overlap with others"),
        }
    }
}

/// An offending entry, and for overlaps the earlier entry it collides with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub entry: JournalEntry,
    pub conflicts_with: Option<JournalEntry>,
}

/// Every row that failed one check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} journal entries {}", .violations.len(), .kind)]
pub struct ValidationError {
    pub kind: ViolationKind,
    pub violations: Vec<Violation>,
}

/// Run the inversion check, then the overlap check.
///
/// Inversions are reported first; overlaps are only looked for once every
/// entry is a proper interval.
pub fn validate(entries: &[JournalEntry], mode: OverlapCheck) -> Result<(), ValidationError> {
    check_inversions(entries)?;
    check_overlaps(entries, mode)
}

/// Reject every entry whose start is not strictly before its end
pub fn check_inversions(entries: &[JournalEntry]) -> Result<(), ValidationError> {
    let violations: Vec<Violation> = entries
        .iter()
        .filter(|entry| entry.is_inverted())
        .map(|entry| Violation {
            entry: entry.clone(),
            conflicts_with: None,
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            kind: ViolationKind::Inverted,
            violations,
        })
    }
}

/// Reject entries whose `[start, end)` interval overlaps an earlier entry
pub fn check_overlaps(entries: &[JournalEntry], mode: OverlapCheck) -> Result<(), ValidationError> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| (entry.start, entry.end, entry.line));

    let mut violations = Vec::new();
    // Entry compared against: the predecessor (adjacent) or the furthest-reaching one (full)
    let mut reference: Option<&JournalEntry> = None;

    for entry in sorted {
        if let Some(previous) = reference {
            if entry.start < previous.end {
                violations.push(Violation {
                    entry: entry.clone(),
                    conflicts_with: Some(previous.clone()),
                });
            }
        }

        reference = match (mode, reference) {
            (OverlapCheck::Full, Some(previous)) if previous.end >= entry.end => Some(previous),
            _ => Some(entry),
        };
    }

    if violations.is_empty() {
        Ok(())
    } else {
        violations.sort_by_key(|v| v.entry.line);
        Err(ValidationError {
            kind: ViolationKind::Overlapping,
            violations,
        })
    }
}
