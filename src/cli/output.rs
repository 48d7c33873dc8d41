//! Output formatting utilities

use crate::domain::{JournalEntry, PivotTable, ValidationError, ViolationKind};

const TIMESTAMP_DISPLAY: &str = "%d.%m.%Y %H:%M";

/// Format every offending row of a failed validation for the error log
pub fn format_violations(error: &ValidationError) -> String {
    let heading = match error.kind {
        ViolationKind::Inverted => {
            "The following entries have a start time at or after the end time:"
        }
        ViolationKind::Overlapping => "The following entries overlap with others:",
    };

    let mut output = format!("{}\n", heading);
    output.push_str(&format!(
        "{:>6}  {:<16}  {:<16}  {}\n",
        "line", "start", "end", "category"
    ));
    for violation in &error.violations {
        output.push_str(&format_entry(&violation.entry));
        if let Some(other) = &violation.conflicts_with {
            output.push_str(&format!(
                "  (overlaps line {}: {} - {})",
                other.line,
                other.start.format(TIMESTAMP_DISPLAY),
                other.end.format(TIMESTAMP_DISPLAY)
            ));
        }
        output.push('\n');
    }
    output
}

fn format_entry(entry: &JournalEntry) -> String {
    format!(
        "{:>6}  {}  {}  {}",
        entry.line,
        entry.start.format(TIMESTAMP_DISPLAY),
        entry.end.format(TIMESTAMP_DISPLAY),
        entry.category
    )
}

/// Format the week × category table of hours
pub fn format_pivot(pivot: &PivotTable) -> String {
    if pivot.is_empty() {
        return "No weekly hours".to_string();
    }

    let widths: Vec<usize> = pivot
        .categories()
        .iter()
        .map(|c| c.as_str().chars().count().max(8))
        .collect();

    let mut output = format!("{:<10}", "week");
    for (category, width) in pivot.categories().iter().zip(&widths) {
        output.push_str(&format!("  {:>width$}", category.as_str(), width = width));
    }
    output.push('\n');

    for (week, values) in pivot.rows() {
        output.push_str(&week.format("%Y-%m-%d").to_string());
        for (value, width) in values.iter().zip(&widths) {
            output.push_str(&format!("  {:>width$.2}", value, width = width));
        }
        output.push('\n');
    }
    output
}
