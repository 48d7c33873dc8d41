//! Journal-to-chart pipeline
//!
//! Loader → Normalizer → Validator → Deriver → Aggregator → Renderer.
//! Each stage returns a `Result`; the first failure stops the run.

use crate::application::normalize::{categories, normalize};
use crate::domain::{
    derive_features, summarize, validate, CategorySet, PivotTable, WeeklyCategorySummary,
};
use crate::error::{JournalChartError, Result};
use crate::infrastructure::{load_csv, render_chart, Config, RawRecord};
use std::path::Path;
use tracing::{debug, info};

/// Everything computed from a valid journal
#[derive(Debug, Clone, PartialEq)]
pub struct JournalReport {
    pub entries: usize,
    pub categories: CategorySet,
    pub summaries: Vec<WeeklyCategorySummary>,
    pub pivot: PivotTable,
}

impl JournalReport {
    pub fn total_hours(&self) -> f64 {
        self.pivot.total()
    }
}

/// Normalize, validate and aggregate loaded rows
pub fn analyze(records: Vec<RawRecord>, config: &Config) -> Result<JournalReport> {
    let entries = normalize(records, &config.timestamp_format)?;
    debug!(entries = entries.len(), "Normalized journal columns");

    validate(&entries, config.overlap_check)?;
    if entries.is_empty() {
        return Err(JournalChartError::EmptyJournal);
    }

    let categories = categories(&entries);
    let count = entries.len();
    let derived = derive_features(entries, config.week_start);
    let summaries = summarize(&derived);
    let pivot = PivotTable::from_summaries(&summaries);
    debug!(
        weeks = pivot.weeks().len(),
        categories = categories.len(),
        "Aggregated weekly hours"
    );

    Ok(JournalReport {
        entries: count,
        categories,
        summaries,
        pivot,
    })
}

/// Run the whole pipeline from `source` CSV to `dest` image
pub fn run(source: &Path, dest: &Path, config: &Config) -> Result<JournalReport> {
    let records = load_csv(source)?;
    info!(rows = records.len(), source = %source.display(), "Loaded journal");

    let report = analyze(records, config)?;
    render_chart(&report.pivot, dest, config.chart)?;
    info!(
        total_hours = %format!("{:.2}", report.total_hours()),
        dest = %dest.display(),
        "Wrote chart"
    );

    Ok(report)
}
