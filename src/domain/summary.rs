//! Weekly aggregation and the week × category pivot

use crate::domain::{Category, DerivedEntry};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Summed hours for one (week, category) pair present in the journal
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyCategorySummary {
    pub week_start: NaiveDate,
    pub category: Category,
    pub total_hours: f64,
}

/// Group derived entries by (week, category) and sum their durations.
///
/// Output is ordered by week, then category.
pub fn summarize(entries: &[DerivedEntry]) -> Vec<WeeklyCategorySummary> {
    let mut totals: BTreeMap<(NaiveDate, Category), f64> = BTreeMap::new();
    for row in entries {
        *totals
            .entry((row.start_week, row.entry.category.clone()))
            .or_insert(0.0) += row.duration_hours;
    }

    totals
        .into_iter()
        .map(|((week_start, category), total_hours)| WeeklyCategorySummary {
            week_start,
            category,
            total_hours,
        })
        .collect()
}

/// Dense week × category table of summed hours
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PivotTable {
    weeks: Vec<NaiveDate>,
    categories: Vec<Category>,
    /// Row-major: `values[week][category]`
    values: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Reshape summaries into one row per week (ascending) and one column per
    /// category (sorted). Missing combinations are 0.0.
    pub fn from_summaries(summaries: &[WeeklyCategorySummary]) -> Self {
        let weeks: Vec<NaiveDate> = summaries
            .iter()
            .map(|s| s.week_start)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let categories: Vec<Category> = summaries
            .iter()
            .map(|s| s.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut values = vec![vec![0.0; categories.len()]; weeks.len()];
        for summary in summaries {
            // Both lookups succeed: the axes were built from these summaries
            if let (Ok(row), Ok(col)) = (
                weeks.binary_search(&summary.week_start),
                categories.binary_search(&summary.category),
            ) {
                values[row][col] += summary.total_hours;
            }
        }

        PivotTable {
            weeks,
            categories,
            values,
        }
    }

    pub fn weeks(&self) -> &[NaiveDate] {
        &self.weeks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Hours for a cell, 0.0 for an unknown week or category
    pub fn value(&self, week: NaiveDate, category: &Category) -> f64 {
        match (
            self.weeks.binary_search(&week),
            self.categories.binary_search(category),
        ) {
            (Ok(row), Ok(col)) => self.values[row][col],
            _ => 0.0,
        }
    }

    /// All category values for one week, in column order
    pub fn row(&self, week: NaiveDate) -> Option<&[f64]> {
        let row = self.weeks.binary_search(&week).ok()?;
        Some(&self.values[row])
    }

    /// One category's value for every week, in row order
    pub fn column(&self, category: &Category) -> Option<Vec<f64>> {
        let col = self.categories.binary_search(category).ok()?;
        Some(self.values.iter().map(|row| row[col]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, &[f64])> {
        self.weeks
            .iter()
            .copied()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Sum over every cell
    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }

    /// Cumulative layers for stacking: `stacked()[c][w]` is the sum of
    /// categories `0..=c` in week `w`.
    pub fn stacked(&self) -> Vec<Vec<f64>> {
        let mut layers: Vec<Vec<f64>> = Vec::with_capacity(self.categories.len());
        for col in 0..self.categories.len() {
            let layer: Vec<f64> = self
                .values
                .iter()
                .enumerate()
                .map(|(week, row)| {
                    let below = if col == 0 { 0.0 } else { layers[col - 1][week] };
                    below + row[col]
                })
                .collect();
            layers.push(layer);
        }
        layers
    }
}
