//! journal-chart - Weekly hours per category from a time journal
//!
//! Reads a CSV of timed journal entries, rejects inverted or overlapping
//! intervals, sums hours per calendar week and category, and draws the result
//! as a stacked-area chart.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalChartError;
