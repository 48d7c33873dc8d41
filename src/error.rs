//! Error types for journal-chart

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journal-chart pipeline
#[derive(Debug, Error)]
pub enum JournalChartError {
    #[error("{0}")]
    Usage(String),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Parse error on line {line}: invalid {field} '{value}': {reason}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Journal contains no entries")]
    EmptyJournal,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl JournalChartError {
    /// Get the exit code for this error.
    ///
    /// Every failure is terminal for a one-shot batch run, so all kinds map to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalChartError::MissingColumn(column) => {
                format!(
                    "Missing column: '{}'\n\n\
                    The journal header must name at least these columns:\n\
                    • start\n\
                    • end\n\
                    • category\n\n\
                    Example:\n\
                    start,end,category\n\
                    01.01.2024 09:00,01.01.2024 10:00,work",
                    column
                )
            }
            JournalChartError::Parse { field, .. } if *field != "category" => {
                format!(
                    "{}\n\n\
                    Expected format: DD.MM.YYYY HH:MM\n\
                    Example: 17.01.2025 09:30",
                    self
                )
            }
            JournalChartError::Render(msg) if msg.contains("extension") => {
                format!(
                    "{}\n\n\
                    Supported output formats: .svg, .png, .bmp, .jpg, .jpeg",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalChartError
pub type Result<T> = std::result::Result<T, JournalChartError>;
