//! Configuration management
//!
//! Defaults reproduce the plain `<source> <dest>` behaviour. A TOML file named
//! by `JOURNAL_CHART_CONFIG` may override them, and individual environment
//! variables override the file.

use crate::domain::{OverlapCheck, WeekStart};
use crate::error::{JournalChartError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_PATH_VAR: &str = "JOURNAL_CHART_CONFIG";
pub const WEEK_START_VAR: &str = "JOURNAL_CHART_WEEK_START";
pub const OVERLAP_CHECK_VAR: &str = "JOURNAL_CHART_OVERLAP_CHECK";

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub week_start: WeekStart,
    pub timestamp_format: String,
    pub overlap_check: OverlapCheck,
    pub chart: ChartConfig,
}

/// Output image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            week_start: WeekStart::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            overlap_check: OverlapCheck::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 1200,
            height: 600,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read environment variables
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => Self::load_from_path(Path::new(&path))?,
            _ => Config::default(),
        };
        config.apply_overrides(&lookup)?;
        config.check()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| JournalChartError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_overrides<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(WEEK_START_VAR) {
            self.week_start = WeekStart::from_str(&value).map_err(JournalChartError::Config)?;
        }
        if let Some(value) = lookup(OVERLAP_CHECK_VAR) {
            self.overlap_check =
                OverlapCheck::from_str(&value).map_err(JournalChartError::Config)?;
        }
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.timestamp_format.trim().is_empty() {
            return Err(JournalChartError::Config(
                "timestamp_format must not be empty".to_string(),
            ));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(JournalChartError::Config(format!(
                "chart size must be positive, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        Ok(())
    }
}
