//! User settings for spendr
//!
//! Manages user preferences such as the currency symbol, how categories are
//! compared when filtering, and the default export file name.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::SpendrPaths;
use crate::error::SpendrError;
use crate::storage::file_io::write_json_atomic;

/// How category names are compared when filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatch {
    /// Byte-for-byte equality (default)
    #[default]
    Exact,
    /// Unicode case-insensitive equality
    IgnoreCase,
}

impl CategoryMatch {
    /// Check whether a stored category matches the query under this mode
    pub fn matches(&self, category: &str, query: &str) -> bool {
        match self {
            Self::Exact => category == query,
            Self::IgnoreCase => category.to_lowercase() == query.to_lowercase(),
        }
    }
}

/// User settings for spendr
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category comparison used by `filter`
    #[serde(default)]
    pub category_match: CategoryMatch,

    /// Export file name, relative to the data directory
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Date format used when displaying expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_export_file() -> String {
    "expenses.csv".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            category_match: CategoryMatch::default(),
            export_file: default_export_file(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendrPaths) -> Result<Self, SpendrError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendrError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendrError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            check_date_format(&settings.date_format)?;

            Ok(settings)
        } else {
            // Don't save yet - `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendrPaths) -> Result<(), SpendrError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

/// Reject strftime patterns that cannot render a plain calendar date
///
/// Unknown specifiers (`%Q`) and time or offset fields (`%H`, `%z`) make
/// chrono's formatter fail at display time.
pub fn check_date_format(format: &str) -> Result<(), SpendrError> {
    let sample = NaiveDate::from_ymd_opt(2024, 1, 31)
        .ok_or_else(|| SpendrError::Config("Invalid sample date".to_string()))?;

    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).map_err(|_| {
        SpendrError::Config(format!(
            "Invalid date_format '{}': use date fields such as %Y, %m, %d",
            format
        ))
    })
}
