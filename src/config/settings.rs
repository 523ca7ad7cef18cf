//! User settings for foyer
//!
//! A small persisted preferences file: currency label and date format.

use serde::{Deserialize, Serialize};

use super::paths::FoyerPaths;
use crate::error::BudgetError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for foyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label appended to formatted amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "DZD".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if it
    /// does not exist yet
    pub fn load_or_create(paths: &FoyerPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        let path = paths.settings_file();
        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            write_json_atomic(&path, &settings)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FoyerPaths) -> Result<(), BudgetError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
