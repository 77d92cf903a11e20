//! User settings for Payday
//!
//! Display preferences, the near-limit threshold for budgets, and the
//! default log filter. Every field has a default so older or partial
//! config files still load.

use serde::{Deserialize, Serialize};

use super::paths::PaydayPaths;
use crate::error::PaydayError;
use crate::services::ledger::DEFAULT_TRANSACTION_LIMIT;
use crate::services::reconcile::DEFAULT_NEAR_LIMIT_PERCENT;

/// User settings for Payday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Percentage of a budget at which it is flagged as near its limit
    #[serde(default = "default_near_limit_percent")]
    pub near_limit_percent: u8,

    /// Maximum transactions listed by default
    #[serde(default = "default_transaction_limit")]
    pub transaction_limit: usize,

    /// `tracing` filter used when `PAYDAY_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_near_limit_percent() -> u8 {
    DEFAULT_NEAR_LIMIT_PERCENT
}

fn default_transaction_limit() -> usize {
    DEFAULT_TRANSACTION_LIMIT
}

fn default_log_filter() -> String {
    "payday=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            near_limit_percent: default_near_limit_percent(),
            transaction_limit: default_transaction_limit(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PaydayPaths) -> Result<Self, PaydayError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PaydayError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PaydayError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.near_limit_percent > 100 {
                return Err(PaydayError::Config(format!(
                    "near_limit_percent must be at most 100, got {}",
                    settings.near_limit_percent
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaydayPaths) -> Result<(), PaydayError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaydayError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PaydayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
