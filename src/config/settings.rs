//! User settings for the budget tracker
//!
//! Presentation preferences plus the debt rollover policy used by the
//! monthly calculation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::MonthPeriod;
use crate::storage::file_io::{read_text, write_json_atomic};

/// How overspending in past months reduces the current month's allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DebtRollover {
    /// Only the immediately preceding month is considered
    #[default]
    SingleMonth,
    /// Unpaid debt keeps carrying forward through every earlier month
    Cascading,
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Debt rollover policy
    #[serde(default)]
    pub debt_rollover: DebtRollover,

    /// Text appended to formatted amounts
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Earliest month the calendar navigates to ("YYYY-MM")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_floor: Option<String>,

    /// Default tracing filter when `BUDGET_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_suffix() -> String {
    " zł".to_string()
}

fn default_first_day_of_week() -> u8 {
    1 // Monday
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            debt_rollover: DebtRollover::default(),
            currency_suffix: default_currency_suffix(),
            first_day_of_week: default_first_day_of_week(),
            calendar_floor: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        match read_text(paths.settings_file())? {
            Some(contents) => serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            }),
            // Don't save yet - let caller decide when to persist
            None => Ok(Settings::default()),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Week start as a chrono weekday
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week {
            0 => Weekday::Sun,
            _ => Weekday::Mon,
        }
    }

    /// Parsed calendar floor; an unparsable value is treated as no floor
    pub fn calendar_floor_month(&self) -> Option<MonthPeriod> {
        self.calendar_floor
            .as_deref()
            .and_then(|s| MonthPeriod::parse(s).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.debt_rollover, DebtRollover::SingleMonth);
        assert_eq!(settings.currency_suffix, " zł");
        assert_eq!(settings.week_start(), Weekday::Mon);
        assert_eq!(settings.calendar_floor_month(), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.debt_rollover = DebtRollover::Cascading;
        settings.calendar_floor = Some("2026-02".into());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.debt_rollover, DebtRollover::Cascading);
        assert_eq!(loaded.calendar_floor_month(), MonthPeriod::new(2026, 2));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"debt_rollover": "cascading"}"#).unwrap();
        assert_eq!(settings.debt_rollover, DebtRollover::Cascading);
        assert_eq!(settings.first_day_of_week, 1);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_sunday_week_start() {
        let settings = Settings {
            first_day_of_week: 0,
            ..Settings::default()
        };
        assert_eq!(settings.week_start(), Weekday::Sun);
    }
}
