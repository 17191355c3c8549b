//! Holiday table loading and lookup.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{Holiday, HolidayConfig};

// Leap reference year, so a 29 February entry validates.
const REFERENCE_YEAR: i32 = 2000;

/// A validated table of fixed-date holidays.
///
/// The table is injectable configuration rather than a module-level
/// constant, so locale- or year-specific sets can replace the default.
/// The default table holds the five national holidays of the original
/// deployment: New Year's Day, Labour Day, German Unity Day and the two
/// Christmas days.
///
/// # Example
///
/// ```
/// use roster_engine::config::HolidayTable;
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::default();
/// assert!(table.contains(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
/// assert!(!table.contains(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayTable {
    holidays: Vec<Holiday>,
}

impl HolidayTable {
    /// Builds a table from explicit holiday entries, validating each
    /// month/day pair.
    pub fn new(holidays: Vec<Holiday>) -> EngineResult<Self> {
        for holiday in &holidays {
            if NaiveDate::from_ymd_opt(REFERENCE_YEAR, holiday.month, holiday.day).is_none() {
                return Err(EngineError::InvalidInput {
                    field: "holidays".to_string(),
                    message: format!(
                        "'{}' has no valid calendar date {:02}-{:02}",
                        holiday.name, holiday.month, holiday.day
                    ),
                });
            }
        }
        Ok(Self { holidays })
    }

    /// Loads a holiday table from a YAML file.
    ///
    /// The file carries a `holidays` list of `{ month, day, name }`
    /// entries:
    ///
    /// ```text
    /// holidays:
    ///   - month: 1
    ///     day: 1
    ///     name: "New Year's Day"
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: HolidayConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let table = Self::new(config.holidays).map_err(|e| EngineError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        info!(path = %path_str, holidays = table.holidays.len(), "loaded holiday table");
        Ok(table)
    }

    /// Returns true if the date matches a configured holiday.
    /// Only month and day are compared; the table has no year dependency.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays
            .iter()
            .any(|h| h.month == date.month() && h.day == date.day())
    }

    /// Returns the configured holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        let holidays = vec![
            Holiday {
                month: 1,
                day: 1,
                name: "New Year's Day".to_string(),
            },
            Holiday {
                month: 5,
                day: 1,
                name: "Labour Day".to_string(),
            },
            Holiday {
                month: 10,
                day: 3,
                name: "German Unity Day".to_string(),
            },
            Holiday {
                month: 12,
                day: 25,
                name: "Christmas Day".to_string(),
            },
            Holiday {
                month: 12,
                day: 26,
                name: "Second Christmas Day".to_string(),
            },
        ];
        // Static entries are known-valid month/day pairs.
        Self { holidays }
    }
}
