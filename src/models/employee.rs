//! Employee model.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee whose contracted hours and absences drive the
/// expected-hours calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name of the employee.
    pub name: String,
    /// Contracted maximum hours per week.
    pub max_hours_per_week: Decimal,
    /// Dates on which the employee is not expected to work. Unordered;
    /// duplicates are tolerated and counted once per period.
    #[serde(default)]
    pub absences: Vec<NaiveDate>,
}

impl Employee {
    /// Counts the distinct absence dates falling in the given month.
    /// Dates outside the month are ignored, never an error.
    pub fn absences_in_month(&self, year: i32, month: u32) -> u32 {
        self.absences
            .iter()
            .filter(|d| d.year() == year && d.month() == month)
            .collect::<BTreeSet<_>>()
            .len() as u32
    }

    /// Counts the distinct absence dates falling in the given year.
    pub fn absences_in_year(&self, year: i32) -> u32 {
        self.absences
            .iter()
            .filter(|d| d.year() == year)
            .collect::<BTreeSet<_>>()
            .len() as u32
    }
}
