//! Business-day classification.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::HolidayTable;
use crate::error::EngineResult;

use super::dates::{days_between, month_bounds};

/// Classifies calendar dates as working or non-working days.
///
/// A date is **not** a working day when it is a Saturday (always), a
/// Sunday while the company does not work Sundays, or a configured
/// holiday. The holiday table is injected so locale-specific sets can
/// replace the default.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::WorkdayClassifier;
/// use roster_engine::config::HolidayTable;
/// use chrono::NaiveDate;
///
/// let classifier = WorkdayClassifier::new(HolidayTable::default());
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// // A holiday stays off even when Sundays are working days.
/// assert!(!classifier.is_working_day(christmas, true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkdayClassifier {
    holidays: HolidayTable,
}

impl WorkdayClassifier {
    /// Creates a classifier over the given holiday table.
    pub fn new(holidays: HolidayTable) -> Self {
        Self { holidays }
    }

    /// Returns true if the date matches a configured holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    /// Returns true if the date counts as a working day.
    pub fn is_working_day(&self, date: NaiveDate, sunday_is_workday: bool) -> bool {
        match date.weekday() {
            Weekday::Sat => false,
            Weekday::Sun if !sunday_is_workday => false,
            _ => !self.is_holiday(date),
        }
    }

    /// Counts the working days in the given month.
    pub fn working_days_in_month(
        &self,
        year: i32,
        month: u32,
        sunday_is_workday: bool,
    ) -> EngineResult<u32> {
        let (first, last) = month_bounds(year, month)?;
        Ok(days_between(first, last)
            .filter(|d| self.is_working_day(*d, sunday_is_workday))
            .count() as u32)
    }

    /// Counts the working days in the given year, summed over its twelve
    /// months.
    pub fn working_days_in_year(&self, year: i32, sunday_is_workday: bool) -> EngineResult<u32> {
        let mut total = 0;
        for month in 1..=12 {
            total += self.working_days_in_month(year, month, sunday_is_workday)?;
        }
        Ok(total)
    }

    /// Collects the working dates of an inclusive range, in order.
    pub fn working_days_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        sunday_is_workday: bool,
    ) -> Vec<NaiveDate> {
        days_between(start, end)
            .filter(|d| self.is_working_day(*d, sunday_is_workday))
            .collect()
    }
}
