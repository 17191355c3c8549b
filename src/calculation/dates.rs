//! Immutable date arithmetic helpers.
//!
//! Every helper returns a new date instead of stepping a shared one, so
//! week and month loops stay free of hidden mutation.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use crate::error::{EngineError, EngineResult};

/// Returns `date` shifted by `days` (negative shifts backwards).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + TimeDelta::days(days)
}

/// Returns the Monday of the week containing `date`.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::week_start;
/// use chrono::NaiveDate;
///
/// // 2025-02-01 is a Saturday; its week starts on Monday 2025-01-27.
/// let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// assert_eq!(week_start(date), NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    add_days(date, -(date.weekday().num_days_from_monday() as i64))
}

/// Returns the Sunday of the week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    add_days(week_start(date), 6)
}

/// Returns the first and last date of the given month.
///
/// An impossible year/month pair is rejected with
/// [`EngineError::InvalidInput`] rather than coerced.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::InvalidInput {
            field: "month".to_string(),
            message: format!("{year}-{month:02} is not a valid calendar month"),
        }
    })?;
    let last = (first + Months::new(1))
        .pred_opt()
        .ok_or_else(|| EngineError::InvalidInput {
            field: "month".to_string(),
            message: format!("{year}-{month:02} has no last day"),
        })?;
    Ok((first, last))
}

/// Iterates every date from `start` through `end`, inclusive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
