//! Monday-aligned month grid construction.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CalendarDayCell, CalendarWeek, ScheduleEntry};

use super::dates::{add_days, month_bounds, week_end, week_start};
use super::workday::WorkdayClassifier;

/// Groups schedule entries by their date, preserving entry order within
/// each day.
pub fn schedule_by_date(entries: &[ScheduleEntry]) -> HashMap<NaiveDate, Vec<ScheduleEntry>> {
    let mut by_date: HashMap<NaiveDate, Vec<ScheduleEntry>> = HashMap::new();
    for entry in entries {
        by_date.entry(entry.date).or_default().push(entry.clone());
    }
    by_date
}

/// Builds the Monday-aligned week grid covering one month.
///
/// The grid spans from the Monday of the week containing the 1st to the
/// Sunday of the week containing the last day, so every row has exactly
/// seven cells. Cells outside the target month are `None` to keep the
/// columns aligned; cells inside carry the looked-up schedule payload
/// (or an empty default) and the day flags. `today` is an explicit input
/// rather than sampled internally, which keeps the builder pure and
/// testable.
pub fn build_month_grid(
    year: i32,
    month: u32,
    schedule: &HashMap<NaiveDate, Vec<ScheduleEntry>>,
    today: NaiveDate,
    classifier: &WorkdayClassifier,
    sunday_is_workday: bool,
) -> EngineResult<Vec<CalendarWeek>> {
    let (first, last) = month_bounds(year, month)?;
    let span_end = week_end(last);

    let mut weeks = Vec::new();
    let mut monday = week_start(first);
    while monday <= span_end {
        let days = std::array::from_fn(|offset| {
            let date = add_days(monday, offset as i64);
            if date < first || date > last {
                return None;
            }
            Some(CalendarDayCell {
                day: date.day(),
                date,
                schedule: schedule.get(&date).cloned().unwrap_or_default(),
                is_today: date == today,
                is_holiday: classifier.is_holiday(date),
                is_sunday: date.weekday() == Weekday::Sun,
                is_non_working: !classifier.is_working_day(date, sunday_is_workday),
            })
        });
        weeks.push(CalendarWeek { days });
        monday = add_days(monday, 7);
    }

    debug!(year, month, weeks = weeks.len(), "built month grid");
    Ok(weeks)
}
