//! Calendar presentation models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ScheduleEntry;

/// One populated day cell in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// The full calendar date of the cell.
    pub date: NaiveDate,
    /// Schedule entries found for this date; empty when none were supplied.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    /// Whether this date equals the caller's reference "today".
    pub is_today: bool,
    /// Whether this date is a configured holiday.
    pub is_holiday: bool,
    /// Whether this date is a Sunday.
    pub is_sunday: bool,
    /// Whether this date is not a working day under the active policy.
    pub is_non_working: bool,
}

/// One Monday-aligned week row of a month grid.
///
/// Always exactly seven cells; days outside the displayed month are
/// `None` so rendering keeps its column alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    /// Monday through Sunday cells.
    pub days: [Option<CalendarDayCell>; 7],
}
