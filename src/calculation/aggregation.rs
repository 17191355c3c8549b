//! Multi-granularity aggregation of schedule entries.
//!
//! Folds a list of entries into totals, per-shift averages, and
//! time-bucketed breakdowns: Monday-aligned weekly buckets for a month,
//! fixed 12-slot monthly buckets for a year.

use chrono::Datelike;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{MonthlyBreakdown, ScheduleEntry};

use super::dates::{add_days, month_bounds, week_start};

const WORKLOAD_DECIMALS: u32 = 3;

/// Totals and weekly buckets for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyAggregate {
    /// Sum of shift durations for entries dated inside the month.
    pub total_hours: Decimal,
    /// Number of entries dated inside the month.
    pub total_shifts: u32,
    /// `total_hours / total_shifts`, zero when there are no entries.
    pub average_hours_per_shift: Decimal,
    /// One 3-decimal hour total per Monday-aligned week overlapping the
    /// month, oldest first. Empty when the input itself was empty.
    pub weekly_workload: Vec<Decimal>,
}

impl MonthlyAggregate {
    fn empty() -> Self {
        MonthlyAggregate {
            total_hours: Decimal::ZERO,
            total_shifts: 0,
            average_hours_per_shift: Decimal::ZERO,
            weekly_workload: Vec::new(),
        }
    }
}

/// Totals and per-month buckets for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyAggregate {
    /// Sum of shift durations for entries dated inside the year.
    pub total_hours: Decimal,
    /// Number of entries dated inside the year.
    pub total_shifts: u32,
    /// `total_hours / total_shifts`, zero when there are no entries.
    pub average_hours_per_shift: Decimal,
    /// Hours and shift counts bucketed by calendar month.
    pub monthly_breakdown: MonthlyBreakdown,
}

fn average(total_hours: Decimal, total_shifts: u32) -> Decimal {
    if total_shifts == 0 {
        Decimal::ZERO
    } else {
        total_hours / Decimal::from(total_shifts)
    }
}

/// Aggregates entries for one month.
///
/// Totals cover entries dated inside the month. The weekly buckets run
/// from the Monday-aligned week containing the 1st through the week
/// containing the last day; each bucket sums the hours of **all**
/// supplied entries falling inside `[week_start, week_end]`, so hours
/// spilling into adjacent months still land in their bucket. Empty input
/// yields the documented all-zero aggregate with an empty bucket list.
pub fn aggregate_month(
    entries: &[ScheduleEntry],
    year: i32,
    month: u32,
) -> EngineResult<MonthlyAggregate> {
    let (first, last) = month_bounds(year, month)?;

    if entries.is_empty() {
        return Ok(MonthlyAggregate::empty());
    }

    let mut total_hours = Decimal::ZERO;
    let mut total_shifts = 0u32;
    for entry in entries {
        if entry.date >= first && entry.date <= last {
            total_hours += entry.shift.duration_hours();
            total_shifts += 1;
        }
    }

    let mut weekly_workload = Vec::new();
    let last_week = week_start(last);
    let mut week = week_start(first);
    while week <= last_week {
        let week_close = add_days(week, 6);
        let hours: Decimal = entries
            .iter()
            .filter(|e| e.date >= week && e.date <= week_close)
            .map(|e| e.shift.duration_hours())
            .sum();
        weekly_workload.push(hours.round_dp(WORKLOAD_DECIMALS));
        week = add_days(week, 7);
    }

    debug!(
        year,
        month,
        total_shifts,
        weeks = weekly_workload.len(),
        "aggregated monthly entries"
    );

    Ok(MonthlyAggregate {
        total_hours,
        total_shifts,
        average_hours_per_shift: average(total_hours, total_shifts),
        weekly_workload,
    })
}

/// Aggregates entries for one year.
///
/// Entries dated outside the year are silently excluded; cross-period
/// data is expected, not an error. The breakdown always has twelve
/// slots, and its hour slots sum to `total_hours`.
pub fn aggregate_year(entries: &[ScheduleEntry], year: i32) -> YearlyAggregate {
    let mut breakdown = MonthlyBreakdown::default();
    let mut total_hours = Decimal::ZERO;
    let mut total_shifts = 0u32;

    for entry in entries {
        if entry.date.year() != year {
            continue;
        }
        let slot = entry.date.month0() as usize;
        let hours = entry.shift.duration_hours();
        breakdown.hours[slot] += hours;
        breakdown.shifts[slot] += 1;
        total_hours += hours;
        total_shifts += 1;
    }

    debug!(year, total_shifts, "aggregated yearly entries");

    YearlyAggregate {
        total_hours,
        total_shifts,
        average_hours_per_shift: average(total_hours, total_shifts),
        monthly_breakdown: breakdown,
    }
}

/// Sums the hours of all entries clamped to an inclusive date range.
///
/// Uses [`crate::models::Shift::duration_within`], so overnight
/// occurrences at the range boundary only contribute their in-range
/// portion. This is the month-boundary-correct variant of the plain
/// totals above.
pub fn hours_in_range(entries: &[ScheduleEntry], start: NaiveDate, end: NaiveDate) -> Decimal {
    entries
        .iter()
        .map(|e| e.shift.duration_within(e.date, start, end))
        .sum()
}
