//! Statistics output models.
//!
//! Output records are value objects created fresh on every computation
//! call; they carry no identity beyond the call that produced them and
//! are never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Shift, StaffingStatus};

/// Key performance indicators for one employee over one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    /// Total hours worked across all entries in the month.
    pub total_hours: Decimal,
    /// Number of shift occurrences in the month.
    pub total_shifts: u32,
    /// `total_hours / total_shifts`, zero when there are no shifts.
    pub average_hours_per_shift: Decimal,
    /// Contracted hours expected for the month after absences.
    pub expected_monthly_hours: Decimal,
    /// Actual over expected hours, as a percentage.
    pub utilization_percentage: Decimal,
    /// Hours worked beyond the expected hours.
    pub overtime_hours: Decimal,
    /// Hours short of the expected hours.
    pub undertime_hours: Decimal,
    /// One hour total per Monday-aligned week overlapping the month, in
    /// chronological order. Empty when the input had no entries at all;
    /// otherwise 4, 5, or 6 buckets depending on alignment.
    pub weekly_workload: Vec<Decimal>,
}

impl MonthlyStatistics {
    /// The documented all-zero result for empty input.
    pub fn empty() -> Self {
        MonthlyStatistics {
            total_hours: Decimal::ZERO,
            total_shifts: 0,
            average_hours_per_shift: Decimal::ZERO,
            expected_monthly_hours: Decimal::ZERO,
            utilization_percentage: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            undertime_hours: Decimal::ZERO,
            weekly_workload: Vec::new(),
        }
    }
}

/// Per-calendar-month breakdown of a yearly aggregate.
///
/// Both arrays are fixed 12-length, indexed 0–11 by calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// Hours worked per calendar month.
    pub hours: [Decimal; 12],
    /// Shift occurrences per calendar month.
    pub shifts: [u32; 12],
}

impl Default for MonthlyBreakdown {
    fn default() -> Self {
        MonthlyBreakdown {
            hours: [Decimal::ZERO; 12],
            shifts: [0; 12],
        }
    }
}

/// Key performance indicators for one employee over one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyStatistics {
    /// Total hours worked across all entries in the year.
    pub total_hours: Decimal,
    /// Number of shift occurrences in the year.
    pub total_shifts: u32,
    /// `total_hours / total_shifts`, zero when there are no shifts.
    pub average_hours_per_shift: Decimal,
    /// Contracted hours expected for the year after absences.
    pub max_yearly_hours: Decimal,
    /// Actual over expected hours, as a percentage.
    pub yearly_utilization_percentage: Decimal,
    /// Hours and shift counts bucketed by calendar month.
    pub monthly_breakdown: MonthlyBreakdown,
}

/// Coverage statistics for one shift template over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCoverage {
    /// The shift template the coverage was computed for.
    pub shift: Shift,
    /// Average staff per working day, rounded to one decimal.
    pub avg_staff: Decimal,
    /// `avg_staff / max_staff` as a percentage, rounded to one decimal;
    /// zero when `max_staff` is zero.
    pub coverage_percentage: Decimal,
    /// Classification of the average staffing level.
    pub status: StaffingStatus,
}
