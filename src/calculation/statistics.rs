//! Statistics orchestration.
//!
//! [`StatisticsEngine`] wires the leaf calculations together into the
//! monthly/yearly statistics records and the calendar grid. It holds the
//! company policy and the workday classifier, nothing else; every call
//! recomputes from its arguments and allocates a fresh result.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::HolidayTable;
use crate::error::EngineResult;
use crate::models::{
    CalendarWeek, Company, Employee, MonthlyStatistics, ScheduleEntry, Shift, ShiftCoverage,
    YearlyStatistics,
};

use super::aggregation::{aggregate_month, aggregate_year};
use super::calendar_grid::build_month_grid;
use super::coverage::coverage_for_shift;
use super::expected_hours::{expected_monthly_hours, expected_yearly_hours};
use super::utilization::{overtime_undertime, utilization_percentage};
use super::workday::WorkdayClassifier;

/// Computes scheduling KPIs for one company.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::StatisticsEngine;
/// use roster_engine::config::HolidayTable;
/// use roster_engine::models::{Company, Employee};
/// use rust_decimal::Decimal;
///
/// let company = Company {
///     name: "Acme Logistics".to_string(),
///     sunday_is_workday: false,
/// };
/// let employee = Employee {
///     name: "Alex".to_string(),
///     max_hours_per_week: Decimal::from(40),
///     absences: vec![],
/// };
///
/// let engine = StatisticsEngine::new(company, HolidayTable::default());
/// let stats = engine.monthly_statistics(&employee, &[], 2025, 2).unwrap();
/// assert_eq!(stats.total_shifts, 0);
/// assert_eq!(stats.utilization_percentage, Decimal::ZERO);
/// assert!(stats.weekly_workload.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    company: Company,
    classifier: WorkdayClassifier,
}

impl StatisticsEngine {
    /// Creates an engine for a company with the given holiday table.
    pub fn new(company: Company, holidays: HolidayTable) -> Self {
        Self {
            company,
            classifier: WorkdayClassifier::new(holidays),
        }
    }

    /// The company this engine computes statistics for.
    pub fn company(&self) -> &Company {
        &self.company
    }

    /// The workday classifier backing all date classification.
    pub fn classifier(&self) -> &WorkdayClassifier {
        &self.classifier
    }

    /// Computes monthly statistics for one employee.
    ///
    /// Entries dated outside the month only influence the weekly buckets
    /// they spill into; the totals ignore them. Empty input yields the
    /// documented all-zero record.
    pub fn monthly_statistics(
        &self,
        employee: &Employee,
        entries: &[ScheduleEntry],
        year: i32,
        month: u32,
    ) -> EngineResult<MonthlyStatistics> {
        let aggregate = aggregate_month(entries, year, month)?;
        let expected =
            expected_monthly_hours(&self.classifier, employee, &self.company, year, month)?;

        if entries.is_empty() {
            return Ok(MonthlyStatistics::empty());
        }

        let utilization = utilization_percentage(aggregate.total_hours, expected);
        let (overtime, undertime) = overtime_undertime(aggregate.total_hours, expected);

        debug!(
            employee = %employee.name,
            year,
            month,
            shifts = aggregate.total_shifts,
            "computed monthly statistics"
        );

        Ok(MonthlyStatistics {
            total_hours: aggregate.total_hours,
            total_shifts: aggregate.total_shifts,
            average_hours_per_shift: aggregate.average_hours_per_shift,
            expected_monthly_hours: expected,
            utilization_percentage: utilization,
            overtime_hours: overtime,
            undertime_hours: undertime,
            weekly_workload: aggregate.weekly_workload,
        })
    }

    /// Computes yearly statistics for one employee.
    pub fn yearly_statistics(
        &self,
        employee: &Employee,
        entries: &[ScheduleEntry],
        year: i32,
    ) -> EngineResult<YearlyStatistics> {
        let aggregate = aggregate_year(entries, year);
        let max_yearly_hours =
            expected_yearly_hours(&self.classifier, employee, &self.company, year)?;
        let utilization = utilization_percentage(aggregate.total_hours, max_yearly_hours);

        debug!(
            employee = %employee.name,
            year,
            shifts = aggregate.total_shifts,
            "computed yearly statistics"
        );

        Ok(YearlyStatistics {
            total_hours: aggregate.total_hours,
            total_shifts: aggregate.total_shifts,
            average_hours_per_shift: aggregate.average_hours_per_shift,
            max_yearly_hours,
            yearly_utilization_percentage: utilization,
            monthly_breakdown: aggregate.monthly_breakdown,
        })
    }

    /// Builds the month grid under this engine's company policy.
    ///
    /// `today` is the caller's notion of "now"; it is compared, never
    /// sampled.
    pub fn month_grid(
        &self,
        year: i32,
        month: u32,
        schedule: &HashMap<NaiveDate, Vec<ScheduleEntry>>,
        today: NaiveDate,
    ) -> EngineResult<Vec<CalendarWeek>> {
        build_month_grid(
            year,
            month,
            schedule,
            today,
            &self.classifier,
            self.company.sunday_is_workday,
        )
    }

    /// Computes coverage for one shift template over an inclusive range.
    pub fn coverage(
        &self,
        shift: &Shift,
        entries: &[ScheduleEntry],
        start: NaiveDate,
        end: NaiveDate,
        min_staff: u32,
        max_staff: u32,
    ) -> ShiftCoverage {
        let working_days = self
            .classifier
            .working_days_in_range(start, end, self.company.sunday_is_workday)
            .len() as u32;
        coverage_for_shift(shift, entries, working_days, min_staff, max_staff)
    }
}
