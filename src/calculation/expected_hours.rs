//! Expected contracted hours for a month or year.
//!
//! Both formulas start from the employee's weekly contracted hours and
//! the count of working days left after absences. The monthly formula
//! routes through an assumed 8-hour shift length while the yearly one
//! does not; the two are kept as distinct code paths on purpose (see
//! DESIGN.md).

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Company, Employee};

use super::workday::WorkdayClassifier;

const ASSUMED_SHIFT_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Expected hours for one employee in one month.
///
/// `available = working days in month − distinct absences in month`,
/// then `available × (shifts_per_week / 7) × 8` with
/// `shifts_per_week = max_hours_per_week / 8`. Absences on non-working
/// days still subtract, so the result can go below zero; the utilization
/// scorer guards that case.
pub fn expected_monthly_hours(
    classifier: &WorkdayClassifier,
    employee: &Employee,
    company: &Company,
    year: i32,
    month: u32,
) -> EngineResult<Decimal> {
    let working_days = classifier.working_days_in_month(year, month, company.sunday_is_workday)?;
    let available =
        Decimal::from(working_days) - Decimal::from(employee.absences_in_month(year, month));
    let shifts_per_week = employee.max_hours_per_week / ASSUMED_SHIFT_HOURS;
    Ok(available * (shifts_per_week / DAYS_PER_WEEK) * ASSUMED_SHIFT_HOURS)
}

/// Expected hours for one employee in one year.
///
/// `available = working days in year − distinct absences in year`, then
/// `available × (max_hours_per_week / 7)`. Unlike the monthly variant
/// this is agnostic of shift length.
pub fn expected_yearly_hours(
    classifier: &WorkdayClassifier,
    employee: &Employee,
    company: &Company,
    year: i32,
) -> EngineResult<Decimal> {
    let working_days = classifier.working_days_in_year(year, company.sunday_is_workday)?;
    let available = Decimal::from(working_days) - Decimal::from(employee.absences_in_year(year));
    Ok(available * (employee.max_hours_per_week / DAYS_PER_WEEK))
}
