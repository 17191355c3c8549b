//! Calculation logic for the rostering KPI engine.
//!
//! This module contains the leaf calculations (shift durations live on
//! [`crate::models::Shift`], workday classification, expected hours,
//! aggregation, utilization, coverage, calendar grids) and the
//! [`StatisticsEngine`] orchestrator that combines them.

mod aggregation;
mod calendar_grid;
mod coverage;
mod dates;
mod expected_hours;
mod statistics;
mod utilization;
mod workday;

pub use aggregation::{MonthlyAggregate, YearlyAggregate, aggregate_month, aggregate_year, hours_in_range};
pub use calendar_grid::{build_month_grid, schedule_by_date};
pub use coverage::coverage_for_shift;
pub use dates::{add_days, days_between, month_bounds, week_end, week_start};
pub use expected_hours::{expected_monthly_hours, expected_yearly_hours};
pub use statistics::StatisticsEngine;
pub use utilization::{overtime_undertime, utilization_percentage};
pub use workday::WorkdayClassifier;
