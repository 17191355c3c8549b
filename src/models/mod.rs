//! Data models for the rostering KPI engine.
//!
//! Input models ([`Shift`], [`ScheduleEntry`], [`Employee`], [`Company`])
//! mirror the wire contracts of the external scheduling system; output
//! models are value objects recomputed from input on every invocation.

mod calendar;
mod company;
mod employee;
mod shift;
mod staffing;
mod statistics;

pub use calendar::{CalendarDayCell, CalendarWeek};
pub use company::Company;
pub use employee::Employee;
pub use shift::{ScheduleEntry, Shift, parse_shift_time};
pub use staffing::StaffingStatus;
pub use statistics::{
    MonthlyBreakdown, MonthlyStatistics, ShiftCoverage, YearlyStatistics,
};
