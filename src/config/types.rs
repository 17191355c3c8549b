//! Configuration types for the holiday table.

use serde::Deserialize;

/// A fixed-date holiday, recurring every year on the same month and day.
///
/// Variable-date holidays (the Easter family) are deliberately outside
/// this model; a table for a locale that needs them must enumerate each
/// observed date in its own year-specific table instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Holiday {
    /// Calendar month, 1–12.
    pub month: u32,
    /// Day of month, 1–31 (29 February is accepted).
    pub day: u32,
    /// Display name of the holiday.
    pub name: String,
}

/// Holiday configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// The fixed-date holidays observed by the company.
    pub holidays: Vec<Holiday>,
}
