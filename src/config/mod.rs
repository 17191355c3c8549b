//! Holiday table configuration.
//!
//! The engine never hard-codes its holiday calendar: the table is a value
//! handed to [`crate::calculation::WorkdayClassifier`], loaded from YAML
//! or built in code.

mod loader;
mod types;

pub use loader::HolidayTable;
pub use types::{Holiday, HolidayConfig};
