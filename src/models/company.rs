//! Company policy model.

use serde::{Deserialize, Serialize};

/// Company-level scheduling policy.
///
/// The only policy this engine consumes is whether Sundays count as
/// working days; Saturdays never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Display name of the company.
    pub name: String,
    /// Whether Sundays count as working days.
    pub sunday_is_workday: bool,
}
