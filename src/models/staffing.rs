//! Staffing status classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How well a shift is staffed relative to its configured thresholds.
///
/// A closed four-value tag with no transitions; consumers match it
/// exhaustively instead of guessing at unrecognized strings.
///
/// # Example
///
/// ```
/// use roster_engine::models::StaffingStatus;
/// use rust_decimal::Decimal;
///
/// let status = StaffingStatus::classify(Decimal::from(1), 2, 3);
/// assert_eq!(status, StaffingStatus::Understaffed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingStatus {
    /// Staffing is between the minimum and maximum thresholds.
    Ok,
    /// Staffing is below the minimum threshold.
    Understaffed,
    /// Staffing is above the maximum threshold.
    Overstaffed,
    /// Staffing is exactly at the maximum threshold.
    Full,
}

impl StaffingStatus {
    /// Maps a staffing level and its min/max thresholds to a status tag.
    ///
    /// Below minimum is `Understaffed`, above maximum is `Overstaffed`,
    /// exactly at maximum is `Full`, anything else is `Ok`.
    pub fn classify(staff_count: Decimal, min_staff: u32, max_staff: u32) -> Self {
        let min = Decimal::from(min_staff);
        let max = Decimal::from(max_staff);
        if staff_count < min {
            StaffingStatus::Understaffed
        } else if staff_count > max {
            StaffingStatus::Overstaffed
        } else if staff_count == max {
            StaffingStatus::Full
        } else {
            StaffingStatus::Ok
        }
    }
}

impl std::fmt::Display for StaffingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffingStatus::Ok => write!(f, "ok"),
            StaffingStatus::Understaffed => write!(f, "understaffed"),
            StaffingStatus::Overstaffed => write!(f, "overstaffed"),
            StaffingStatus::Full => write!(f, "full"),
        }
    }
}
