//! Utilization scoring.

use rust_decimal::Decimal;

const PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Actual over expected hours, as a percentage.
///
/// Guards the zero- and negative-expected-hours edge case by returning
/// zero instead of letting a division blow up; the same scorer serves
/// monthly and yearly granularity.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::utilization_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     utilization_percentage(Decimal::from(80), Decimal::from(160)),
///     Decimal::from(50)
/// );
/// assert_eq!(
///     utilization_percentage(Decimal::from(100), Decimal::ZERO),
///     Decimal::ZERO
/// );
/// ```
pub fn utilization_percentage(actual_hours: Decimal, expected_hours: Decimal) -> Decimal {
    if expected_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (actual_hours / expected_hours) * PERCENT
}

/// Splits the actual-vs-expected difference into overtime and undertime.
///
/// Exactly one of the two is non-zero unless actual equals expected.
pub fn overtime_undertime(actual_hours: Decimal, expected_hours: Decimal) -> (Decimal, Decimal) {
    let diff = actual_hours - expected_hours;
    (diff.max(Decimal::ZERO), (-diff).max(Decimal::ZERO))
}
