//! Shift coverage statistics.

use rust_decimal::Decimal;

use crate::models::{ScheduleEntry, Shift, ShiftCoverage, StaffingStatus};

const PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const COVERAGE_DECIMALS: u32 = 1;

/// Computes coverage for one shift template over a set of entries.
///
/// `avg_staff` is the number of matching occurrences per working day in
/// the queried range; `coverage_percentage` relates that average to
/// `max_staff` (zero when `max_staff` is zero). The staffing thresholds
/// are handed in by the caller; classification is the only rule applied
/// here. With no working days in the range both metrics are zero.
pub fn coverage_for_shift(
    shift: &Shift,
    entries: &[ScheduleEntry],
    working_day_count: u32,
    min_staff: u32,
    max_staff: u32,
) -> ShiftCoverage {
    let occurrences = entries.iter().filter(|e| e.shift.name == shift.name).count();

    let avg_staff = if working_day_count == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(occurrences) / Decimal::from(working_day_count)
    };

    let coverage_percentage = if max_staff == 0 {
        Decimal::ZERO
    } else {
        (avg_staff / Decimal::from(max_staff) * PERCENT).round_dp(COVERAGE_DECIMALS)
    };

    ShiftCoverage {
        shift: shift.clone(),
        avg_staff: avg_staff.round_dp(COVERAGE_DECIMALS),
        coverage_percentage,
        status: StaffingStatus::classify(avg_staff, min_staff, max_staff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn shift(name: &str) -> Shift {
        Shift {
            name: name.to_string(),
            start_time: NaiveTime::from_hms_opt(6, 0, 0),
            end_time: NaiveTime::from_hms_opt(14, 0, 0),
        }
    }

    fn entries_for(name: &str, count: usize) -> Vec<ScheduleEntry> {
        (0..count)
            .map(|i| ScheduleEntry {
                date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap() + chrono::TimeDelta::days(i as i64),
                shift: shift(name),
            })
            .collect()
    }

    #[test]
    fn test_full_coverage() {
        let early = shift("EarlyShift");
        let entries = entries_for("EarlyShift", 20);
        let coverage = coverage_for_shift(&early, &entries, 10, 1, 2);
        assert_eq!(coverage.avg_staff, Decimal::from(2));
        assert_eq!(coverage.coverage_percentage, Decimal::from(100));
        assert_eq!(coverage.status, StaffingStatus::Full);
    }

    #[test]
    fn test_understaffed_coverage() {
        let early = shift("EarlyShift");
        let entries = entries_for("EarlyShift", 5);
        let coverage = coverage_for_shift(&early, &entries, 10, 1, 2);
        assert_eq!(coverage.avg_staff, Decimal::new(5, 1)); // 0.5
        assert_eq!(coverage.coverage_percentage, Decimal::from(25));
        assert_eq!(coverage.status, StaffingStatus::Understaffed);
    }

    #[test]
    fn test_other_shifts_do_not_count() {
        let early = shift("EarlyShift");
        let mut entries = entries_for("EarlyShift", 10);
        entries.extend(entries_for("LateShift", 10));
        let coverage = coverage_for_shift(&early, &entries, 10, 1, 2);
        assert_eq!(coverage.avg_staff, Decimal::from(1));
        assert_eq!(coverage.status, StaffingStatus::Ok);
    }

    #[test]
    fn test_zero_max_staff_guard() {
        let early = shift("EarlyShift");
        let entries = entries_for("EarlyShift", 10);
        let coverage = coverage_for_shift(&early, &entries, 10, 0, 0);
        assert_eq!(coverage.coverage_percentage, Decimal::ZERO);
        assert_eq!(coverage.status, StaffingStatus::Overstaffed);
    }

    #[test]
    fn test_zero_working_days_guard() {
        let early = shift("EarlyShift");
        let coverage = coverage_for_shift(&early, &[], 0, 1, 2);
        assert_eq!(coverage.avg_staff, Decimal::ZERO);
        assert_eq!(coverage.coverage_percentage, Decimal::ZERO);
        assert_eq!(coverage.status, StaffingStatus::Understaffed);
    }

    #[test]
    fn test_average_rounded_to_one_decimal() {
        let early = shift("EarlyShift");
        let entries = entries_for("EarlyShift", 4);
        let coverage = coverage_for_shift(&early, &entries, 3, 1, 2);
        assert_eq!(coverage.avg_staff, Decimal::new(13, 1)); // 1.333... -> 1.3
    }
}
