//! Shift template and schedule entry models.
//!
//! A [`Shift`] is a template (name plus start/end time of day, no date);
//! a [`ScheduleEntry`] binds a template to a concrete calendar date. A
//! sequence of entries for one employee or one company is the sole input
//! to aggregation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);
const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Parses a time-of-day string in `HH:MM` or `HH:MM:SS` form.
///
/// # Example
///
/// ```
/// use roster_engine::models::parse_shift_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_shift_time("22:00").unwrap(),
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap()
/// );
/// assert_eq!(
///     parse_shift_time("06:30:15").unwrap(),
///     NaiveTime::from_hms_opt(6, 30, 15).unwrap()
/// );
/// assert!(parse_shift_time("25:00").is_err());
/// ```
pub fn parse_shift_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| EngineError::InvalidInput {
            field: "time".to_string(),
            message: format!("'{value}' is not a valid HH:MM[:SS] time"),
        })
}

/// Serde adapter for optional shift times that accepts both `HH:MM` and
/// `HH:MM:SS` on the wire and always serializes as `HH:MM:SS`.
mod optional_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => super::parse_shift_time(&s)
                .map(Some)
                .map_err(|e| D::Error::custom(e.to_string())),
            None => Ok(None),
        }
    }
}

/// A shift template: a named start/end time of day without a date.
///
/// An `end_time` at or before `start_time` denotes an overnight shift.
/// Missing times are tolerated as a data-quality fallback and contribute
/// zero hours rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The name of the shift (e.g., "NightShift").
    pub name: String,
    /// The start time of day, if recorded.
    #[serde(default, with = "optional_time")]
    pub start_time: Option<NaiveTime>,
    /// The end time of day, if recorded.
    #[serde(default, with = "optional_time")]
    pub end_time: Option<NaiveTime>,
}

impl Shift {
    /// Returns the duration of one occurrence of this shift, in hours.
    ///
    /// Computed as `end - start` on a fixed reference day; a negative
    /// result wraps by 24 hours, so a 22:00–06:00 shift yields 8 hours.
    /// A shift whose start and end coincide yields 0 hours, which makes a
    /// zero-length shift indistinguishable from a full wrap to the same
    /// time. Missing start or end yields 0.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::Shift;
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let night = Shift {
    ///     name: "NightShift".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0),
    /// };
    /// assert_eq!(night.duration_hours(), Decimal::new(80, 1)); // 8.0
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return Decimal::ZERO;
        };

        let mut seconds = (end - start).num_seconds();
        if seconds < 0 {
            seconds += SECONDS_PER_DAY;
        }
        Decimal::from(seconds) / SECONDS_PER_HOUR
    }

    /// Returns the hours of one occurrence on `shift_date` that fall within
    /// the inclusive date range `[range_start, range_end]`.
    ///
    /// An overnight occurrence on the last day of the range is clamped at
    /// the range boundary, so hours spilling past the range are excluded.
    /// The result never goes below zero. Missing start or end yields 0.
    pub fn duration_within(
        &self,
        shift_date: NaiveDate,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Decimal {
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return Decimal::ZERO;
        };

        let occurrence_start = shift_date.and_time(start);
        let mut occurrence_end = shift_date.and_time(end);
        if occurrence_end < occurrence_start {
            occurrence_end += TimeDelta::days(1);
        }

        let clamp_start = range_start.and_time(start);
        let clamp_end = range_end.and_time(end);
        let actual_start = occurrence_start.max(clamp_start);
        let actual_end = occurrence_end.min(clamp_end);

        let seconds = (actual_end - actual_start).num_seconds().max(0);
        Decimal::from(seconds) / SECONDS_PER_HOUR
    }
}

/// One concrete shift occurrence on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The calendar date of the occurrence.
    pub date: NaiveDate,
    /// The shift worked on that date.
    pub shift: Shift,
}

impl ScheduleEntry {
    /// Parses a JSON array of schedule entries.
    ///
    /// Any unparsable date or time rejects the whole batch with
    /// [`EngineError::InvalidInput`]; partial corruption is worse than an
    /// explicit rejection.
    pub fn parse_batch(json: &str) -> EngineResult<Vec<ScheduleEntry>> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidInput {
            field: "entries".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the start of this occurrence as a full timestamp, when the
    /// shift has a recorded start time.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.shift.start_time.map(|t| self.date.and_time(t))
    }
}
