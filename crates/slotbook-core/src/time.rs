//! Time-of-day offsets.
//!
//! Every instant inside the engine is a [`Duration`] measured from midnight.
//! `24:00` is a valid upper bound and stands for midnight of the next day.

use chrono::{Duration, NaiveTime, Timelike};
use serde::Serializer;

use crate::error::DomainError;

const SECONDS_PER_HOUR: i64 = 3600;

pub fn day_length() -> Duration {
    Duration::hours(24)
}

/// Hour component of an offset, flooring negative offsets below zero.
pub fn hour_of(offset: Duration) -> i64 {
    offset.num_seconds().div_euclid(SECONDS_PER_HOUR)
}

/// Parses `HH:MM` into an offset from midnight. `24:00` is accepted as the end of the day.
pub fn parse_time_of_day(s: &str) -> Result<Duration, DomainError> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(day_length());
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(|t| Duration::seconds(i64::from(t.num_seconds_from_midnight())))
        .map_err(|_| DomainError::InvalidTimeOfDay(s.to_string()))
}

pub fn format_offset(offset: Duration) -> String {
    let total = offset.num_seconds();
    let (hours, rem) = (total.div_euclid(SECONDS_PER_HOUR), total.rem_euclid(SECONDS_PER_HOUR));
    let (minutes, seconds) = (rem / 60, rem % 60);
    if seconds == 0 {
        format!("{hours:02}:{minutes:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

pub(crate) fn serialize_offset<S>(offset: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(offset.num_seconds())
}
