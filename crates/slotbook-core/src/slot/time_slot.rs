use std::fmt;

use chrono::Duration;
use serde::Serialize;

use crate::error::DomainError;
use crate::time::{day_length, format_offset, hour_of, serialize_offset};

/// Half-open interval `[start, end)` within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeSlot {
    #[serde(serialize_with = "serialize_offset")]
    start: Duration,
    #[serde(serialize_with = "serialize_offset")]
    end: Duration,
}

impl TimeSlot {
    pub fn new(start: Duration, end: Duration) -> Result<Self, DomainError> {
        if start >= end || start < Duration::zero() || end > day_length() {
            return Err(DomainError::InvalidTimeSlot);
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `0 <= start < end <= 24h`.
    pub(crate) fn from_bounds(start: Duration, end: Duration) -> Self {
        debug_assert!(Duration::zero() <= start && start < end && end <= day_length());
        Self { start, end }
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn end(&self) -> Duration {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn hour(&self) -> i64 {
        hour_of(self.start)
    }

    /// Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn contains(&self, at: Duration) -> bool {
        self.start <= at && self.end > at
    }

    /// Intersection with `bounds`, or `None` when the two are disjoint.
    pub fn clip_to(&self, bounds: &TimeSlot) -> Option<TimeSlot> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        TimeSlot::new(start, end).ok()
    }

    pub(crate) fn hull(&self, other: &TimeSlot) -> TimeSlot {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_offset(self.start), format_offset(self.end))
    }
}
