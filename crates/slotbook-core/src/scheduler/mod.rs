pub mod full_day;
pub mod working_day;

use std::collections::BTreeMap;
use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::slot::{AvailableTimeSlot, TimeSlot};
use crate::time::day_length;
use crate::working_day::WorkingDay;

pub use full_day::FullDayScheduler;
pub use working_day::WorkingDayScheduler;

pub type HourlySlots = BTreeMap<u32, Vec<AvailableTimeSlot>>;

/// Slot length in minutes. Always a positive divisor of 60, so no slot spans
/// an hour boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotInterval(i64);

impl SlotInterval {
    pub fn new(minutes: i64) -> Result<Self, DomainError> {
        if minutes <= 0 || 60 % minutes != 0 {
            return Err(DomainError::InvalidInterval(minutes));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> i64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::minutes(self.0)
    }
}

impl fmt::Display for SlotInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

pub trait SlotScheduler {
    fn interval(&self) -> SlotInterval;

    fn generate_daily_slots(&self) -> HourlySlots;
}

/// Tiles `[00:00, 24:00)` into consecutive slots of `interval`, clipping the
/// last one at midnight.
pub fn tile_day(interval: SlotInterval) -> Vec<AvailableTimeSlot> {
    let step = interval.as_duration();
    let mut slots = Vec::new();
    let mut start = Duration::zero();
    while start < day_length() {
        let end = (start + step).min(day_length());
        slots.push(AvailableTimeSlot::from(TimeSlot::from_bounds(start, end)));
        start = end;
    }
    slots
}

pub fn group_by_hour(slots: impl IntoIterator<Item = AvailableTimeSlot>) -> HourlySlots {
    let mut hourly = HourlySlots::new();
    for slot in slots {
        let Ok(hour) = u32::try_from(slot.slot().hour()) else {
            continue;
        };
        hourly.entry(hour).or_default().push(slot);
    }
    hourly
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerKind {
    #[default]
    FullDay,
    WorkingDay,
}

#[derive(Debug, Clone)]
pub enum SchedulerPolicy {
    FullDay(FullDayScheduler),
    WorkingDay(WorkingDayScheduler),
}

impl SchedulerPolicy {
    pub fn build(
        kind: SchedulerKind,
        interval_minutes: i64,
        working_day: Option<WorkingDay>,
    ) -> Result<Self, DomainError> {
        match kind {
            SchedulerKind::FullDay => Ok(Self::FullDay(FullDayScheduler::new(interval_minutes)?)),
            SchedulerKind::WorkingDay => {
                let day = working_day.ok_or(DomainError::MissingWorkingDay)?;
                Ok(Self::WorkingDay(WorkingDayScheduler::new(
                    day,
                    interval_minutes,
                )?))
            }
        }
    }

    pub fn kind(&self) -> SchedulerKind {
        match self {
            Self::FullDay(_) => SchedulerKind::FullDay,
            Self::WorkingDay(_) => SchedulerKind::WorkingDay,
        }
    }
}

impl SlotScheduler for SchedulerPolicy {
    fn interval(&self) -> SlotInterval {
        match self {
            Self::FullDay(s) => s.interval(),
            Self::WorkingDay(s) => s.interval(),
        }
    }

    fn generate_daily_slots(&self) -> HourlySlots {
        match self {
            Self::FullDay(s) => s.generate_daily_slots(),
            Self::WorkingDay(s) => s.generate_daily_slots(),
        }
    }
}
