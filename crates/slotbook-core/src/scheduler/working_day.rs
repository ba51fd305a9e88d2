use crate::error::DomainError;
use crate::time::{day_length, hour_of};
use crate::working_day::WorkingDay;

use super::{tile_day, HourlySlots, SlotInterval, SlotScheduler};

/// Restricts the full-day tiling to a [`WorkingDay`].
///
/// Slots are clipped to the working window. A clipped slot touching any pause
/// is dropped whole, even when only part of it is paused. Hours left without
/// slots are omitted from the result.
#[derive(Debug, Clone)]
pub struct WorkingDayScheduler {
    working_day: WorkingDay,
    interval: SlotInterval,
}

impl WorkingDayScheduler {
    pub fn new(working_day: WorkingDay, interval_minutes: i64) -> Result<Self, DomainError> {
        Ok(Self {
            working_day,
            interval: SlotInterval::new(interval_minutes)?,
        })
    }

    pub fn working_day(&self) -> &WorkingDay {
        &self.working_day
    }

    fn last_hour(&self) -> i64 {
        if self.working_day.end() == day_length() {
            23
        } else {
            hour_of(self.working_day.end())
        }
    }
}

impl SlotScheduler for WorkingDayScheduler {
    fn interval(&self) -> SlotInterval {
        self.interval
    }

    fn generate_daily_slots(&self) -> HourlySlots {
        let window = self.working_day.window();
        let pauses = self.working_day.merged_pauses();
        let first_hour = hour_of(self.working_day.start());
        let last_hour = self.last_hour();

        let mut hourly = HourlySlots::new();
        for slot in tile_day(self.interval) {
            let hour = slot.slot().hour();
            if hour < first_hour || hour > last_hour {
                continue;
            }
            let Some(clipped) = slot.slot().clip_to(window) else {
                continue;
            };
            if pauses.iter().any(|p| p.overlaps(&clipped)) {
                continue;
            }
            let Ok(hour) = u32::try_from(hour) else {
                continue;
            };
            hourly.entry(hour).or_default().push(clipped.into());
        }
        hourly
    }
}
