use crate::error::DomainError;

use super::{group_by_hour, tile_day, HourlySlots, SlotInterval, SlotScheduler};

#[derive(Debug, Clone)]
pub struct FullDayScheduler {
    interval: SlotInterval,
}

impl FullDayScheduler {
    pub fn new(interval_minutes: i64) -> Result<Self, DomainError> {
        Ok(Self {
            interval: SlotInterval::new(interval_minutes)?,
        })
    }
}

impl SlotScheduler for FullDayScheduler {
    fn interval(&self) -> SlotInterval {
        self.interval
    }

    fn generate_daily_slots(&self) -> HourlySlots {
        group_by_hour(tile_day(self.interval))
    }
}
