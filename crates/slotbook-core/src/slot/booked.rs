use chrono::Duration;
use serde::Serialize;

use crate::ids::OwnerId;

use super::available::AvailableTimeSlot;
use super::time_slot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookedTimeSlot {
    #[serde(flatten)]
    slot: TimeSlot,
    owner: OwnerId,
}

impl BookedTimeSlot {
    pub(crate) fn new(slot: TimeSlot, owner: OwnerId) -> Self {
        Self { slot, owner }
    }

    /// Frees the slot, keeping its bounds and discarding the owner.
    pub fn release(self) -> AvailableTimeSlot {
        AvailableTimeSlot::from(self.slot)
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    pub fn start(&self) -> Duration {
        self.slot.start()
    }

    pub fn end(&self) -> Duration {
        self.slot.end()
    }

    pub fn contains(&self, at: Duration) -> bool {
        self.slot.contains(at)
    }
}
