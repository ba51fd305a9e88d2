use chrono::Duration;
use serde::Serialize;

use crate::error::DomainError;
use crate::ids::OwnerId;

use super::booked::BookedTimeSlot;
use super::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AvailableTimeSlot(TimeSlot);

impl AvailableTimeSlot {
    pub fn new(start: Duration, end: Duration) -> Result<Self, DomainError> {
        TimeSlot::new(start, end).map(Self)
    }

    pub fn book(self, owner: OwnerId) -> BookedTimeSlot {
        BookedTimeSlot::new(self.0, owner)
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.0
    }

    pub fn start(&self) -> Duration {
        self.0.start()
    }

    pub fn end(&self) -> Duration {
        self.0.end()
    }

    pub fn contains(&self, at: Duration) -> bool {
        self.0.contains(at)
    }
}

impl From<TimeSlot> for AvailableTimeSlot {
    fn from(slot: TimeSlot) -> Self {
        Self(slot)
    }
}
