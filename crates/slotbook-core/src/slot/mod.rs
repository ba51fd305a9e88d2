pub mod available;
pub mod booked;
pub mod time_slot;

use chrono::Duration;
use serde::Serialize;

use crate::ids::OwnerId;

pub use available::AvailableTimeSlot;
pub use booked::BookedTimeSlot;
pub use time_slot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Slot {
    Available(AvailableTimeSlot),
    Booked(BookedTimeSlot),
}

impl Slot {
    pub fn time_slot(&self) -> &TimeSlot {
        match self {
            Self::Available(s) => s.slot(),
            Self::Booked(s) => s.slot(),
        }
    }

    pub fn contains(&self, at: Duration) -> bool {
        self.time_slot().contains(at)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn owner(&self) -> Option<&OwnerId> {
        match self {
            Self::Available(_) => None,
            Self::Booked(s) => Some(s.owner()),
        }
    }
}

impl From<AvailableTimeSlot> for Slot {
    fn from(slot: AvailableTimeSlot) -> Self {
        Self::Available(slot)
    }
}

impl From<BookedTimeSlot> for Slot {
    fn from(slot: BookedTimeSlot) -> Self {
        Self::Booked(slot)
    }
}
