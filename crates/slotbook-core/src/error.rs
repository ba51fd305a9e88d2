use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("interval of {0} minutes must be positive and divide 60")]
    InvalidInterval(i64),
    #[error("invalid time slot: end must be after start")]
    InvalidTimeSlot,
    #[error("working day must start before 24:00 and end no later than 24:00")]
    InvalidWorkingDay,
    #[error("working day scheduler requires a working day")]
    MissingWorkingDay,
    #[error("no slots for hour {0}")]
    NoSlotsForHour(i64),
    #[error("slot is unavailable")]
    SlotUnavailable,
    #[error("slot is not booked")]
    SlotNotBooked,
    #[error("slot is booked by another owner")]
    NotSlotOwner,
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("invalid time of day: {0}")]
    InvalidTimeOfDay(String),
}
