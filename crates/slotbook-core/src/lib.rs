//! Single-day slot generation and booking.
//!
//! A [`scheduler::SlotScheduler`] tiles the day into fixed-length slots, a
//! [`day_schedule::DaySchedule`] takes that tiling once and tracks which slots
//! are claimed and by whom.

pub mod day_schedule;
pub mod error;
pub mod ids;
pub mod scheduler;
pub mod slot;
pub mod time;
pub mod working_day;

pub use day_schedule::DaySchedule;
pub use error::DomainError;
pub use ids::{OwnerId, ScheduleId};
pub use scheduler::{
    FullDayScheduler, HourlySlots, SchedulerKind, SchedulerPolicy, SlotInterval, SlotScheduler,
    WorkingDayScheduler,
};
pub use slot::{AvailableTimeSlot, BookedTimeSlot, Slot, TimeSlot};
pub use working_day::WorkingDay;
