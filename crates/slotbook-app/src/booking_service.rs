use std::sync::{Mutex, MutexGuard};

use chrono::Duration;

use slotbook_core::day_schedule::DaySchedule;
use slotbook_core::ids::{OwnerId, ScheduleId};
use slotbook_core::scheduler::SlotScheduler;
use slotbook_core::slot::{AvailableTimeSlot, BookedTimeSlot, Slot};
use slotbook_core::time::format_offset;

use crate::config::ScheduleConfig;
use crate::error::AppError;

/// Shares one [`DaySchedule`] between callers. Every operation holds the
/// schedule lock for its whole duration.
pub struct BookingService {
    id: ScheduleId,
    schedule: Mutex<DaySchedule>,
}

impl BookingService {
    pub fn new<S>(scheduler: &S) -> Self
    where
        S: SlotScheduler + ?Sized,
    {
        let schedule = DaySchedule::new(scheduler);
        tracing::debug!(
            schedule_id = %schedule.id(),
            interval = %schedule.interval(),
            hours = schedule.hours().count(),
            "day schedule created"
        );
        Self {
            id: schedule.id().clone(),
            schedule: Mutex::new(schedule),
        }
    }

    pub fn from_config(config: &ScheduleConfig) -> Result<Self, AppError> {
        let scheduler = config.build_scheduler()?;
        Ok(Self::new(&scheduler))
    }

    pub fn book(&self, at: Duration, owner: OwnerId) -> Result<BookedTimeSlot, AppError> {
        let mut schedule = self.lock()?;
        match schedule.try_book_slot(at, owner.clone()) {
            Ok(booked) => {
                tracing::info!(
                    schedule_id = %self.id,
                    owner = %owner,
                    slot = %booked.slot(),
                    "slot booked"
                );
                Ok(booked)
            }
            Err(e) => {
                tracing::warn!(
                    schedule_id = %self.id,
                    owner = %owner,
                    at = %format_offset(at),
                    error = %e,
                    "booking rejected"
                );
                Err(e.into())
            }
        }
    }

    pub fn cancel(&self, at: Duration, owner: &OwnerId) -> Result<AvailableTimeSlot, AppError> {
        let mut schedule = self.lock()?;
        match schedule.cancel_booking(at, owner) {
            Ok(released) => {
                tracing::info!(
                    schedule_id = %self.id,
                    owner = %owner,
                    slot = %released.slot(),
                    "booking cancelled"
                );
                Ok(released)
            }
            Err(e) => {
                tracing::warn!(
                    schedule_id = %self.id,
                    owner = %owner,
                    at = %format_offset(at),
                    error = %e,
                    "cancellation rejected"
                );
                Err(e.into())
            }
        }
    }

    pub fn slots_by_hour(&self, hour: i64) -> Result<Vec<Slot>, AppError> {
        let schedule = self.lock()?;
        Ok(schedule.slots_by_hour(hour).into_iter().cloned().collect())
    }

    pub fn available_slots(&self) -> Result<Vec<AvailableTimeSlot>, AppError> {
        Ok(self.lock()?.all_available_slots())
    }

    pub fn bookings_for(&self, owner: &OwnerId) -> Result<Vec<BookedTimeSlot>, AppError> {
        let schedule = self.lock()?;
        Ok(schedule
            .slots_owned_by(owner)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn schedule_id(&self) -> &ScheduleId {
        &self.id
    }

    fn lock(&self) -> Result<MutexGuard<'_, DaySchedule>, AppError> {
        self.schedule.lock().map_err(|_| AppError::Poisoned)
    }
}
