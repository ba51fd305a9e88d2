use std::collections::BTreeMap;

use chrono::Duration;

use crate::error::DomainError;
use crate::ids::{OwnerId, ScheduleId};
use crate::scheduler::{SlotInterval, SlotScheduler};
use crate::slot::{AvailableTimeSlot, BookedTimeSlot, Slot};
use crate::time::hour_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct SlotIndex(usize);

/// Bookable slots of one day.
///
/// The slot map is taken from the scheduler once, at construction. Slots live in
/// an arena; each hour bucket lists arena indices in start order. Booking and
/// cancelling replace an arena entry and never reorder buckets.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    id: ScheduleId,
    interval: SlotInterval,
    slots: Vec<Slot>,
    hours: BTreeMap<u32, Vec<SlotIndex>>,
}

impl DaySchedule {
    pub fn new<S>(scheduler: &S) -> Self
    where
        S: SlotScheduler + ?Sized,
    {
        let mut slots = Vec::new();
        let mut hours = BTreeMap::new();
        for (hour, mut bucket) in scheduler.generate_daily_slots() {
            bucket.sort();
            let indices: Vec<SlotIndex> = bucket
                .into_iter()
                .map(|slot| {
                    slots.push(Slot::Available(slot));
                    SlotIndex(slots.len() - 1)
                })
                .collect();
            hours.insert(hour, indices);
        }
        Self {
            id: ScheduleId::new(),
            interval: scheduler.interval(),
            slots,
            hours,
        }
    }

    pub fn try_book_slot(
        &mut self,
        at: Duration,
        owner: OwnerId,
    ) -> Result<BookedTimeSlot, DomainError> {
        let bucket = self.bucket_for(at)?;
        let (index, free) = bucket
            .iter()
            .find_map(|&index| match self.slot(index) {
                Slot::Available(s) if s.contains(at) => Some((index, *s)),
                _ => None,
            })
            .ok_or(DomainError::SlotUnavailable)?;

        let booked = free.book(owner);
        self.replace(index, Slot::Booked(booked.clone()));
        Ok(booked)
    }

    pub fn cancel_booking(
        &mut self,
        at: Duration,
        owner: &OwnerId,
    ) -> Result<AvailableTimeSlot, DomainError> {
        let bucket = self.bucket_for(at)?;
        let index = bucket
            .iter()
            .copied()
            .find(|&index| self.slot(index).contains(at))
            .ok_or(DomainError::SlotNotBooked)?;

        let released = match self.slot(index) {
            Slot::Available(_) => return Err(DomainError::SlotNotBooked),
            Slot::Booked(b) if b.owner() != owner => return Err(DomainError::NotSlotOwner),
            Slot::Booked(b) => b.clone().release(),
        };
        self.replace(index, Slot::Available(released));
        Ok(released)
    }

    /// Slots starting in `hour`, free and booked, in start order. Empty for
    /// hours without slots, including values outside `0..=23`.
    pub fn slots_by_hour(&self, hour: i64) -> Vec<&Slot> {
        self.bucket(hour)
            .map(|bucket| bucket.iter().map(|&i| self.slot(i)).collect())
            .unwrap_or_default()
    }

    pub fn all_available_slots(&self) -> Vec<AvailableTimeSlot> {
        self.ordered()
            .filter_map(|slot| match slot {
                Slot::Available(s) => Some(*s),
                Slot::Booked(_) => None,
            })
            .collect()
    }

    pub fn booked_slots(&self) -> Vec<&BookedTimeSlot> {
        self.ordered()
            .filter_map(|slot| match slot {
                Slot::Available(_) => None,
                Slot::Booked(b) => Some(b),
            })
            .collect()
    }

    pub fn slots_owned_by(&self, owner: &OwnerId) -> Vec<&BookedTimeSlot> {
        self.booked_slots()
            .into_iter()
            .filter(|b| b.owner() == owner)
            .collect()
    }

    pub fn find_slot(&self, at: Duration) -> Option<&Slot> {
        self.bucket(hour_of(at))?
            .iter()
            .map(|&i| self.slot(i))
            .find(|slot| slot.contains(at))
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> + '_ {
        self.hours.keys().copied()
    }

    pub fn id(&self) -> &ScheduleId {
        &self.id
    }

    pub fn interval(&self) -> SlotInterval {
        self.interval
    }

    fn bucket(&self, hour: i64) -> Option<&[SlotIndex]> {
        let hour = u32::try_from(hour).ok()?;
        self.hours.get(&hour).map(Vec::as_slice)
    }

    fn bucket_for(&self, at: Duration) -> Result<&[SlotIndex], DomainError> {
        let hour = hour_of(at);
        self.bucket(hour).ok_or(DomainError::NoSlotsForHour(hour))
    }

    fn ordered(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.hours.values().flatten().map(|&i| self.slot(i))
    }

    fn slot(&self, index: SlotIndex) -> &Slot {
        &self.slots[index.0]
    }

    fn replace(&mut self, index: SlotIndex, slot: Slot) {
        self.slots[index.0] = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FullDayScheduler, WorkingDayScheduler};
    use crate::slot::TimeSlot;
    use crate::working_day::WorkingDay;

    fn hm(h: i64, m: i64) -> Duration {
        Duration::hours(h) + Duration::minutes(m)
    }

    fn twenty_minute_day() -> DaySchedule {
        DaySchedule::new(&FullDayScheduler::new(20).unwrap())
    }

    fn nine_to_five() -> DaySchedule {
        let lunch = TimeSlot::new(hm(12, 0), hm(13, 0)).unwrap();
        let day = WorkingDay::new(hm(9, 0), hm(17, 0), vec![lunch]).unwrap();
        DaySchedule::new(&WorkingDayScheduler::new(day, 30).unwrap())
    }

    #[test]
    fn booking_valid_times_succeeds() {
        for at in [hm(15, 0), hm(15, 20), hm(15, 40), hm(23, 40), hm(0, 0)] {
            let mut schedule = twenty_minute_day();
            let owner = OwnerId::new();
            let booked = schedule.try_book_slot(at, owner.clone()).unwrap();
            assert!(booked.contains(at));
            assert_eq!(booked.owner(), &owner);
        }
    }

    #[test]
    fn booking_mid_slot_claims_enclosing_slot() {
        let mut schedule = twenty_minute_day();
        let booked = schedule
            .try_book_slot(hm(15, 19) + Duration::seconds(59), OwnerId::new())
            .unwrap();
        assert_eq!(booked.start(), hm(15, 0));
        assert_eq!(booked.end(), hm(15, 20));
    }

    #[test]
    fn booking_nonexistent_hour_fails() {
        let mut schedule = twenty_minute_day();
        let result = schedule.try_book_slot(hm(25, 0), OwnerId::new());
        assert_eq!(result, Err(DomainError::NoSlotsForHour(25)));
    }

    #[test]
    fn booking_negative_instant_fails() {
        let mut schedule = twenty_minute_day();
        let result = schedule.try_book_slot(Duration::minutes(-5), OwnerId::new());
        assert_eq!(result, Err(DomainError::NoSlotsForHour(-1)));
    }

    #[test]
    fn booking_outside_working_hours_fails() {
        let mut schedule = nine_to_five();
        assert_eq!(
            schedule.try_book_slot(hm(8, 0), OwnerId::new()),
            Err(DomainError::NoSlotsForHour(8))
        );
        assert_eq!(
            schedule.try_book_slot(hm(12, 15), OwnerId::new()),
            Err(DomainError::NoSlotsForHour(12))
        );
    }

    #[test]
    fn booking_gap_in_hour_fails_as_unavailable() {
        let mut schedule = DaySchedule::new(&{
            let day = WorkingDay::new(hm(9, 30), hm(17, 0), vec![]).unwrap();
            WorkingDayScheduler::new(day, 60).unwrap()
        });
        // 09:00-09:30 falls outside the window but hour 9 has a bucket
        assert_eq!(
            schedule.try_book_slot(hm(9, 10), OwnerId::new()),
            Err(DomainError::SlotUnavailable)
        );
        assert!(schedule.try_book_slot(hm(9, 45), OwnerId::new()).is_ok());
    }

    #[test]
    fn second_booking_of_same_slot_fails_and_keeps_first_owner() {
        let mut schedule = twenty_minute_day();
        let first = OwnerId::new();
        schedule.try_book_slot(hm(15, 0), first.clone()).unwrap();

        let second = schedule.try_book_slot(hm(15, 5), OwnerId::new());
        assert_eq!(second, Err(DomainError::SlotUnavailable));
        assert_eq!(schedule.find_slot(hm(15, 0)).unwrap().owner(), Some(&first));
    }

    #[test]
    fn failed_booking_leaves_schedule_unchanged() {
        let mut schedule = twenty_minute_day();
        schedule.try_book_slot(hm(15, 0), OwnerId::new()).unwrap();
        let before = schedule.all_available_slots();
        let _ = schedule.try_book_slot(hm(15, 0), OwnerId::new());
        let _ = schedule.try_book_slot(hm(30, 0), OwnerId::new());
        assert_eq!(schedule.all_available_slots(), before);
        assert_eq!(schedule.booked_slots().len(), 1);
    }

    #[test]
    fn slots_by_hour_returns_bucket_in_order() {
        let schedule = twenty_minute_day();
        let slots = schedule.slots_by_hour(15);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.time_slot().hour() == 15));
        assert!(slots
            .windows(2)
            .all(|w| w[0].time_slot() < w[1].time_slot()));
    }

    #[test]
    fn slots_by_invalid_hour_is_empty() {
        let schedule = twenty_minute_day();
        assert!(schedule.slots_by_hour(25).is_empty());
        assert!(schedule.slots_by_hour(-1).is_empty());
        assert!(nine_to_five().slots_by_hour(12).is_empty());
    }

    #[test]
    fn booking_updates_hour_bucket_in_place() {
        let mut schedule = twenty_minute_day();
        let owner = OwnerId::new();
        schedule.try_book_slot(hm(15, 20), owner.clone()).unwrap();

        let slots = schedule.slots_by_hour(15);
        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_available());
        assert_eq!(slots[1].owner(), Some(&owner));
        assert!(slots[2].is_available());
    }

    #[test]
    fn available_slots_exclude_booked() {
        let mut schedule = twenty_minute_day();
        assert_eq!(schedule.all_available_slots().len(), 72);
        assert!(schedule
            .all_available_slots()
            .iter()
            .any(|s| s.contains(hm(15, 0))));

        schedule.try_book_slot(hm(15, 0), OwnerId::new()).unwrap();

        let available = schedule.all_available_slots();
        assert_eq!(available.len(), 71);
        assert!(!available.iter().any(|s| s.contains(hm(15, 0))));
    }

    #[test]
    fn cancel_restores_identical_available_slot() {
        let mut schedule = twenty_minute_day();
        let owner = OwnerId::new();
        let original = *schedule
            .all_available_slots()
            .iter()
            .find(|s| s.contains(hm(10, 0)))
            .unwrap();

        schedule.try_book_slot(hm(10, 0), owner.clone()).unwrap();
        let released = schedule.cancel_booking(hm(10, 10), &owner).unwrap();

        assert_eq!(released, original);
        assert!(schedule.find_slot(hm(10, 0)).unwrap().is_available());
        assert!(schedule.slots_owned_by(&owner).is_empty());
    }

    #[test]
    fn cancel_by_other_owner_fails() {
        let mut schedule = twenty_minute_day();
        let owner = OwnerId::new();
        schedule.try_book_slot(hm(10, 0), owner.clone()).unwrap();

        let result = schedule.cancel_booking(hm(10, 0), &OwnerId::new());
        assert_eq!(result, Err(DomainError::NotSlotOwner));
        assert_eq!(schedule.slots_owned_by(&owner).len(), 1);
    }

    #[test]
    fn cancel_free_slot_fails() {
        let mut schedule = twenty_minute_day();
        assert_eq!(
            schedule.cancel_booking(hm(10, 0), &OwnerId::new()),
            Err(DomainError::SlotNotBooked)
        );
        assert_eq!(
            schedule.cancel_booking(hm(24, 0), &OwnerId::new()),
            Err(DomainError::NoSlotsForHour(24))
        );
    }

    #[test]
    fn cancelled_slot_can_be_booked_again() {
        let mut schedule = twenty_minute_day();
        let first = OwnerId::new();
        let second = OwnerId::new();
        schedule.try_book_slot(hm(8, 0), first.clone()).unwrap();
        schedule.cancel_booking(hm(8, 0), &first).unwrap();

        let booked = schedule.try_book_slot(hm(8, 0), second.clone()).unwrap();
        assert_eq!(booked.owner(), &second);
    }

    #[test]
    fn slots_owned_by_lists_only_that_owner() {
        let mut schedule = twenty_minute_day();
        let alice = OwnerId::new();
        let bob = OwnerId::new();
        schedule.try_book_slot(hm(9, 0), alice.clone()).unwrap();
        schedule.try_book_slot(hm(11, 0), alice.clone()).unwrap();
        schedule.try_book_slot(hm(10, 0), bob.clone()).unwrap();

        let alices = schedule.slots_owned_by(&alice);
        assert_eq!(alices.len(), 2);
        assert_eq!(alices[0].start(), hm(9, 0));
        assert_eq!(alices[1].start(), hm(11, 0));
        assert_eq!(schedule.booked_slots().len(), 3);
    }

    #[test]
    fn hours_and_interval_reflect_scheduler() {
        let schedule = nine_to_five();
        let hours: Vec<u32> = schedule.hours().collect();
        assert_eq!(hours, vec![9, 10, 11, 13, 14, 15, 16]);
        assert_eq!(schedule.interval().minutes(), 30);
    }
}
