use chrono::Duration;
use serde::Serialize;

use crate::error::DomainError;
use crate::slot::TimeSlot;
use crate::time::day_length;

/// Active window of a day with the pauses to carve out of it.
///
/// Pauses may overlap each other and may reach outside the window; only their
/// union inside `[start, end)` affects availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkingDay {
    #[serde(flatten)]
    window: TimeSlot,
    pauses: Vec<TimeSlot>,
}

impl WorkingDay {
    pub fn new(
        start: Duration,
        end: Duration,
        mut pauses: Vec<TimeSlot>,
    ) -> Result<Self, DomainError> {
        if start < Duration::zero() || start >= day_length() || end > day_length() {
            return Err(DomainError::InvalidWorkingDay);
        }
        let window = TimeSlot::new(start, end)?;
        pauses.sort();
        Ok(Self { window, pauses })
    }

    pub fn window(&self) -> &TimeSlot {
        &self.window
    }

    pub fn start(&self) -> Duration {
        self.window.start()
    }

    pub fn end(&self) -> Duration {
        self.window.end()
    }

    pub fn pauses(&self) -> &[TimeSlot] {
        &self.pauses
    }

    /// Union of all pauses as sorted, disjoint intervals. Touching pauses coalesce.
    pub fn merged_pauses(&self) -> Vec<TimeSlot> {
        let mut merged: Vec<TimeSlot> = Vec::with_capacity(self.pauses.len());
        for pause in &self.pauses {
            if let Some(last) = merged.last_mut() {
                if pause.start() <= last.end() {
                    *last = last.hull(pause);
                    continue;
                }
            }
            merged.push(*pause);
        }
        merged
    }
}
