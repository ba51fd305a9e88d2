use serde::{Deserialize, Serialize};

use slotbook_core::error::DomainError;
use slotbook_core::scheduler::{SchedulerKind, SchedulerPolicy};
use slotbook_core::slot::TimeSlot;
use slotbook_core::time::parse_time_of_day;
use slotbook_core::working_day::WorkingDay;

use crate::error::ConfigError;

/// Schedule settings as read from JSON. Times are `HH:MM`, `24:00` meaning midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub interval_minutes: i64,
    pub policy: SchedulerKind,
    pub working_day: Option<WorkingDayConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayConfig {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub pauses: Vec<PauseConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseConfig {
    pub start: String,
    pub end: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 60,
            policy: SchedulerKind::FullDay,
            working_day: None,
        }
    }
}

impl ScheduleConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    pub fn build_scheduler(&self) -> Result<SchedulerPolicy, DomainError> {
        let working_day = self
            .working_day
            .as_ref()
            .map(WorkingDayConfig::to_working_day)
            .transpose()?;
        SchedulerPolicy::build(self.policy, self.interval_minutes, working_day)
    }
}

impl WorkingDayConfig {
    pub fn to_working_day(&self) -> Result<WorkingDay, DomainError> {
        let pauses = self
            .pauses
            .iter()
            .map(PauseConfig::to_time_slot)
            .collect::<Result<Vec<_>, _>>()?;
        WorkingDay::new(
            parse_time_of_day(&self.start)?,
            parse_time_of_day(&self.end)?,
            pauses,
        )
    }
}

impl PauseConfig {
    pub fn to_time_slot(&self) -> Result<TimeSlot, DomainError> {
        TimeSlot::new(parse_time_of_day(&self.start)?, parse_time_of_day(&self.end)?)
    }
}
