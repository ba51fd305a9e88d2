//! Application layer over `slotbook-core`: configuration and a lock-guarded
//! booking service.

pub mod booking_service;
pub mod config;
pub mod error;

pub use booking_service::BookingService;
pub use config::{PauseConfig, ScheduleConfig, WorkingDayConfig};
pub use error::{AppError, ConfigError};
