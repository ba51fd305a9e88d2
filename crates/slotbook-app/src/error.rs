use slotbook_core::error::DomainError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("schedule lock poisoned")]
    Poisoned,
}
