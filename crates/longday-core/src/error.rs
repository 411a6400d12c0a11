//! Configuration error type.
//!
//! Sub-crates may define their own error enums (see `longday-output`) and
//! keep them separate; this one covers everything on the way from raw input
//! to a validated `SimConfig`.

use thiserror::Error;

/// Errors raised while parsing or validating a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sleep duration must be positive, got {minutes} min")]
    NonPositiveSleepDuration { minutes: i64 },

    #[error("day length ({day_minutes} min) must exceed sleep duration ({sleep_minutes} min)")]
    DayNotLongerThanSleep { day_minutes: i64, sleep_minutes: i64 },
}

/// Shorthand result type for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
