//! JSON configuration loader.
//!
//! # JSON format
//!
//! Every field is optional; omitted fields keep the value from
//! [`SimConfig::default_for`].  Unknown fields are rejected so a typo'd
//! field name fails loudly instead of silently keeping the default.
//!
//! ```json
//! {
//!     "bedtime": "01:30",
//!     "start_day": "2024-01-01",
//!     "sleep_minutes": 480,
//!     "day_length_minutes": 1500,
//!     "stop": "2024-01-02 12:00"
//! }
//! ```
//!
//! | Field                | Value                                   |
//! |----------------------|-----------------------------------------|
//! | `bedtime`            | `HH:MM` or `HH:MM:SS` wall-clock time   |
//! | `start_day`          | `YYYY-MM-DD` calendar day               |
//! | `sleep_minutes`      | sleep duration, whole minutes           |
//! | `day_length_minutes` | simulated day length, whole minutes     |
//! | `stop`               | `YYYY-MM-DD HH:MM[:SS]` stop boundary   |
//!
//! All timestamps are naive local time, matching the rest of the pipeline.
//! The loader only parses; range checking is [`SimConfig::validate`]'s job.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Deserialize;

use longday_core::{ConfigError, ConfigResult, SimConfig};

// ── JSON record ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRecord {
    bedtime:            Option<String>,
    start_day:          Option<String>,
    sleep_minutes:      Option<i64>,
    day_length_minutes: Option<i64>,
    stop:               Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `SimConfig` from a JSON file, merged over the defaults for `now`.
pub fn load_config(path: &Path, now: NaiveDateTime) -> ConfigResult<SimConfig> {
    let file = std::fs::File::open(path).map_err(ConfigError::Io)?;
    load_config_reader(file, now)
}

/// Like [`load_config`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_config_reader<R: Read>(reader: R, now: NaiveDateTime) -> ConfigResult<SimConfig> {
    let record: ConfigRecord =
        serde_json::from_reader(reader).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let mut config = SimConfig::default_for(now);
    if let Some(s) = &record.bedtime {
        config.bedtime_on_start_day = parse_time(s)?;
    }
    if let Some(s) = &record.start_day {
        config.start_day = parse_day(s)?;
    }
    if let Some(m) = record.sleep_minutes {
        config.sleep_duration = minutes(m, "sleep_minutes")?;
    }
    if let Some(m) = record.day_length_minutes {
        config.day_length = minutes(m, "day_length_minutes")?;
    }
    if let Some(s) = &record.stop {
        config.stop_date_time = parse_instant(s)?;
    }
    Ok(config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_time(s: &str) -> ConfigResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| {
            ConfigError::Parse(format!("invalid bedtime {s:?}: expected HH:MM or HH:MM:SS"))
        })
}

fn parse_day(s: &str) -> ConfigResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ConfigError::Parse(format!("invalid start_day {s:?}: expected YYYY-MM-DD")))
}

fn parse_instant(s: &str) -> ConfigResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| {
            ConfigError::Parse(format!("invalid stop {s:?}: expected YYYY-MM-DD HH:MM[:SS]"))
        })
}

fn minutes(m: i64, field: &str) -> ConfigResult<TimeDelta> {
    TimeDelta::try_minutes(m)
        .ok_or_else(|| ConfigError::Parse(format!("{field} out of range: {m} min")))
}
