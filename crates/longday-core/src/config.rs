//! Simulation configuration.
//!
//! # Design
//!
//! `SimConfig` holds the five parameters that fully determine a schedule:
//! the first bedtime (a wall-clock time on a calendar day), the fixed sleep
//! duration, the length of one simulated day, and the stop boundary.  Given
//! the same `SimConfig`, generation is bit-for-bit reproducible: there is
//! no clock read and no randomness anywhere downstream.
//!
//! The ambient clock is an explicit parameter: `default_for(now)` takes the
//! caller's idea of "now" instead of reading it, so library code stays
//! deterministic and only the binary ever touches `Local::now()`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{ConfigError, ConfigResult};

// ── Defaults ─────────────────────────────────────────────────────────────────

/// First bedtime when none is configured: 01:30 local.
const DEFAULT_BEDTIME: NaiveTime = match NaiveTime::from_hms_opt(1, 30, 0) {
    Some(t) => t,
    None => panic!("invalid default bedtime literal"),
};

const DEFAULT_SLEEP: TimeDelta = TimeDelta::hours(8);
const DEFAULT_DAY_LENGTH: TimeDelta = TimeDelta::hours(25);

/// How far past `now` the default configuration simulates.
const DEFAULT_HORIZON: TimeDelta = TimeDelta::days(30);

// ── SimConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from a JSON file merged over [`SimConfig::default_for`]
/// by the application crate and passed to the simulation runner.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SimConfig {
    /// Wall-clock time of the first bedtime on `start_day`.
    pub bedtime_on_start_day: NaiveTime,

    /// Calendar day the first sleep period starts on.
    pub start_day: NaiveDate,

    /// Length of every sleep period.
    pub sleep_duration: TimeDelta,

    /// Length of one simulated day (sleep plus awake).  May differ from
    /// 24 h; that difference is the whole point of the simulation.
    pub day_length: TimeDelta,

    /// Generation stops once the next bedtime falls after this instant.
    /// A bedtime exactly on the boundary still starts one more cycle.
    pub stop_date_time: NaiveDateTime,
}

impl SimConfig {
    /// Length of every awake period: whatever the day leaves after sleep.
    #[inline]
    pub fn awake_duration(&self) -> TimeDelta {
        self.day_length - self.sleep_duration
    }

    /// The instant the first sleep period starts.
    #[inline]
    pub fn first_sleep_start(&self) -> NaiveDateTime {
        self.start_day.and_time(self.bedtime_on_start_day)
    }

    /// The stock configuration: bedtime 01:30 on `now`'s calendar day,
    /// 8 h of sleep in a 25 h day, simulated 30 days past `now`.
    pub fn default_for(now: NaiveDateTime) -> SimConfig {
        SimConfig {
            bedtime_on_start_day: DEFAULT_BEDTIME,
            start_day: now.date(),
            sleep_duration: DEFAULT_SLEEP,
            day_length: DEFAULT_DAY_LENGTH,
            stop_date_time: now + DEFAULT_HORIZON,
        }
    }

    /// Reject configurations the generator would mishandle.
    ///
    /// Generation itself is total and produces a well-defined (possibly
    /// degenerate) sequence for any durations, but a non-positive day
    /// length never terminates and an oversized sleep inverts every awake
    /// period.  Callers that take external input should gate on this.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.sleep_duration <= TimeDelta::zero() {
            return Err(ConfigError::NonPositiveSleepDuration {
                minutes: self.sleep_duration.num_minutes(),
            });
        }
        if self.day_length <= self.sleep_duration {
            return Err(ConfigError::DayNotLongerThanSleep {
                day_minutes: self.day_length.num_minutes(),
                sleep_minutes: self.sleep_duration.num_minutes(),
            });
        }
        Ok(())
    }
}
