//! The cycle generator.
//!
//! # Design
//!
//! One simulated day is a [`Cycle`]: a sleep period followed by the awake
//! period that fills the rest of the day.  [`Cycles`] yields them lazily;
//! each `next()` call does two datetime additions and one comparison, so a
//! multi-year horizon costs nothing until it is actually walked.
//!
//! The iterator owns four scalar fields copied out of `SimConfig` at
//! construction; only the bedtime cursor mutates during iteration.
//! Constructing a fresh `Cycles` from the same config restarts the sequence
//! from the first bedtime.

use std::iter::FusedIterator;

use chrono::{NaiveDateTime, TimeDelta};
use longday_core::{Period, SimConfig};

// ── Cycle ────────────────────────────────────────────────────────────────────

/// One simulated day: a sleep period and the awake period that follows it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cycle {
    /// Bedtime to wake-up.
    pub sleep: Period,
    /// Wake-up to the next bedtime.
    pub awake: Period,
}

impl Cycle {
    /// The instant the next cycle's sleep period starts.
    #[inline]
    pub fn next_sleep_start(&self) -> NaiveDateTime {
        self.awake.end
    }
}

// ── Cycles ───────────────────────────────────────────────────────────────────

/// Lazy iterator over the cycles of a schedule.
///
/// A cycle is emitted whenever its bedtime falls at or before the stop
/// boundary; the check runs before each emission, so the final cycle may
/// extend past the boundary but its bedtime never does.  The sequence is
/// finite iff `day_length` is positive; callers holding untrusted input
/// should gate on [`SimConfig::validate`] first.
#[derive(Clone, Debug)]
pub struct Cycles {
    /// Bedtime of the cycle `next()` will consider emitting.
    sleep_start: NaiveDateTime,
    sleep_duration: TimeDelta,
    awake_duration: TimeDelta,
    stop: NaiveDateTime,
}

impl Cycles {
    /// Start a fresh pass over `config`'s schedule.
    pub fn new(config: &SimConfig) -> Cycles {
        Cycles {
            sleep_start: config.first_sleep_start(),
            sleep_duration: config.sleep_duration,
            awake_duration: config.awake_duration(),
            stop: config.stop_date_time,
        }
    }
}

impl Iterator for Cycles {
    type Item = Cycle;

    fn next(&mut self) -> Option<Cycle> {
        if self.sleep_start > self.stop {
            return None;
        }
        let wake = self.sleep_start + self.sleep_duration;
        let next_sleep = wake + self.awake_duration;
        let cycle = Cycle {
            sleep: Period::new(self.sleep_start, wake),
            awake: Period::new(wake, next_sleep),
        };
        self.sleep_start = next_sleep;
        Some(cycle)
    }
}

// State stops changing once `next()` returns `None`, so `None` is permanent.
impl FusedIterator for Cycles {}
