//! Schedule periods.
//!
//! # Design
//!
//! A `Period` is a closed-open interval `[start, end)` of naive local time,
//! the form a schedule is built in before any timezone resolution.  Keeping
//! intervals naive means all schedule arithmetic is plain datetime addition;
//! conversion to UTC happens once, at the output boundary.
//!
//! `end < start` is representable on purpose: degenerate configurations
//! (sleep longer than the day itself) produce inverted awake periods, and
//! generation stays total rather than erroring mid-sequence.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::ConfigError;

// ── Period ───────────────────────────────────────────────────────────────────

/// A single contiguous interval of the simulated schedule, in naive local
/// time.  Closed-open: `start` is inside the period, `end` is not.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Period {
    /// First instant of the period.
    pub start: NaiveDateTime,
    /// First instant after the period.
    pub end: NaiveDateTime,
}

impl Period {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Period {
        Period { start, end }
    }

    /// Signed length of the period.  Negative when `end < start`.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

// ── PeriodKind ───────────────────────────────────────────────────────────────

/// Whether a period is spent asleep or awake.
///
/// This is a closed set: a schedule is a strict alternation of the two, so
/// no further variants can appear.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PeriodKind {
    /// In bed, from bedtime to wake-up.
    Sleep,
    /// Out of bed, from wake-up to the next bedtime.
    Awake,
}

impl PeriodKind {
    /// Both kinds, in canonical emission order (sleep first).
    pub const ALL: [PeriodKind; 2] = [PeriodKind::Sleep, PeriodKind::Awake];

    /// Lowercase name, used for CSV column values and CLI selectors.
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodKind::Sleep => "sleep",
            PeriodKind::Awake => "awake",
        }
    }

    /// Capitalized label, used as the calendar event summary.
    pub fn label(self) -> &'static str {
        match self {
            PeriodKind::Sleep => "Sleep",
            PeriodKind::Awake => "Awake",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sleep" => Ok(PeriodKind::Sleep),
            "awake" => Ok(PeriodKind::Awake),
            other => Err(ConfigError::Parse(format!(
                "unknown period kind '{other}' (expected 'sleep' or 'awake')"
            ))),
        }
    }
}
