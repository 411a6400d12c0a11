//! ICS calendar backend.
//!
//! One `VEVENT` per period: `SUMMARY` is the kind's label, `DTSTART`/`DTEND`
//! are the period boundaries resolved from local time to UTC, and the `UID`
//! (`{kind}-{index}@longday`) is stable across runs so re-importing an
//! updated file replaces events instead of duplicating them.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{Local, TimeZone};
use icalendar::{Calendar, Component, Event, EventLike};
use longday_core::{Period, PeriodKind};

use crate::OutputResult;
use crate::localtime::to_utc_in;
use crate::writer::ScheduleWriter;

/// Writes the schedule as one iCalendar file.
///
/// Events accumulate in memory and are serialized once, in [`finish`]: an
/// `.ics` file has no row-at-a-time form the way a CSV does.
///
/// [`finish`]: ScheduleWriter::finish
pub struct IcsWriter<Tz: TimeZone = Local> {
    file:     File,
    tz:       Tz,
    calendar: Calendar,
    finished: bool,
}

impl IcsWriter<Local> {
    /// Create `path` and resolve event times through the system local zone.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::with_zone(path, Local)
    }
}

impl<Tz: TimeZone> IcsWriter<Tz> {
    /// Create `path`, resolving event times through an explicit zone.
    ///
    /// The file is opened eagerly so an unwritable target fails here, before
    /// any schedule output is consumed.
    pub fn with_zone(path: &Path, tz: Tz) -> OutputResult<Self> {
        let file = File::create(path)?;
        let mut calendar = Calendar::new();
        calendar.name("longday schedule");
        Ok(Self {
            file,
            tz,
            calendar,
            finished: false,
        })
    }
}

impl<Tz: TimeZone> ScheduleWriter for IcsWriter<Tz> {
    fn write_periods(&mut self, kind: PeriodKind, periods: &[Period]) -> OutputResult<()> {
        for (i, period) in periods.iter().enumerate() {
            let event = Event::new()
                .summary(kind.label())
                .starts(to_utc_in(&self.tz, period.start))
                .ends(to_utc_in(&self.tz, period.end))
                .uid(&format!("{kind}-{i}@longday"))
                .done();
            self.calendar.push(event);
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        write!(self.file, "{}", self.calendar)?;
        self.file.flush()?;
        Ok(())
    }
}
