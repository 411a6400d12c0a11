//! `longday-output` — schedule writers for the longday simulator.
//!
//! Two backends implement [`ScheduleWriter`]:
//!
//! | Backend       | File               | Timestamps                     |
//! |---------------|--------------------|--------------------------------|
//! | [`IcsWriter`] | iCalendar (`.ics`) | UTC, resolved from local time  |
//! | [`CsvWriter`] | CSV                | naive local                    |
//!
//! [`write_schedule`] drives any backend over the selected period kinds of a
//! [`Timeline`][longday_sim::Timeline], sleep before awake, then finishes
//! the writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use longday_core::PeriodKind;
//! use longday_output::{IcsWriter, write_schedule};
//!
//! let mut writer = IcsWriter::new(Path::new("schedule.ics"))?;
//! write_schedule(&mut writer, &timeline, &[PeriodKind::Sleep])?;
//! ```

pub mod csv;
pub mod error;
pub mod ics;
pub mod localtime;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use ics::IcsWriter;
pub use localtime::{local_to_utc, to_utc_in};
pub use writer::{ScheduleWriter, write_schedule};
