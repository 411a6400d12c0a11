//! CSV output backend.
//!
//! One file, one row per period, timestamps in naive local time:
//!
//! ```text
//! kind,start,end,duration_minutes
//! sleep,2024-01-01 01:30:00,2024-01-01 09:30:00,480
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;
use longday_core::{Period, PeriodKind};

use crate::OutputResult;
use crate::writer::ScheduleWriter;

/// Writes the schedule as one CSV file.
pub struct CsvWriter {
    out:      Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut out = Writer::from_path(path)?;
        out.write_record(["kind", "start", "end", "duration_minutes"])?;
        Ok(Self { out, finished: false })
    }
}

impl ScheduleWriter for CsvWriter {
    fn write_periods(&mut self, kind: PeriodKind, periods: &[Period]) -> OutputResult<()> {
        for period in periods {
            self.out.write_record(&[
                kind.to_string(),
                period.start.to_string(),
                period.end.to_string(),
                period.duration().num_minutes().to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
