//! The `ScheduleWriter` trait implemented by all backend writers.

use longday_core::{Period, PeriodKind};
use longday_sim::Timeline;

use crate::OutputResult;

/// Trait implemented by the ICS and CSV writers.
pub trait ScheduleWriter {
    /// Write all periods of one kind, in chronological order.
    fn write_periods(&mut self, kind: PeriodKind, periods: &[Period]) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write the selected kinds of `timeline` to `writer`, then finish it.
///
/// Kinds are visited in canonical order (sleep before awake) regardless of
/// their order in `kinds`, and duplicates in `kinds` have no effect: the
/// selector is a set.
pub fn write_schedule<W: ScheduleWriter>(
    writer: &mut W,
    timeline: &Timeline,
    kinds: &[PeriodKind],
) -> OutputResult<()> {
    for kind in PeriodKind::ALL {
        if kinds.contains(&kind) {
            writer.write_periods(kind, timeline.periods(kind))?;
        }
    }
    writer.finish()
}
