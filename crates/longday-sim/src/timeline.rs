//! The assembled schedule.

use longday_core::{Period, PeriodKind};

use crate::Cycle;

/// Every sleep and awake period of a generated schedule, in order.
///
/// The two sequences are index-aligned: `awake_periods()[i]` is the awake
/// period that follows `sleep_periods()[i]`.  Fields are private so the
/// pairing can only be built through [`FromIterator<Cycle>`], which keeps
/// the lengths equal by construction.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Timeline {
    sleep: Vec<Period>,
    awake: Vec<Period>,
}

impl Timeline {
    /// All sleep periods, in chronological order.
    pub fn sleep_periods(&self) -> &[Period] {
        &self.sleep
    }

    /// All awake periods, in chronological order.
    pub fn awake_periods(&self) -> &[Period] {
        &self.awake
    }

    /// Periods of one kind, in chronological order.
    pub fn periods(&self, kind: PeriodKind) -> &[Period] {
        match kind {
            PeriodKind::Sleep => &self.sleep,
            PeriodKind::Awake => &self.awake,
        }
    }

    /// Number of complete cycles generated.  Both period sequences have
    /// exactly this length.
    #[inline]
    pub fn cycle_count(&self) -> usize {
        self.sleep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sleep.is_empty()
    }
}

impl FromIterator<Cycle> for Timeline {
    fn from_iter<I: IntoIterator<Item = Cycle>>(iter: I) -> Timeline {
        let mut timeline = Timeline::default();
        for cycle in iter {
            timeline.sleep.push(cycle.sleep);
            timeline.awake.push(cycle.awake);
        }
        timeline
    }
}
