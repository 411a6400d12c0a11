//! Simulation observer trait for progress reporting and data collection.

use chrono::NaiveDateTime;

use crate::{Cycle, Timeline};

/// Callbacks invoked by [`run`][crate::run] at key points of generation.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — boundary printer
///
/// ```rust,ignore
/// struct BoundaryPrinter;
///
/// impl SimObserver for BoundaryPrinter {
///     fn on_cycle(&mut self, index: usize, cycle: &Cycle) {
///         println!("cycle {index}: wake up at {}", cycle.sleep.end);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before any cycle, even when the stop boundary precedes
    /// the first bedtime and nothing is emitted.
    fn on_sim_start(&mut self, _first_sleep_start: NaiveDateTime) {}

    /// Called once per emitted cycle, in order.  `index` starts at 0.
    fn on_cycle(&mut self, _index: usize, _cycle: &Cycle) {}

    /// Called once after the final cycle, with the assembled timeline.
    fn on_sim_end(&mut self, _timeline: &Timeline) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
