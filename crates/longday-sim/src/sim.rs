//! Generation entry points.

use longday_core::SimConfig;

use crate::{Cycles, NoopObserver, SimObserver, Timeline};

/// Generate the full schedule for `config`, reporting progress to `observer`.
///
/// Drives [`Cycles`] to exhaustion and collects every emitted cycle into a
/// [`Timeline`].  Pure aside from observer callbacks: the same config always
/// returns an equal timeline.
///
/// Termination requires a positive `day_length`; gate external input through
/// [`SimConfig::validate`] before calling.
pub fn run<O: SimObserver>(config: &SimConfig, observer: &mut O) -> Timeline {
    observer.on_sim_start(config.first_sleep_start());
    let timeline: Timeline = Cycles::new(config)
        .enumerate()
        .map(|(index, cycle)| {
            observer.on_cycle(index, &cycle);
            cycle
        })
        .collect();
    observer.on_sim_end(&timeline);
    timeline
}

/// [`run`] without observation.
pub fn generate(config: &SimConfig) -> Timeline {
    run(config, &mut NoopObserver)
}
