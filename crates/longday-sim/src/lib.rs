//! `longday-sim` — schedule generation for the longday simulator.
//!
//! # Generation model
//!
//! ```text
//! bedtime[0] = config.first_sleep_start()
//! while bedtime[i] <= config.stop_date_time:
//!   sleep[i]     = [bedtime[i],    bedtime[i] + sleep_duration)
//!   awake[i]     = [sleep[i].end,  sleep[i].end + awake_duration)
//!   bedtime[i+1] = bedtime[i] + day_length
//! ```
//!
//! The loop above is realized as [`Cycles`], a lazy iterator of
//! sleep + awake pairs; [`run`] drives it to completion, fires
//! [`SimObserver`] hooks along the way, and collects the result into a
//! [`Timeline`].  The boundary check happens *before* each emission, so a
//! bedtime exactly on the stop boundary still produces a full final cycle,
//! and that cycle is never clipped to the boundary.
//!
//! Generation is deterministic: no clock reads, no randomness.  The same
//! `SimConfig` always produces an identical `Timeline`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use longday_core::SimConfig;
//! use longday_sim::{NoopObserver, run};
//!
//! let timeline = run(&config, &mut NoopObserver);
//! println!("{} cycles", timeline.cycle_count());
//! ```

pub mod cycles;
pub mod observer;
pub mod sim;
pub mod timeline;


pub use cycles::{Cycle, Cycles};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{generate, run};
pub use timeline::Timeline;
