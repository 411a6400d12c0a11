//! `longday-core` — foundational types for the `longday` schedule simulator.
//!
//! This crate is a dependency of every other `longday-*` crate.  It
//! intentionally has no `longday-*` dependencies and minimal external ones
//! (only `chrono` and `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`period`] | `Period`, `PeriodKind`                                |
//! | [`config`] | `SimConfig`                                           |
//! | [`error`]  | `ConfigError`, `ConfigResult`                         |

pub mod config;
pub mod error;
pub mod period;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{ConfigError, ConfigResult};
pub use period::{Period, PeriodKind};
