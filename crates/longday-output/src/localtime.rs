//! Naive-local to UTC conversion.
//!
//! Schedule arithmetic happens in naive local time; calendar events need
//! real instants.  Resolution has to be total: a generated bedtime can land
//! in a DST gap or fold, and output writing should not fail over it.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Resolve a naive local instant in `tz` and convert it to UTC.
///
/// Ambiguous wall times (DST fold) resolve to the earlier instant.  Skipped
/// wall times (DST gap) are shifted forward one hour and re-resolved.  If
/// the zone still yields nothing, the instant is interpreted as already-UTC.
pub fn to_utc_in<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = local + TimeDelta::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) => dt.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
                LocalResult::None => Utc.from_utc_datetime(&local),
            }
        }
    }
}

/// [`to_utc_in`] over the system's current local zone.
pub fn local_to_utc(local: NaiveDateTime) -> DateTime<Utc> {
    to_utc_in(&Local, local)
}
