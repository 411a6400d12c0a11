//! Integration tests for longday-output.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use longday_core::SimConfig;
use longday_sim::{Timeline, generate};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

/// UTC+1 with no DST, so expected instants are easy to compute by hand.
fn cet() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

/// Two cycles: bedtime 01:30 on 2024-01-01, 8 h sleep, 25 h day.
fn reference_timeline() -> Timeline {
    let cfg = SimConfig {
        bedtime_on_start_day: NaiveTime::from_hms_opt(1, 30, 0).unwrap(),
        start_day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        sleep_duration: TimeDelta::hours(8),
        day_length: TimeDelta::hours(25),
        stop_date_time: dt(2024, 1, 2, 12, 0),
    };
    generate(&cfg)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ── Local → UTC conversion ────────────────────────────────────────────────────

#[cfg(test)]
mod localtime_tests {
    use chrono::{LocalResult, TimeZone, Timelike, Utc};

    use super::*;
    use crate::to_utc_in;

    fn utc0() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn plus1() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    /// Fake zone for exercising gap and fold handling: wall-clock hour 2
    /// does not exist, hour 3 runs at +01:00, and hour 4 occurs twice
    /// (+01:00 first, then +00:00).  Everything else is +00:00.
    #[derive(Copy, Clone, Debug)]
    struct SpringZone;

    impl TimeZone for SpringZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringZone
        }

        fn offset_from_local_date(&self, _local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(utc0())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            match local.hour() {
                2 => LocalResult::None,
                3 => LocalResult::Single(plus1()),
                4 => LocalResult::Ambiguous(plus1(), utc0()),
                _ => LocalResult::Single(utc0()),
            }
        }

        fn offset_from_utc_date(&self, _utc: &NaiveDate) -> FixedOffset {
            utc0()
        }

        fn offset_from_utc_datetime(&self, _utc: &NaiveDateTime) -> FixedOffset {
            utc0()
        }
    }

    /// Pathological zone that rejects every wall time.
    #[derive(Copy, Clone, Debug)]
    struct NeverZone;

    impl TimeZone for NeverZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            NeverZone
        }

        fn offset_from_local_date(&self, _local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::None
        }

        fn offset_from_local_datetime(&self, _local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::None
        }

        fn offset_from_utc_date(&self, _utc: &NaiveDate) -> FixedOffset {
            utc0()
        }

        fn offset_from_utc_datetime(&self, _utc: &NaiveDateTime) -> FixedOffset {
            utc0()
        }
    }

    #[test]
    fn east_offset_subtracts() {
        let utc = to_utc_in(&cet(), dt(2024, 1, 1, 9, 30));
        assert_eq!(utc.naive_utc(), dt(2024, 1, 1, 8, 30));
    }

    #[test]
    fn west_offset_adds() {
        let minus5 = FixedOffset::west_opt(5 * 3600).unwrap();
        let utc = to_utc_in(&minus5, dt(2024, 1, 1, 1, 30));
        assert_eq!(utc.naive_utc(), dt(2024, 1, 1, 6, 30));
    }

    #[test]
    fn midnight_wraps_to_previous_day() {
        let utc = to_utc_in(&cet(), dt(2024, 1, 1, 0, 30));
        assert_eq!(utc.naive_utc(), dt(2023, 12, 31, 23, 30));
    }

    #[test]
    fn utc_zone_is_identity() {
        let local = dt(2024, 6, 1, 12, 0);
        assert_eq!(to_utc_in(&Utc, local).naive_utc(), local);
    }

    #[test]
    fn fold_resolves_to_earlier_instant() {
        // 04:30 occurs twice in SpringZone; the +01:00 reading is earlier.
        let utc = to_utc_in(&SpringZone, dt(2024, 3, 31, 4, 30));
        assert_eq!(utc.naive_utc(), dt(2024, 3, 31, 3, 30));
    }

    #[test]
    fn gap_resolves_like_one_hour_later() {
        let gap = dt(2024, 3, 31, 2, 30);
        let resolved = to_utc_in(&SpringZone, gap);
        assert_eq!(resolved, to_utc_in(&SpringZone, gap + TimeDelta::hours(1)));
        // 03:30 at +01:00 → 02:30 UTC.
        assert_eq!(resolved.naive_utc(), dt(2024, 3, 31, 2, 30));
    }

    #[test]
    fn unresolvable_zone_falls_back_to_utc_reading() {
        let local = dt(2024, 1, 1, 5, 0);
        assert_eq!(to_utc_in(&NeverZone, local).naive_utc(), local);
    }
}

// ── ICS backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod ics_tests {
    use longday_core::PeriodKind;

    use super::*;
    use crate::ics::IcsWriter;
    use crate::writer::{ScheduleWriter, write_schedule};
    use crate::{OutputError, OutputResult};

    #[test]
    fn sleep_events_have_utc_boundaries_and_stable_uids() {
        let dir = tmp();
        let path = dir.path().join("schedule.ics");
        let timeline = reference_timeline();

        let mut w = IcsWriter::with_zone(&path, cet()).unwrap();
        w.write_periods(PeriodKind::Sleep, timeline.sleep_periods())
            .unwrap();
        w.finish().unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&ics, "BEGIN:VEVENT"), 2);
        assert_eq!(count(&ics, "SUMMARY:Sleep"), 2);
        // Local 2024-01-01 01:30 at +01:00 is 00:30 UTC.
        assert!(ics.contains("DTSTART:20240101T003000Z"), "{ics}");
        assert!(ics.contains("DTEND:20240101T083000Z"), "{ics}");
        assert!(ics.contains("UID:sleep-0@longday"));
        assert!(ics.contains("UID:sleep-1@longday"));
    }

    #[test]
    fn selector_is_a_set_with_sleep_first() {
        let dir = tmp();
        let path = dir.path().join("schedule.ics");
        let timeline = reference_timeline();

        let mut w = IcsWriter::with_zone(&path, cet()).unwrap();
        // Duplicate entries and reversed order must not matter.
        let kinds = [PeriodKind::Awake, PeriodKind::Sleep, PeriodKind::Sleep];
        write_schedule(&mut w, &timeline, &kinds).unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&ics, "BEGIN:VEVENT"), 4, "2 sleep + 2 awake, no dups");
        assert_eq!(count(&ics, "SUMMARY:Sleep"), 2);
        assert_eq!(count(&ics, "SUMMARY:Awake"), 2);

        let last_sleep = ics.rfind("SUMMARY:Sleep").unwrap();
        let first_awake = ics.find("SUMMARY:Awake").unwrap();
        assert!(last_sleep < first_awake, "sleep events precede awake events");
    }

    #[test]
    fn excluded_kind_is_absent() {
        let dir = tmp();
        let path = dir.path().join("schedule.ics");

        let mut w = IcsWriter::with_zone(&path, cet()).unwrap();
        write_schedule(&mut w, &reference_timeline(), &[PeriodKind::Sleep]).unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&ics, "SUMMARY:Awake"), 0);
    }

    #[test]
    fn empty_timeline_writes_valid_empty_calendar() {
        let dir = tmp();
        let path = dir.path().join("empty.ics");

        let mut w = IcsWriter::with_zone(&path, cet()).unwrap();
        write_schedule(&mut w, &Timeline::default(), &[PeriodKind::Sleep]).unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(ics.contains("longday schedule"));
        assert_eq!(count(&ics, "BEGIN:VEVENT"), 0);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let path = dir.path().join("schedule.ics");

        let mut w = IcsWriter::with_zone(&path, cet()).unwrap();
        write_schedule(&mut w, &reference_timeline(), &[PeriodKind::Sleep]).unwrap();
        w.finish().unwrap(); // second call must not serialize again

        let ics = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&ics, "BEGIN:VCALENDAR"), 1);
    }

    #[test]
    fn unwritable_target_fails_at_creation() {
        let dir = tmp();
        let path = dir.path().join("missing").join("schedule.ics");
        let result: OutputResult<IcsWriter<FixedOffset>> = IcsWriter::with_zone(&path, cet());
        assert!(matches!(result, Err(OutputError::Io(_))));
    }

    #[test]
    fn local_zone_constructor_creates_file() {
        // Instants depend on the host zone, so only check the envelope.
        let dir = tmp();
        let path = dir.path().join("local.ics");

        let mut w = IcsWriter::new(&path).unwrap();
        write_schedule(&mut w, &reference_timeline(), &[PeriodKind::Sleep]).unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&ics, "BEGIN:VEVENT"), 2);
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use longday_core::PeriodKind;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::{ScheduleWriter, write_schedule};

    #[test]
    fn header_row() {
        let dir = tmp();
        let path = dir.path().join("periods.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["kind", "start", "end", "duration_minutes"]);
    }

    #[test]
    fn rows_in_local_time_with_minute_durations() {
        let dir = tmp();
        let path = dir.path().join("periods.csv");
        let timeline = reference_timeline();

        let mut w = CsvWriter::new(&path).unwrap();
        write_schedule(&mut w, &timeline, &PeriodKind::ALL).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4, "2 sleep + 2 awake rows");

        assert_eq!(&rows[0][0], "sleep");
        assert_eq!(&rows[0][1], "2024-01-01 01:30:00");
        assert_eq!(&rows[0][2], "2024-01-01 09:30:00");
        assert_eq!(&rows[0][3], "480");

        assert_eq!(&rows[2][0], "awake");
        assert_eq!(&rows[2][1], "2024-01-01 09:30:00");
        assert_eq!(&rows[2][2], "2024-01-02 02:30:00");
        assert_eq!(&rows[2][3], "1020");
    }

    #[test]
    fn empty_write_ok() {
        let dir = tmp();
        let path = dir.path().join("periods.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.write_periods(PeriodKind::Sleep, &[]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let path = dir.path().join("periods.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }
}

// ── End-to-end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod integration {
    use longday_core::PeriodKind;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::ics::IcsWriter;
    use crate::writer::write_schedule;

    #[test]
    fn config_to_both_backends() {
        let dir = tmp();
        let ics_path = dir.path().join("schedule.ics");
        let csv_path = dir.path().join("periods.csv");
        let timeline = reference_timeline();

        let mut ics_writer = IcsWriter::with_zone(&ics_path, cet()).unwrap();
        write_schedule(&mut ics_writer, &timeline, &[PeriodKind::Sleep]).unwrap();

        let mut csv_writer = CsvWriter::new(&csv_path).unwrap();
        write_schedule(&mut csv_writer, &timeline, &PeriodKind::ALL).unwrap();

        let ics = std::fs::read_to_string(&ics_path).unwrap();
        assert_eq!(count(&ics, "BEGIN:VEVENT"), timeline.cycle_count());

        let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(rdr.records().count(), 2 * timeline.cycle_count());
    }
}
