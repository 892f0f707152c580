//! Time utilities: parsing HH:MM, combining clock times with date labels,
//! and converting naive local times to instants.

use crate::errors::{AppError, AppResult};
use crate::models::date_label::DayKey;
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone};

/// Parse an `HH:MM` clock time. Seconds are always zero.
///
/// The `-` placeholder, and anything else that is not two colon-separated
/// integers, is `NotClockTime`; integers out of range are `InvalidTime`.
pub fn parse_clock(t: &str) -> AppResult<NaiveTime> {
    let not_clock = || AppError::NotClockTime(t.to_string());

    let (h, m) = t.trim().split_once(':').ok_or_else(not_clock)?;
    let hours: u32 = h.parse().map_err(|_| not_clock())?;
    let minutes: u32 = m.parse().map_err(|_| not_clock())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Combine a clock time with a date label into an instant in `tz`.
pub fn parse_instant_in<Tz: TimeZone>(
    tz: &Tz,
    time_of_day: &str,
    date_label: &str,
) -> AppResult<DateTime<Tz>> {
    let key = DayKey::parse(date_label)?;
    let time = parse_clock(time_of_day)?;
    to_zone(tz, key.date().and_time(time))
}

/// `parse_instant_in` for the local system time zone.
pub fn parse_instant(time_of_day: &str, date_label: &str) -> AppResult<DateTime<Local>> {
    parse_instant_in(&Local, time_of_day, date_label)
}

/// Resolve a naive wall-clock time in `tz`. Ambiguous times pick the
/// earliest instant; times skipped by a DST gap are rejected.
pub fn to_zone<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> AppResult<DateTime<Tz>> {
    earliest_instant(tz.from_local_datetime(&naive), naive)
}

fn earliest_instant<Tz: TimeZone>(
    mapped: LocalResult<DateTime<Tz>>,
    naive: NaiveDateTime,
) -> AppResult<DateTime<Tz>> {
    match mapped {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(AppError::InvalidTime(
            naive.format("%Y-%m-%d %H:%M").to_string(),
        )),
    }
}

/// Parse the `--at` override (`YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`).
pub fn parse_at(s: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;
    to_zone(&Local, naive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Timelike};

    fn istanbul_tz() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn clock_time_parses() {
        let t = parse_clock("05:07").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (5, 7, 0));
    }

    #[test]
    fn placeholder_is_not_a_clock_time() {
        assert!(matches!(parse_clock("-"), Err(AppError::NotClockTime(_))));
        assert!(matches!(parse_clock("05"), Err(AppError::NotClockTime(_))));
        assert!(matches!(parse_clock("aa:bb"), Err(AppError::NotClockTime(_))));
        assert!(matches!(parse_clock(""), Err(AppError::NotClockTime(_))));
    }

    #[test]
    fn out_of_range_clock_is_invalid() {
        assert!(matches!(parse_clock("24:00"), Err(AppError::InvalidTime(_))));
        assert!(matches!(parse_clock("12:60"), Err(AppError::InvalidTime(_))));
    }

    #[test]
    fn instant_combines_label_and_time() {
        let tz = istanbul_tz();
        let at = parse_instant_in(&tz, "05:00", "10 Mart 2026 Salı").unwrap();
        let expected = tz.with_ymd_and_hms(2026, 3, 10, 5, 0, 0).unwrap();
        assert_eq!(at, expected);
    }

    #[test]
    fn instant_rejects_bad_inputs() {
        let tz = istanbul_tz();
        assert!(matches!(
            parse_instant_in(&tz, "-", "20 Mart 2026 Cuma"),
            Err(AppError::NotClockTime(_))
        ));
        assert!(matches!(
            parse_instant_in(&tz, "05:00", "20 Marzo 2026 Cuma"),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn fold_picks_earliest_and_gap_is_rejected() {
        let naive = NaiveDate::from_ymd_opt(2026, 10, 25)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let summer = FixedOffset::east_opt(2 * 3600).unwrap();
        let winter = FixedOffset::east_opt(3600).unwrap();
        let first = summer.from_local_datetime(&naive).unwrap();
        let second = winter.from_local_datetime(&naive).unwrap();
        assert!(first < second);

        let picked = earliest_instant(LocalResult::Ambiguous(first, second), naive).unwrap();
        assert_eq!(picked, first);

        let gap: LocalResult<DateTime<FixedOffset>> = LocalResult::None;
        match earliest_instant(gap, naive) {
            Err(AppError::InvalidTime(s)) => assert_eq!(s, "2026-10-25 02:30"),
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }

    #[test]
    fn at_override_formats() {
        let a = parse_at("2026-03-10 04:00").unwrap();
        let b = parse_at("2026-03-10T04:00").unwrap();
        assert_eq!(a, b);
        assert!(parse_at("10/03/2026").is_err());
    }
}
