//! Next-event resolution over a merged calendar.

use crate::models::daily_record::DailyRecord;
use crate::models::date_label::DayKey;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::utils::time::parse_instant_in;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Imsak and akşam instants of a day, or `None` when either is not a clock
/// time (holiday-only days, bad data).
fn schedule_of<Tz: TimeZone>(tz: &Tz, day: &DailyRecord) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let imsak = parse_instant_in(tz, &day.imsak, &day.date);
    let aksam = parse_instant_in(tz, &day.aksam, &day.date);

    match (imsak, aksam) {
        (Ok(i), Ok(a)) => Some((i, a)),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("skipping day {} ({}): {}", day.day, day.date, e);
            None
        }
    }
}

/// Next boundary after `now`.
///
/// - today's imsak if it is still ahead,
/// - otherwise today's akşam if it is still ahead,
/// - otherwise the imsak of the next scheduled day.
///
/// Before the first scheduled day the event is `RamadanStarts`; after the
/// last akşam, or on an empty calendar, there is none. Days without a
/// schedule are skipped. When two days share a date the first one wins.
pub fn resolve_next_event<'a, Tz: TimeZone>(
    calendar: &'a [DailyRecord],
    now: &DateTime<Tz>,
) -> Option<Event<'a, Tz>> {
    let tz = now.timezone();
    let today = now.date_naive();

    let current = calendar.iter().enumerate().find_map(|(idx, day)| {
        let (imsak, aksam) = schedule_of(&tz, day)?;
        (imsak.date_naive() == today).then_some((idx, imsak, aksam))
    });

    let Some((idx, imsak, aksam)) = current else {
        let (first, imsak) = calendar
            .iter()
            .find_map(|day| schedule_of(&tz, day).map(|(imsak, _)| (day, imsak)))?;

        return if *now < imsak {
            Some(Event::new(EventKind::RamadanStarts, imsak, first))
        } else {
            log::trace!("no scheduled day on {}, period over", today);
            None
        };
    };

    let today_rec = &calendar[idx];
    if *now < imsak {
        return Some(Event::new(EventKind::Sahur, imsak, today_rec));
    }
    if *now < aksam {
        return Some(Event::new(EventKind::Iftar, aksam, today_rec));
    }

    calendar[idx + 1..].iter().find_map(|day| {
        schedule_of(&tz, day).map(|(imsak, _)| Event::new(EventKind::Sahur, imsak, day))
    })
}

/// Index of the first day whose date is `today`, holiday-only days
/// included. Drives the day list highlight and the day badge.
pub fn current_day_index(calendar: &[DailyRecord], today: NaiveDate) -> Option<usize> {
    let key = DayKey::from_date(today);
    calendar
        .iter()
        .position(|day| day.day_key().is_ok_and(|k| k == key))
}
