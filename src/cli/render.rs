//! Text rendering shared by `next` and `watch`.

use crate::cli::context::AppContext;
use crate::core::countdown::Countdown;
use crate::core::resolve::current_day_index;
use crate::models::city::City;
use crate::models::daily_record::DailyRecord;
use crate::utils::colors::{muted, paint_kind};
use crate::utils::formatting::{bold, progress_bar, separator};
use chrono::{DateTime, Local, NaiveDate};
use serde_json::{Value, json};

/// `"20. GÜN"` on a Ramadan day, `"RAMAZAN"` otherwise.
pub fn day_badge(calendar: &[DailyRecord], today: NaiveDate) -> String {
    match current_day_index(calendar, today).map(|i| &calendar[i]) {
        Some(day) if day.has_schedule() => format!("{}. GÜN", day.day),
        _ => "RAMAZAN".to_string(),
    }
}

pub fn countdown_block(
    ctx: &AppContext,
    calendar: &[DailyRecord],
    cd: &Countdown<'_, Local>,
    now: &DateTime<Local>,
) -> String {
    let badge = day_badge(calendar, now.date_naive());
    let mut lines = vec![
        format!("● {} · {}", ctx.city.display_name(), badge),
        separator(&ctx.cfg.separator_char, 32),
    ];

    let Some(ev) = cd.event() else {
        lines.push("Ramazan Sona Erdi".to_string());
        lines.push(muted("Hayırlı bayramlar.", ctx.colours));
        return lines.join("\n") + "\n";
    };

    let remaining = cd.remaining();
    let clock = remaining.to_string();
    let clock = if ctx.colours { bold(&clock) } else { clock };
    lines.push(paint_kind(ev.kind, ev.kind.title(), ctx.colours));
    lines.push(format!("   {}", clock));
    lines.push(format!("   {}", muted("Saat : Dakika : Saniye", ctx.colours)));

    if remaining.total_ms > 0 {
        lines.push(format!(
            "{} Gün Akışı",
            progress_bar(remaining.day_fraction(), ctx.cfg.progress_width)
        ));
    }

    lines.push(format!(
        "{} · {} {} ({}. GÜN)",
        ev.kind.label(),
        ev.day.display_date(),
        ev.time_str(),
        ev.day.day
    ));
    lines.join("\n") + "\n"
}

/// One line per refresh when stdout is not a terminal.
pub fn countdown_line(cd: &Countdown<'_, Local>) -> String {
    match cd.event() {
        Some(ev) => format!("{} {}", cd.remaining(), ev.kind.title()),
        None => "Ramazan Sona Erdi".to_string(),
    }
}

pub fn countdown_json(city: City, cd: &Countdown<'_, Local>) -> Value {
    match cd.event() {
        Some(ev) => {
            let r = cd.remaining();
            json!({
                "city": city.id(),
                "kind": ev.kind.as_str(),
                "title": ev.kind.title(),
                "target": ev.at.to_rfc3339(),
                "day": ev.day.day,
                "date": ev.day.display_date(),
                "hours": r.hours,
                "minutes": r.minutes,
                "seconds": r.seconds,
                "total_ms": r.total_ms,
            })
        }
        None => json!({ "city": city.id(), "kind": null }),
    }
}
