use crate::cli::commands::list::row_badge;
use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::resolve::{current_day_index, resolve_next_event};
use crate::errors::AppResult;
use crate::models::daily_record::{DailyRecord, PLACEHOLDER};
use crate::models::event_kind::EventKind;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{highlight, muted};
use crate::utils::date::parse_date;
use crate::utils::formatting::pad_right;

/// "Günün Akışı": the six times of `day`, the one `active` counts down to
/// marked with `●`.
pub fn render_day(day: &DailyRecord, active: Option<EventKind>, colours: bool) -> String {
    let mut out = String::new();
    let target = active.map(|k| k.target_time_label());

    for (label, value) in day.times() {
        let line = format!("{} {}", pad_right(label, 8), value);
        let line = if Some(label) == target {
            format!("● {}", highlight(&line, colours))
        } else if value == PLACEHOLDER {
            format!("  {}", muted(&line, colours))
        } else {
            format!("  {}", line)
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Handle the `day` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let calendar = Core::calendar_for(ctx.city)?;
        let now = ctx.now();

        let (day, active) = match date {
            Some(d) => {
                let wanted = parse_date(d)?;
                let Some(idx) = current_day_index(&calendar, wanted) else {
                    warning(format!("No imsakiye entry for {}", wanted));
                    return Ok(());
                };
                let day = &calendar[idx];
                // highlight only when the pending event belongs to this day
                let active = resolve_next_event(&calendar, &now)
                    .filter(|ev| ev.day.date == day.date)
                    .map(|ev| ev.kind);
                (day, active)
            }
            None => match resolve_next_event(&calendar, &now) {
                Some(ev) => (ev.day, Some(ev.kind)),
                None => {
                    println!("Ramazan Sona Erdi");
                    return Ok(());
                }
            },
        };

        let badge = row_badge(day);
        let subtitle = format!("{} · {}", ctx.city.display_name(), day.display_date());
        header(
            &format!("Günün Akışı · {}", badge),
            Some(subtitle.as_str()),
            ctx.colours,
        );
        if let Some(name) = day.holiday_name.as_deref().filter(|_| day.is_holiday) {
            println!("{}", name);
        }
        println!();
        print!("{}", render_day(day, active, ctx.colours));
    }
    Ok(())
}
