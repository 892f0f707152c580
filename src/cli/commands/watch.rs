use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::cli::render::{countdown_block, countdown_line};
use crate::core::clock::Clock;
use crate::core::countdown::{Countdown, FINE_PERIOD_SECS, Tick};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::daily_record::DailyRecord;
use chrono::{DateTime, Local};
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Handle the `watch` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Watch { ticks } = cmd {
        let calendar = Core::calendar_for(ctx.city)?;
        let mut clock = ctx.clock();

        run_loop(&calendar, clock.as_mut(), *ticks, |cd, now| {
            if ctx.colours {
                print!("{}{}", CLEAR_SCREEN, countdown_block(ctx, &calendar, cd, now));
            } else {
                println!("{}", countdown_line(cd));
            }
        });
    }
    Ok(())
}

/// Drive the countdown from `clock` until the period is over or `max_ticks`
/// refreshes have been rendered. Returns the number of refreshes.
///
/// Each refresh is a coarse tick when one is due (every minute, and right
/// after expiry) and a fine tick otherwise. The loop sleeps one second while
/// an event is pending and not at all right after expiry.
pub fn run_loop<C, F>(
    calendar: &[DailyRecord],
    clock: &mut C,
    max_ticks: Option<u64>,
    mut render: F,
) -> u64
where
    C: Clock + ?Sized,
    F: FnMut(&Countdown<'_, Local>, &DateTime<Local>),
{
    let mut state = Countdown::new(calendar);
    let mut refreshes = 0;

    loop {
        let now = clock.now();
        state = if state.coarse_due(&now) {
            state.reduce(Tick::Coarse(now))
        } else {
            state.reduce(Tick::Fine(now))
        };

        if state.target_changed() {
            match state.event() {
                Some(ev) => log::info!("counting down to {} at {}", ev.kind.as_str(), ev.at),
                None => log::info!("no event left"),
            }
        }

        render(&state, &now);
        refreshes += 1;

        if state.event().is_none() || max_ticks.is_some_and(|max| refreshes >= max) {
            break;
        }

        if state.fine_active() {
            clock.sleep(Duration::from_secs(FINE_PERIOD_SECS));
        }
    }

    log::debug!("watch loop finished after {} refreshes", refreshes);
    refreshes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::SimulatedClock;
    use crate::models::event_kind::EventKind;
    use chrono::TimeZone;

    fn calendar() -> Vec<DailyRecord> {
        serde_json::from_str(
            r#"[
            {"day":1,"date":"10 Mart 2026 Salı","imsak":"05:00","gunes":"06:30","ogle":"13:00",
             "ikindi":"16:30","aksam":"18:00","yatsi":"19:30"},
            {"day":2,"date":"11 Mart 2026 Çarşamba","imsak":"05:05","gunes":"06:29","ogle":"13:00",
             "ikindi":"16:31","aksam":"18:01","yatsi":"19:31"}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn rolls_over_to_next_target_on_expiry() {
        let cal = calendar();
        let start = Local.with_ymd_and_hms(2026, 3, 10, 17, 59, 58).unwrap();
        let mut clock = SimulatedClock::new(start);
        let mut seen = Vec::new();

        let n = run_loop(&cal, &mut clock, Some(4), |cd, _| {
            seen.push((
                cd.event().map(|e| e.kind),
                cd.remaining().to_string(),
            ));
        });

        assert_eq!(n, 4);
        assert_eq!(seen[0], (Some(EventKind::Iftar), "00:00:02".to_string()));
        assert_eq!(seen[1], (Some(EventKind::Iftar), "00:00:01".to_string()));
        assert_eq!(seen[2], (Some(EventKind::Iftar), "00:00:00".to_string()));
        assert_eq!(seen[3], (Some(EventKind::Sahur), "11:05:00".to_string()));
    }

    #[test]
    fn stops_when_period_is_over() {
        let cal = calendar();
        let start = Local.with_ymd_and_hms(2026, 3, 12, 12, 0, 0).unwrap();
        let mut clock = SimulatedClock::new(start);
        let n = run_loop(&cal, &mut clock, None, |cd, _| assert!(cd.event().is_none()));
        assert_eq!(n, 1);
    }

    #[test]
    fn coarse_tick_every_minute() {
        let cal = calendar();
        let start = Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let mut clock = SimulatedClock::new(start);
        let mut changes = 0;
        let n = run_loop(&cal, &mut clock, Some(125), |cd, _| {
            if cd.target_changed() {
                changes += 1;
            }
        });
        assert_eq!(n, 125);
        assert_eq!(changes, 1);
        assert_eq!(clock.now(), start + chrono::Duration::seconds(124));
    }
}
