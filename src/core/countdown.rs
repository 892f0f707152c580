//! Countdown state driven by clock ticks.
//!
//! Two cadences feed the reducer: a coarse tick (once a minute) re-resolves
//! the next event, a fine tick (once a second, only while an event is
//! pending) refreshes the remaining time and detects expiry. The state owns
//! no clock; every tick carries its own instant.

use crate::core::resolve::resolve_next_event;
use crate::models::daily_record::DailyRecord;
use crate::models::event::Event;
use crate::utils::formatting::{Remaining, remaining_until};
use chrono::{DateTime, TimeZone};

pub const COARSE_PERIOD_SECS: i64 = 60;
pub const FINE_PERIOD_SECS: u64 = 1;

#[derive(Debug, Clone)]
pub enum Tick<Tz: TimeZone> {
    Coarse(DateTime<Tz>),
    Fine(DateTime<Tz>),
}

#[derive(Debug, Clone)]
pub struct Countdown<'a, Tz: TimeZone> {
    calendar: &'a [DailyRecord],
    event: Option<Event<'a, Tz>>,
    last_coarse: Option<DateTime<Tz>>,
    remaining: Remaining,
    expired: bool,
    target_changed: bool,
}

impl<'a, Tz: TimeZone> Countdown<'a, Tz> {
    pub fn new(calendar: &'a [DailyRecord]) -> Self {
        Self {
            calendar,
            event: None,
            last_coarse: None,
            remaining: Remaining::zero(),
            expired: false,
            target_changed: false,
        }
    }

    /// Resolve once at `now`.
    pub fn at(calendar: &'a [DailyRecord], now: DateTime<Tz>) -> Self {
        Self::new(calendar).reduce(Tick::Coarse(now))
    }

    pub fn reduce(mut self, tick: Tick<Tz>) -> Self {
        match tick {
            Tick::Coarse(now) => {
                let next = resolve_next_event(self.calendar, &now);
                self.target_changed = match (&self.event, &next) {
                    (Some(old), Some(new)) => !old.same_target(new),
                    (None, None) => false,
                    _ => true,
                };
                self.remaining = next
                    .as_ref()
                    .map(|ev| remaining_until(&ev.at, &now))
                    .unwrap_or_else(Remaining::zero);
                self.expired = next.is_some() && self.remaining.is_zero();
                self.event = next;
                self.last_coarse = Some(now);
            }
            Tick::Fine(now) => {
                self.target_changed = false;
                if let Some(ev) = &self.event {
                    self.remaining = remaining_until(&ev.at, &now);
                    self.expired = self.remaining.is_zero();
                }
            }
        }
        self
    }

    /// A minute has passed since the last resolution, there was none yet,
    /// or the pending event just expired.
    pub fn coarse_due(&self, now: &DateTime<Tz>) -> bool {
        match &self.last_coarse {
            None => true,
            Some(_) if self.expired => true,
            Some(last) => {
                now.clone().signed_duration_since(last.clone()).num_seconds() >= COARSE_PERIOD_SECS
            }
        }
    }

    /// The per-second refresh only runs while an event is pending.
    pub fn fine_active(&self) -> bool {
        self.event.is_some() && !self.expired
    }

    pub fn event(&self) -> Option<&Event<'a, Tz>> {
        self.event.as_ref()
    }

    pub fn remaining(&self) -> &Remaining {
        &self.remaining
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    /// The last coarse tick moved the countdown to a different target.
    pub fn target_changed(&self) -> bool {
        self.target_changed
    }
}
