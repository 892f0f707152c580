use super::{daily_record::DailyRecord, event_kind::EventKind};
use chrono::{DateTime, TimeZone};

/// The next boundary to count down to.
///
/// Derived on every resolution and never stored; `day` borrows the calendar
/// record the boundary belongs to.
#[derive(Debug, Clone)]
pub struct Event<'a, Tz: TimeZone> {
    pub kind: EventKind,
    pub at: DateTime<Tz>,
    pub day: &'a DailyRecord,
}

impl<'a, Tz: TimeZone> Event<'a, Tz> {
    pub fn new(kind: EventKind, at: DateTime<Tz>, day: &'a DailyRecord) -> Self {
        Self { kind, at, day }
    }

    pub fn time_str(&self) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.at.format("%H:%M").to_string()
    }

    /// Same target and same day record.
    pub fn same_target(&self, other: &Event<'_, Tz>) -> bool {
        self.kind == other.kind && self.at == other.at && self.day.date == other.day.date
    }
}
