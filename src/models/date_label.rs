use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt;

/// Turkish month names, in calendar order.
pub const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Map a Turkish month name to its 1-based month number.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

/// Structured (year, month, day) key of a date label such as
/// `"19 Şubat 2026 Perşembe"`.
///
/// Only the first three whitespace-separated tokens are significant; the
/// weekday and any trailing decoration are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn parse(label: &str) -> AppResult<Self> {
        let mut parts = label.split_whitespace();
        let invalid = || AppError::InvalidDate(label.to_string());

        let day: u32 = parts
            .next()
            .and_then(|d| d.parse().ok())
            .ok_or_else(invalid)?;
        let month = parts.next().and_then(month_number).ok_or_else(invalid)?;
        let year: i32 = parts
            .next()
            .and_then(|y| y.parse().ok())
            .ok_or_else(invalid)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(DayKey)
            .ok_or_else(invalid)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
