//! Formatting utilities used for CLI and export outputs.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;
use unicode_width::UnicodeWidthStr;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Time left until a target, split for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub total_ms: u64,
}

impl Remaining {
    pub fn zero() -> Self {
        format_remaining(0)
    }

    pub fn is_zero(&self) -> bool {
        self.total_ms == 0
    }

    /// Share of a 24 hour window, capped at 1.0.
    pub fn day_fraction(&self) -> f64 {
        (self.total_ms as f64 / MS_PER_DAY as f64).min(1.0)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Split a millisecond duration into zero-padded hours, minutes and seconds.
/// Hours are not wrapped at 24.
pub fn format_remaining(duration_ms: u64) -> Remaining {
    let hours = duration_ms / MS_PER_HOUR;
    let minutes = (duration_ms / MS_PER_MINUTE) % 60;
    let seconds = (duration_ms / MS_PER_SECOND) % 60;

    Remaining {
        hours: format!("{:02}", hours),
        minutes: format!("{:02}", minutes),
        seconds: format!("{:02}", seconds),
        total_ms: duration_ms,
    }
}

/// Remaining time from `now` to `target`, clamped to zero once passed.
pub fn remaining_until<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Remaining {
    let diff = target.clone().signed_duration_since(now.clone());
    let ms = u64::try_from(diff.num_milliseconds()).unwrap_or(0);
    format_remaining(ms)
}

/// Horizontal bar for a fraction in `[0, 1]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to a display width; Turkish dotted capitals count as one column.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn separator(ch: &str, width: usize) -> String {
    ch.repeat(width)
}
