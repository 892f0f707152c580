//! Colour helpers for terminal output. Every helper takes `enabled` so the
//! `use_colors: false` config (and tests) get plain text.

use crate::models::event_kind::EventKind;
use ansi_term::{Colour, Style};

fn paint(style: Style, text: &str, enabled: bool) -> String {
    if enabled {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Colour of a countdown by event kind
pub fn kind_colour(kind: EventKind) -> Colour {
    match kind {
        EventKind::Sahur => Colour::Cyan,
        EventKind::Iftar => Colour::RGB(255, 153, 51), // orange
        EventKind::RamadanStarts => Colour::Purple,
    }
}

pub fn paint_kind(kind: EventKind, text: &str, enabled: bool) -> String {
    paint(kind_colour(kind).bold(), text, enabled)
}

/// Active row / current day.
pub fn highlight(text: &str, enabled: bool) -> String {
    paint(Colour::Yellow.bold(), text, enabled)
}

pub fn holiday(text: &str, enabled: bool) -> String {
    paint(Colour::Yellow.dimmed(), text, enabled)
}

/// Placeholder times and secondary labels.
pub fn muted(text: &str, enabled: bool) -> String {
    paint(Colour::Fixed(245).normal(), text, enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_colours_are_plain() {
        assert_eq!(highlight("05:00", false), "05:00");
        assert_eq!(paint_kind(EventKind::Iftar, "x", false), "x");
    }

    #[test]
    fn enabled_colours_wrap_in_escapes() {
        let s = highlight("05:00", true);
        assert!(s.starts_with("\x1b["));
        assert!(s.contains("05:00"));
    }
}
