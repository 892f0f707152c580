//! User-facing status lines. Diagnostics go through `log`; these are the
//! messages a user is meant to read.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Section heading, e.g. `RAMAZAN 2026`, with an optional subtitle.
pub fn header(title: &str, subtitle: Option<&str>, colours: bool) {
    if colours {
        println!("{}", Colour::White.bold().paint(title));
    } else {
        println!("{}", title);
    }
    if let Some(sub) = subtitle {
        println!("{}", sub);
    }
}
