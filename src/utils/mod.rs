pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{Remaining, format_remaining, remaining_until};
pub use time::{parse_instant, parse_instant_in};
