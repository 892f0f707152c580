pub mod clock;
pub mod config;
pub mod countdown;
pub mod logic;
pub mod merge;
pub mod resolve;
