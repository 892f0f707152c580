pub mod cities;
pub mod config;
pub mod day;
pub mod export;
pub mod holidays;
pub mod init;
pub mod list;
pub mod next;
pub mod watch;
