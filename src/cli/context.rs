use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{Clock, SimulatedClock, SystemClock};
use crate::errors::AppResult;
use crate::models::city::City;
use crate::utils::time::parse_at;
use chrono::{DateTime, Local};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Everything a command handler needs besides its own arguments.
pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub city: City,
    pub at: Option<DateTime<Local>>,
    pub test: bool,
    pub colours: bool,
}

impl AppContext {
    pub fn new(cli: &Cli, cfg: Config, config_path: PathBuf) -> AppResult<Self> {
        let city = match cli.city {
            Some(c) => c,
            None => cfg.city()?,
        };
        let at = cli.at.as_deref().map(parse_at).transpose()?;
        let colours = cfg.use_colors && std::io::stdout().is_terminal();

        Ok(Self {
            cfg,
            config_path,
            city,
            at,
            test: cli.test,
            colours,
        })
    }

    /// Simulated when `--at` was given, the system clock otherwise.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.at {
            Some(start) => Box::new(SimulatedClock::new(start)),
            None => Box::new(SystemClock),
        }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock().now()
    }
}
