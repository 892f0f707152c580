//! rImsakiye library root.
//! Exposes the imsakiye core (merge, resolution, countdown), the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::AppContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(command: &Commands, ctx: &AppContext) -> AppResult<()> {
    match command {
        Commands::Next { .. } => cli::commands::next::handle(command, ctx),
        Commands::Watch { .. } => cli::commands::watch::handle(command, ctx),
        Commands::List => cli::commands::list::handle(command, ctx),
        Commands::Day { .. } => cli::commands::day::handle(command, ctx),
        Commands::Holidays => cli::commands::holidays::handle(command, ctx),
        Commands::Cities => cli::commands::cities::handle(command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(command, ctx),
        Commands::Init => cli::commands::init::handle(command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (--config overrides the standard location)
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ city, clock and output settings
    let ctx = AppContext::new(&cli, cfg, config_path)?;
    log::debug!("city={} at={:?}", ctx.city.id(), ctx.at);

    // 4️⃣ dispatch (no subcommand = next)
    let command = cli.command.clone().unwrap_or(Commands::Next { json: false });
    dispatch(&command, &ctx)
}
