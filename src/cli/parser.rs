use crate::export::ExportFormat;
use crate::models::city::City;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rImsakiye
#[derive(Parser)]
#[command(
    name = "rimsakiye",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ramazan 2026 imsakiye: countdown to sahur and iftar for İstanbul, Ankara and İzmir",
    long_about = None
)]
pub struct Cli {
    /// City to show (overrides `default_city` from the config file)
    #[arg(global = true, long, value_enum)]
    pub city: Option<City>,

    /// Pretend the current time is this local time ("YYYY-MM-DD HH:MM")
    #[arg(global = true, long, value_name = "DATETIME")]
    pub at: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Defaults to `next`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the countdown to the next sahur or iftar
    Next {
        #[arg(long, help = "Print the resolved event as JSON")]
        json: bool,
    },

    /// Live countdown, refreshed every second
    Watch {
        #[arg(long, value_name = "N", help = "Stop after N refreshes")]
        ticks: Option<u64>,
    },

    /// Show the whole imsakiye (Ramadan days and religious days)
    List,

    /// Show the six times of a day (default: the day of the next event)
    Day {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to show")]
        date: Option<String>,
    },

    /// List religious days
    Holidays,

    /// List the supported cities
    Cities,

    /// Export the merged calendar
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Replace the output file if it exists")]
        force: bool,
    },

    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
