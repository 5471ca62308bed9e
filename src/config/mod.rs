pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "inkbook")]
#[command(about = "Format booking dates, durations, phone numbers and availability")]
pub struct CliConfig {
    /// TOML file with timezone and wording overrides
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show an instant as DD-MM/YYYY, HH:MM in the studio timezone
    Date { instant: Option<String> },

    /// Show a minute count as hours and minutes
    Duration { minutes: Option<String> },

    /// Group a +CC number as +CC DD DD DD DD
    Phone { number: String },

    /// Time left until a booking starts
    Countdown {
        target: String,

        /// Count from this instant instead of the current time
        #[arg(long)]
        now: Option<String>,
    },

    /// Flip one date in an availability map and print the new map
    Toggle {
        /// Availability map as a JSON object, e.g. '{"2024-03-01": true}'
        #[arg(long, default_value = "{}")]
        map: String,

        date_key: String,
    },

    /// Summarize a booking row read as JSON from a file, or stdin with '-'
    Booking {
        input: String,

        #[arg(long)]
        now: Option<String>,
    },
}
