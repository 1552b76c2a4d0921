//! Command implementations for the River Watch CLI.
//!
//! Provides subcommands for querying the Environment Agency
//! flood-monitoring API from a terminal.

use clap::Subcommand;

pub mod readings;
pub mod stations;

#[derive(Subcommand)]
pub enum Command {
    /// List all monitoring stations from the catalog endpoint
    Stations {
        /// Only show stations whose river name contains this text
        #[arg(long)]
        river: Option<String>,
    },

    /// Fetch recent readings for one station
    Readings {
        /// Station reference code, e.g. "1029TH"
        #[arg(short, long)]
        station: String,

        /// Trailing window in hours
        #[arg(long, default_value_t = 24)]
        hours: i64,

        /// Write readings to this CSV file instead of stdout
        #[arg(short, long)]
        output_csv: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stations { river } => stations::run_stations(river.as_deref()).await,
        Command::Readings {
            station,
            hours,
            output_csv,
        } => readings::run_readings(&station, hours, output_csv.as_deref()).await,
    }
}
