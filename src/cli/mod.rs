//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use cyclone_tracks::download::Period;
use indicatif::ProgressBar;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select, classify and save the tracks of one basin and season
    Run(RunArgs),
    /// Download an IBTrACS CSV file to the home directory
    Download {
        #[arg(long, value_enum, default_value_t = Period::Last3Years)]
        period: Period,
    },
    /// Print the intensity categories
    Legend {},
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Season year to select
    #[arg(long, default_value_t = 2024)]
    pub year: i32,

    /// Basin code to select (NA, SA, EP, WP, SP, SI, NI, MM)
    #[arg(long, default_value = "WP")]
    pub basin: String,

    /// IBTrACS CSV file; the last three years are downloaded when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Parquet file to write; defaults to a dated file in the home directory
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Multiplier from wind knots to km/h
    #[arg(long, default_value_t = cyclone_tracks::intensity::KNOTS_TO_KMH)]
    pub conversion_factor: f64,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
