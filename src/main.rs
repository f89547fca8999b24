mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Run(args) => report(command::run(args).await),
        Commands::Download { period } => report(command::download(*period).await),
        Commands::Legend {} => {
            command::legend();
            ExitCode::SUCCESS
        }
    }
}

/// Prints the outcome of a command that saves a file.
fn report(result: Result<String>) -> ExitCode {
    match result {
        Ok(filename) => {
            println!("File saved to `{}`", filename);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// -- Tests -------------------------------------------------------------------
