//! Restitch command-line entry point

use clap::Parser;
use restitch_cli::commands::Commands;

/// Reconcile overlapping text segments into uniquely labeled pieces
#[derive(Debug, Parser)]
#[command(name = "restitch", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
