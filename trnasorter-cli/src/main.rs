use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;

use crate::cli::{Cli, Commands};
use trnasorter_core::SorterError;

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then TRNASORTER_LOG, then the -v count
    let log_level = std::env::var("TRNASORTER_LOG")
        .unwrap_or_else(|_| default_log_level(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<SorterError>() {
            Some(SorterError::Configuration(_)) => 2,
            Some(SorterError::Io(_)) => 3,
            Some(SorterError::Parse(_)) => 4,
            Some(SorterError::Database(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Sort(args) => crate::cli::commands::sort::run(args),
        Commands::Stats(args) => crate::cli::commands::stats::run(args),
        Commands::Export(args) => crate::cli::commands::export::run(args),
    }
}
