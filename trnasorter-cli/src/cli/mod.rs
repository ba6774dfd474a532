pub mod commands;
pub mod formatting;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "trnasorter",
    version,
    about = "Sort tRNA-like reads out of sequencing data",
    long_about = "trnasorter scans each read from its 3' end for a T-loop and CCA acceptor \
                  motif, keeps the tRNA-like reads with their trailer, full-length status and \
                  anticodon in a SQLite database, and reports why the others were rejected."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify reads and store the tRNA-like ones
    Sort(commands::sort::SortArgs),

    /// Show the statistics of the last run stored in a database
    Stats(commands::stats::StatsArgs),

    /// Write the stored records as trailer / no-trailer tables
    Export(commands::export::ExportArgs),
}
