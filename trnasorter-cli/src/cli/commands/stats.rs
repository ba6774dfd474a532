use crate::cli::formatting::create_sorter_stats;
use clap::Args;
use std::path::PathBuf;
use trnasorter_core::SorterError;
use trnasorter_storage::SqliteStore;

#[derive(Args)]
pub struct StatsArgs {
    /// Database written by `trnasorter sort`
    #[arg(value_name = "DB")]
    pub database: PathBuf,
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
    let store = SqliteStore::open_existing(&args.database)?;
    let stats = store.latest_statistics()?.ok_or_else(|| {
        SorterError::Database(format!(
            "no run statistics stored in {}",
            args.database.display()
        ))
    })?;

    println!("{}", create_sorter_stats(&stats));
    Ok(())
}
