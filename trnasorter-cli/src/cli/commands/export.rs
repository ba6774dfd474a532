use crate::cli::commands::database_dir;
use clap::Args;
use std::path::{Path, PathBuf};
use trnasorter_core::sample_file;
use trnasorter_storage::{export_tables, ExportSummary, SqliteStore};

pub const NO_TRAILER_SUFFIX: &str = "_TAB_NO_TRAILER";
pub const TRAILER_SUFFIX: &str = "_TAB_TRAILER";

#[derive(Args)]
pub struct ExportArgs {
    /// Database written by `trnasorter sort`
    #[arg(value_name = "DB")]
    pub database: PathBuf,

    /// Prefix of the exported tables
    #[arg(value_name = "SAMPLE_NAME")]
    pub sample_name: String,

    /// Directory for the tables (defaults to the database's directory)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Order rows by sequence length, longest first
    #[arg(long)]
    pub length_sort: bool,
}

/// Write `<sample>_TAB_NO_TRAILER` and `<sample>_TAB_TRAILER` into `dir`
pub fn export_database(
    database: &Path,
    sample_name: &str,
    dir: &Path,
    length_sort: bool,
) -> anyhow::Result<ExportSummary> {
    let store = SqliteStore::open_existing(database)?;
    let rows = store.records()?;
    let summary = export_tables(
        &rows,
        sample_file(dir, sample_name, NO_TRAILER_SUFFIX),
        sample_file(dir, sample_name, TRAILER_SUFFIX),
        length_sort,
    )?;
    Ok(summary)
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => database_dir(&args.database).to_path_buf(),
    };
    std::fs::create_dir_all(&dir)?;

    let summary = export_database(&args.database, &args.sample_name, &dir, args.length_sort)?;
    println!(
        "Exported {} rows without trailer and {} rows with trailer to {}",
        summary.no_trailer_rows,
        summary.trailer_rows,
        dir.display()
    );
    Ok(())
}
