use crate::cli::commands::database_dir;
use crate::cli::formatting::create_sorter_stats;
use crate::core::Sorter;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use trnasorter_bio::FastaSource;
use trnasorter_core::{load_config, output_database_path, sample_file, Config};
use trnasorter_storage::SqliteStore;

/// Suffix of the plain-text statistics report
pub const STATS_FILE_SUFFIX: &str = "_SORTER_STATS.txt";

#[derive(Args)]
pub struct SortArgs {
    /// Name used for the default database and the side files
    #[arg(value_name = "SAMPLE_NAME")]
    pub sample_name: String,

    /// FASTA/FASTQ file of reads (optionally gzipped)
    #[arg(value_name = "READFILE")]
    pub read_file: PathBuf,

    /// Output database (defaults to <SAMPLE_NAME>.db)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "TRNASORTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Buffered bytes that trigger a database flush (overrides the config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_bytes: Option<u64>,

    /// Also export the trailer tables, longest sequences first
    #[arg(long)]
    pub length_sort: bool,
}

fn resolve_config(args: &SortArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };
    if let Some(bytes) = args.batch_bytes {
        config.batch.byte_budget = bytes as usize;
    }
    Ok(config)
}

fn progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

fn write_stats_report(dir: &Path, sample_name: &str, report: &str) -> anyhow::Result<PathBuf> {
    let path = sample_file(dir, sample_name, STATS_FILE_SUFFIX);
    std::fs::write(&path, report)?;
    Ok(path)
}

pub fn run(args: SortArgs) -> anyhow::Result<()> {
    // Everything that can be misconfigured fails before the first read
    let config = resolve_config(&args)?;
    let db_path = output_database_path(
        &args.sample_name,
        args.output.as_deref(),
        &config.output.database_extension,
    )?;
    if db_path.exists() {
        warn!("Appending to existing database {}", db_path.display());
    }

    let mut source = FastaSource::from_file(&args.read_file)?;
    let store = SqliteStore::open(&db_path)?;

    let spinner = progress_spinner();
    spinner.set_message(format!("Sorting {}...", args.read_file.display()));

    let sorter = Sorter::new(config.batch.byte_budget);
    let outcome = sorter.run_with_progress(&mut source, store, |stats| {
        if stats.total_seqs % 10_000 == 0 {
            spinner.set_message(format!(
                "Sorted {} reads, {} tRNA-like",
                stats.total_seqs, stats.total_passed
            ));
        }
    });
    spinner.finish_and_clear();
    let (summary, _store) = outcome?;

    let dir = database_dir(&db_path);
    if config.output.write_stats_file {
        let report = write_stats_report(dir, &args.sample_name, &summary.stats.to_string())?;
        info!("Wrote statistics report to {}", report.display());
    }

    if args.length_sort {
        super::export::export_database(&db_path, &args.sample_name, dir, true)?;
    }

    println!("{}", create_sorter_stats(&summary.stats));
    println!(
        "Stored {} tRNA-like reads in {}",
        summary.records_written,
        db_path.display()
    );
    Ok(())
}
