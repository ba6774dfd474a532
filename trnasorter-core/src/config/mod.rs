//! Configuration types for trnasorter

use crate::SorterError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Buffered bytes that trigger a flush to the record store
    #[serde(default = "default_byte_budget")]
    pub byte_budget: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension an explicit output database path must carry
    #[serde(default = "default_database_extension")]
    pub database_extension: String,
    /// Write `<sample>_SORTER_STATS.txt` next to the database
    #[serde(default = "default_write_stats_file")]
    pub write_stats_file: bool,
}

// Default value functions
fn default_byte_budget() -> usize { 2_000_000 }
fn default_database_extension() -> String { "db".to_string() }
fn default_write_stats_file() -> bool { true }

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            byte_budget: default_byte_budget(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_extension: default_database_extension(),
            write_stats_file: default_write_stats_file(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SorterError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    if config.batch.byte_budget == 0 {
        return Err(SorterError::Configuration(
            "batch.byte_budget must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SorterError> {
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
