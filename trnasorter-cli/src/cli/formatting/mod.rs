// Formatting and display functionality
pub mod stats_display;

pub use stats_display::{create_sorter_stats, StatsTable};
