//! Core utilities and types shared across all trnasorter crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config};
pub use error::{SorterError, SorterResult};

// Re-export core types
pub use types::{
    AcceptorPosition, ClassificationResult, Divergence, RejectionReason, SorterStats,
    TLoopPosition,
};

pub use system::{output_database_path, sample_file, validate_output_path};

/// Version information for the trnasorter project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
