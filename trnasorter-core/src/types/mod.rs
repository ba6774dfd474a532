/// Core types shared across all trnasorter modules
pub mod record;
pub mod stats;

// Re-export commonly used types at module level
pub use record::{ClassificationResult, NO_CANDIDATE};
pub use stats::{
    AcceptorPosition, Divergence, RejectionReason, SorterStats, TLoopPosition, STATS_COLUMNS,
};
