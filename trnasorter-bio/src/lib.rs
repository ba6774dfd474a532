//! Sequence handling and tRNA classification for trnasorter

pub mod alignment;
pub mod anticodon;
pub mod attributes;
pub mod classify;
pub mod formats;
pub mod sequence;

// Re-export commonly used types
pub use anticodon::{AnticodonExtractor, PositionalExtractor};
pub use classify::{Classification, Classifier};
pub use formats::{FastaSource, MemorySource, SequenceSource};
pub use sequence::SequenceRecord;
