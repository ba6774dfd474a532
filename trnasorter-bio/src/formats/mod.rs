pub mod fasta;

pub use fasta::{FastaSource, MemorySource, SequenceSource};
