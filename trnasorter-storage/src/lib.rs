//! Persistence of classified tRNA records for trnasorter

pub mod backend;
pub mod batch;
pub mod core;
pub mod io;

// Re-export commonly used types and traits from core
pub use crate::core::{RecordRow, RecordStore};

pub use backend::{MemoryStore, SqliteStore};
pub use batch::BatchPersister;
pub use io::{export_tables, ExportSummary};
