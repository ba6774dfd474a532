pub mod export;

// Re-export commonly used types and functions
pub use export::{export_tables, write_table, ExportSummary, EXPORT_HEADER, NO_TRAILER_MARK};
