/// System-level helpers shared by the binary and storage crates
pub mod paths;

pub use paths::{output_database_path, sample_file, validate_output_path};
