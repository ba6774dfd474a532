//! Record store implementations

mod memory_backend;
mod sqlite_backend;

pub use memory_backend::MemoryStore;
pub use sqlite_backend::SqliteStore;
