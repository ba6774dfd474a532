pub mod traits;
pub mod types;

pub use traits::RecordStore;
pub use types::{RecordRow, STATS_COLUMN_NAMES};
