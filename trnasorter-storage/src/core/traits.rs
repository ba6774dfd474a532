use trnasorter_core::{ClassificationResult, SorterResult, SorterStats};

/// Destination for classified records and the run statistics.
///
/// Failures are returned to the caller untouched; no store retries.
pub trait RecordStore {
    /// Persist one accepted sequence under its identifier
    fn insert_record(&mut self, result: &ClassificationResult, id: &str) -> SorterResult<()>;

    /// Persist the final counters of a run
    fn insert_statistics(&mut self, stats: &SorterStats) -> SorterResult<()>;

    /// Release the underlying connection. Later calls fail.
    fn close(&mut self) -> SorterResult<()>;

    /// Called before a batch of `insert_record` calls
    fn begin_batch(&mut self) -> SorterResult<()> {
        Ok(())
    }

    /// Called after every record of a batch was inserted
    fn commit_batch(&mut self) -> SorterResult<()> {
        Ok(())
    }

    /// Called instead of `commit_batch` when a write of the batch failed
    fn rollback_batch(&mut self) -> SorterResult<()> {
        Ok(())
    }
}
