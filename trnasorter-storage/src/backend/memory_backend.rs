use crate::core::{RecordRow, RecordStore};
use trnasorter_core::{ClassificationResult, SorterError, SorterResult, SorterStats};

/// In-memory [`RecordStore`], used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<RecordRow>,
    statistics: Vec<SorterStats>,
    batches_committed: usize,
    batches_rolled_back: usize,
    closed: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RecordRow] {
        &self.records
    }

    pub fn statistics(&self) -> &[SorterStats] {
        &self.statistics
    }

    pub fn latest_statistics(&self) -> Option<&SorterStats> {
        self.statistics.last()
    }

    pub fn batches_committed(&self) -> usize {
        self.batches_committed
    }

    pub fn batches_rolled_back(&self) -> usize {
        self.batches_rolled_back
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> SorterResult<()> {
        if self.closed {
            return Err(SorterError::Database("memory store is closed".to_string()));
        }
        Ok(())
    }
}

impl RecordStore for MemoryStore {
    fn insert_record(&mut self, result: &ClassificationResult, id: &str) -> SorterResult<()> {
        self.ensure_open()?;
        self.records.push(RecordRow::from_result(result, id));
        Ok(())
    }

    fn insert_statistics(&mut self, stats: &SorterStats) -> SorterResult<()> {
        self.ensure_open()?;
        self.statistics.push(stats.clone());
        Ok(())
    }

    fn close(&mut self) -> SorterResult<()> {
        self.ensure_open()?;
        self.closed = true;
        Ok(())
    }

    fn commit_batch(&mut self) -> SorterResult<()> {
        self.ensure_open()?;
        self.batches_committed += 1;
        Ok(())
    }

    fn rollback_batch(&mut self) -> SorterResult<()> {
        self.batches_rolled_back += 1;
        Ok(())
    }
}
