/// Byte-budgeted buffering of accepted records in front of a [`RecordStore`]
use crate::core::RecordStore;
use tracing::{debug, info, warn};
use trnasorter_core::{ClassificationResult, SorterResult};

/// Default flush threshold in bytes
pub const DEFAULT_BYTE_BUDGET: usize = 2_000_000;

/// Buffers `(result, identifier)` pairs and writes them to the store in
/// insertion order once their accounted size exceeds the byte budget.
///
/// The buffered size is tracked incrementally from each pair's string
/// capacities, so the threshold reflects the records themselves rather than
/// the container holding them.
pub struct BatchPersister<S: RecordStore> {
    store: S,
    byte_budget: usize,
    pending: Vec<(ClassificationResult, String)>,
    buffered_bytes: usize,
    flush_count: usize,
    records_written: u64,
}

fn write_all<S: RecordStore>(
    store: &mut S,
    pending: &[(ClassificationResult, String)],
) -> SorterResult<()> {
    for (result, id) in pending {
        store.insert_record(result, id)?;
    }
    store.commit_batch()
}

fn pair_size(result: &ClassificationResult, id: &str) -> usize {
    result.estimated_size() + std::mem::size_of::<String>() + id.len()
}

impl<S: RecordStore> BatchPersister<S> {
    pub fn new(store: S, byte_budget: usize) -> Self {
        Self {
            store,
            byte_budget,
            pending: Vec::new(),
            buffered_bytes: 0,
            flush_count: 0,
            records_written: 0,
        }
    }

    pub fn byte_budget(&self) -> usize {
        self.byte_budget
    }

    /// Append one accepted record to the batch
    pub fn add(&mut self, result: ClassificationResult, id: impl Into<String>) {
        let id = id.into();
        self.buffered_bytes += pair_size(&result, &id);
        self.pending.push((result, id));
    }

    /// Flush when the buffered size is over budget. Returns whether a flush happened.
    pub fn maybe_flush(&mut self) -> SorterResult<bool> {
        if self.buffered_bytes > self.byte_budget {
            debug!(
                "Batch of {} records at {} bytes exceeds budget of {} bytes",
                self.pending.len(),
                self.buffered_bytes,
                self.byte_budget
            );
            self.flush()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Write every buffered pair and clear the batch. An empty batch is a no-op.
    pub fn flush(&mut self) -> SorterResult<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let pending = std::mem::take(&mut self.pending);
        self.buffered_bytes = 0;
        let count = pending.len();

        self.store.begin_batch()?;
        if let Err(e) = write_all(&mut self.store, &pending) {
            if let Err(rollback) = self.store.rollback_batch() {
                warn!("Rolling back failed batch: {}", rollback);
            }
            return Err(e);
        }

        self.flush_count += 1;
        self.records_written += count as u64;
        info!("Flushed {} records to the store", count);
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn buffered_bytes(&self) -> usize {
        self.buffered_bytes
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back. Anything still buffered is dropped, so flush first.
    pub fn into_store(self) -> S {
        self.store
    }
}
