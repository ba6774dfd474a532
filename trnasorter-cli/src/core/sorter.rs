use tracing::{debug, info};
use trnasorter_bio::{
    AnticodonExtractor, Classification, Classifier, PositionalExtractor, SequenceSource,
};
use trnasorter_core::{SorterResult, SorterStats};
use trnasorter_storage::{BatchPersister, RecordStore};

/// Totals of one completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub stats: SorterStats,
    pub flushes: usize,
    pub records_written: u64,
}

/// Pulls reads from a source, classifies them and persists the accepted ones
pub struct Sorter<E = PositionalExtractor> {
    classifier: Classifier<E>,
    byte_budget: usize,
}

impl Sorter<PositionalExtractor> {
    pub fn new(byte_budget: usize) -> Self {
        Self {
            classifier: Classifier::new(),
            byte_budget,
        }
    }
}

impl<E: AnticodonExtractor> Sorter<E> {
    pub fn with_classifier(classifier: Classifier<E>, byte_budget: usize) -> Self {
        Self {
            classifier,
            byte_budget,
        }
    }

    pub fn run<Src, S>(&self, source: &mut Src, store: S) -> SorterResult<(RunSummary, S)>
    where
        Src: SequenceSource,
        S: RecordStore,
    {
        self.run_with_progress(source, store, |_| {})
    }

    /// Classify every record of `source`, then flush, store the statistics and close `store`.
    ///
    /// `progress` sees the running counters after each record. Store failures
    /// abort the run as they happen; the closed store is handed back on success.
    pub fn run_with_progress<Src, S, F>(
        &self,
        source: &mut Src,
        store: S,
        mut progress: F,
    ) -> SorterResult<(RunSummary, S)>
    where
        Src: SequenceSource,
        S: RecordStore,
        F: FnMut(&SorterStats),
    {
        let mut stats = SorterStats::new();
        let mut batch = BatchPersister::new(store, self.byte_budget);
        info!("Sorting run started (batch budget {} bytes)", self.byte_budget);

        while let Some(record) = source.next_record() {
            let record = record?;
            stats.record_seen();

            // Sources other than the FASTA reader may hand out lowercase reads
            let sequence = record.sequence.to_ascii_uppercase();
            let outcome = self.classifier.classify(&sequence, &mut stats);
            if let Classification::Accepted(result) = outcome {
                batch.add(result, record.id);
                batch.maybe_flush()?;
            }
            progress(&stats);
        }

        batch.flush()?;
        let flushes = batch.flush_count();
        let records_written = batch.records_written();
        debug!("{} flushes wrote {} records", flushes, records_written);

        let mut store = batch.into_store();
        store.insert_statistics(&stats)?;
        store.close()?;

        info!(
            "Sorting run finished: {} reads, {} passed, {} rejected",
            stats.total_seqs, stats.total_passed, stats.total_rejected
        );

        Ok((
            RunSummary {
                stats,
                flushes,
                records_written,
            },
            store,
        ))
    }
}
