use serde::{Deserialize, Serialize};
use trnasorter_core::types::STATS_COLUMNS;
use trnasorter_core::ClassificationResult;

/// Column names of the statistics row, in `SorterStats::as_row` order
pub const STATS_COLUMN_NAMES: [&str; STATS_COLUMNS] = [
    "total_seqs",
    "total_rejected",
    "total_passed",
    "num_trailer",
    "total_full_length",
    "no_divergence",
    "t_loop_divergence",
    "div_at_0",
    "div_at_1",
    "div_at_2",
    "div_at_3",
    "div_at_8",
    "acceptor_divergence",
    "div_at_neg_1",
    "div_at_neg_2",
    "div_at_neg_3",
    "t_loop_seq_rejected",
    "acceptor_seq_rejected",
    "both_rejected",
    "short_rejected",
];

/// One persisted record. `trailer` and `anticodon` are `None` rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub id: String,
    pub seq: String,
    pub trailer: Option<String>,
    pub t_loop: String,
    pub acceptor: String,
    /// `"True"` or `"False"`
    pub full_length: String,
    pub seq_length: i64,
    pub trailer_length: i64,
    pub anticodon: Option<String>,
}

impl RecordRow {
    pub fn from_result(result: &ClassificationResult, id: &str) -> Self {
        Self {
            id: id.to_string(),
            seq: result.sequence.clone(),
            trailer: result.stored_trailer().map(str::to_string),
            t_loop: result.t_loop_motif.clone(),
            acceptor: result.acceptor_motif.clone(),
            full_length: if result.is_full_length { "True" } else { "False" }.to_string(),
            seq_length: result.length as i64,
            trailer_length: result.trailer_length as i64,
            anticodon: result.stored_anticodon().map(str::to_string),
        }
    }

    pub fn is_full_length(&self) -> bool {
        self.full_length == "True"
    }

    pub fn has_trailer(&self) -> bool {
        self.trailer.is_some()
    }
}
