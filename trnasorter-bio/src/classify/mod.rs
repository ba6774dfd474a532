pub mod search;

pub use search::{score_window, search, SearchOutcome, WindowScore, WINDOW_SIZE};

use crate::anticodon::{AnticodonExtractor, PositionalExtractor};
use crate::attributes;
use tracing::trace;
use trnasorter_core::{ClassificationResult, RejectionReason, SorterStats};

/// Outcome of classifying one sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// tRNA-like; trailer, full-length status and anticodon are filled in
    Accepted(ClassificationResult),
    /// Not tRNA-like; `result` describes the best window seen
    Rejected {
        reason: RejectionReason,
        result: ClassificationResult,
    },
}

impl Classification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Accepted(_))
    }

    pub fn result(&self) -> &ClassificationResult {
        match self {
            Classification::Accepted(result) => result,
            Classification::Rejected { result, .. } => result,
        }
    }

    pub fn into_result(self) -> ClassificationResult {
        match self {
            Classification::Accepted(result) => result,
            Classification::Rejected { result, .. } => result,
        }
    }

    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            Classification::Accepted(_) => None,
            Classification::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Reason for a sequence whose search found no acceptable window
pub fn rejection_reason(result: &ClassificationResult, length: usize) -> RejectionReason {
    match (result.t_loop_error, result.acceptor_error) {
        (true, true) if length < WINDOW_SIZE => RejectionReason::TooShort,
        (true, true) => RejectionReason::Both,
        (false, true) => RejectionReason::Acceptor,
        (true, false) => RejectionReason::TLoop,
        // Zero mismatches is always accepted, so a clean best window cannot be rejected
        (false, false) => unreachable!(
            "rejected window without motif divergence (mismatch_count {})",
            result.mismatch_count
        ),
    }
}

/// Decides whether a sequence is tRNA-like and derives its attributes when it is.
pub struct Classifier<E = PositionalExtractor> {
    extractor: E,
}

impl Classifier<PositionalExtractor> {
    pub fn new() -> Self {
        Self {
            extractor: PositionalExtractor::new(),
        }
    }
}

impl Default for Classifier<PositionalExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AnticodonExtractor> Classifier<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Classify an uppercase ASCII sequence, recording pass/fail reasons in `stats`.
    /// Never fails; short or garbage input is a rejection. Non-ASCII input is a
    /// caller bug, caught by a debug assertion.
    pub fn classify(&self, sequence: &str, stats: &mut SorterStats) -> Classification {
        match search(sequence) {
            SearchOutcome::Accepted { offset, result } => {
                trace!(offset, mismatches = result.mismatch_count, "window accepted");
                Classification::Accepted(attributes::derive(result, offset, &self.extractor, stats))
            }
            SearchOutcome::Exhausted { result } => {
                let reason = rejection_reason(&result, sequence.len());
                stats.record_rejection(reason);
                trace!(%reason, mismatches = result.mismatch_count, "sequence rejected");
                Classification::Rejected { reason, result }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trnasorter_core::types::NO_CANDIDATE;

    const PERFECT: &str = "GTTCAAAACAAAAAAAAAAAACCA";

    #[test]
    fn test_too_short() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        let outcome = classifier.classify("GTTCCCA", &mut stats);
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::TooShort));
        assert_eq!(outcome.result().mismatch_count, NO_CANDIDATE);
        assert_eq!(stats.short_rejected, 1);
        assert_eq!(stats.total_rejected, 1);
    }

    #[test]
    fn test_empty_sequence_is_too_short() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();
        let outcome = classifier.classify("", &mut stats);
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::TooShort));
    }

    #[test]
    fn test_perfect_window_accepted() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        let outcome = classifier.classify(PERFECT, &mut stats);
        assert!(outcome.is_accepted());

        let result = outcome.into_result();
        assert_eq!(result.mismatch_count, 0);
        assert_eq!(result.trailer_length, 0);
        assert_eq!(result.sequence, PERFECT);
        assert_eq!(stats.total_passed, 1);
        assert_eq!(stats.no_divergence, 1);
        assert_eq!(stats.t_loop_divergence, 0);
        assert_eq!(stats.acceptor_divergence, 0);
    }

    #[test]
    fn test_gtac_window_counts_t_loop_divergence() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        let outcome = classifier.classify("GTACAAAACAAAAAAAAAAAACCA", &mut stats);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.result().mismatch_count, 1);
        assert_eq!(stats.t_loop_divergence, 1);
        // G and T match at 0 and 1, A at offset 2 is the first divergence
        assert_eq!(stats.div_at_0, 0);
        assert_eq!(stats.div_at_1, 0);
        assert_eq!(stats.div_at_2, 1);
    }

    #[test]
    fn test_gatc_window_counts_position_1_divergence() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        let outcome = classifier.classify("GATCAAAACAAAAAAAAAAAACCA", &mut stats);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.result().mismatch_count, 1);
        assert_eq!(stats.t_loop_divergence, 1);
        assert_eq!(stats.div_at_1, 1);
        assert_eq!(stats.div_at_0, 0);
        assert_eq!(stats.div_at_2, 0);
        assert_eq!(stats.div_at_3, 0);
        assert_eq!(stats.div_at_8, 0);
        assert_eq!(stats.acceptor_divergence, 0);
    }

    #[test]
    fn test_acceptor_only_rejection() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        // T-loop perfect, acceptor TTT is three edits away
        let outcome = classifier.classify("GTTCAAAACAAAAAAAAAAAATTT", &mut stats);
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::Acceptor));
        assert_eq!(stats.acceptor_seq_rejected, 1);
    }

    #[test]
    fn test_t_loop_only_rejection() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        let outcome = classifier.classify("AAAAAAAAAAAAAAAAAAAAACCA", &mut stats);
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::TLoop));
        assert_eq!(stats.t_loop_seq_rejected, 1);
    }

    #[test]
    fn test_both_rejection() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();

        let outcome = classifier.classify(&"A".repeat(40), &mut stats);
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::Both));
        assert_eq!(stats.both_rejected, 1);
        assert_eq!(stats.total_passed, 0);
    }

    #[test]
    fn test_trailer_trimmed() {
        let classifier = Classifier::new();
        let mut stats = SorterStats::new();
        let sequence = format!("GGGG{}ACG", PERFECT);

        let result = classifier.classify(&sequence, &mut stats).into_result();
        assert_eq!(result.trailer, "ACG");
        assert_eq!(result.trailer_length, 3);
        assert_eq!(result.length, sequence.len() - 3);
        assert_eq!(format!("{}{}", result.sequence, result.trailer), sequence);
        assert_eq!(stats.num_trailer, 1);
    }

    #[test]
    fn test_idempotent() {
        let classifier = Classifier::new();
        let sequence = format!("GGGG{}ACG", PERFECT);

        let mut first_stats = SorterStats::new();
        let first = classifier.classify(&sequence, &mut first_stats);
        let mut second_stats = SorterStats::new();
        let second = classifier.classify(&sequence, &mut second_stats);

        assert_eq!(first, second);
        assert_eq!(first_stats, second_stats);
    }

    #[test]
    #[should_panic(expected = "rejected window without motif divergence")]
    fn test_clean_rejection_is_invariant_violation() {
        let result = ClassificationResult {
            t_loop_error: false,
            acceptor_error: false,
            mismatch_count: 0,
            ..ClassificationResult::default()
        };
        rejection_reason(&result, 30);
    }
}
