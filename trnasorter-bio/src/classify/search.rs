/// Sliding-window motif search, 3' end first
use crate::alignment::levenshtein;
use trnasorter_core::ClassificationResult;

/// Bases per candidate window
pub const WINDOW_SIZE: usize = 24;
/// Reference T-loop motif at the window start
pub const T_LOOP_MOTIF: &[u8] = b"GTTC";
/// Base required at window offset 8
pub const T_LOOP_ANCHOR: &[u8] = b"C";
pub const T_LOOP_ANCHOR_OFFSET: usize = 8;
/// Reference acceptor motif at the window end
pub const ACCEPTOR_MOTIF: &[u8] = b"CCA";
/// A window is accepted once its combined edit distance drops below this
pub const ACCEPT_THRESHOLD: usize = 2;

const T_LOOP_SPAN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScore {
    pub t_loop_dist: usize,
    pub acceptor_dist: usize,
}

impl WindowScore {
    pub fn mismatch_count(&self) -> usize {
        self.t_loop_dist + self.acceptor_dist
    }

    pub fn t_loop_error(&self) -> bool {
        self.t_loop_dist >= 1
    }

    pub fn acceptor_error(&self) -> bool {
        self.acceptor_dist >= 1
    }

    pub fn is_acceptable(&self) -> bool {
        self.mismatch_count() < ACCEPT_THRESHOLD
    }
}

/// Score one full window against both reference motifs
pub fn score_window(window: &[u8]) -> WindowScore {
    debug_assert_eq!(window.len(), WINDOW_SIZE);

    let t_loop_dist = levenshtein(T_LOOP_MOTIF, &window[..T_LOOP_MOTIF.len()])
        + levenshtein(
            T_LOOP_ANCHOR,
            &window[T_LOOP_ANCHOR_OFFSET..T_LOOP_ANCHOR_OFFSET + 1],
        );
    let acceptor_dist = levenshtein(ACCEPTOR_MOTIF, &window[window.len() - ACCEPTOR_MOTIF.len()..]);

    WindowScore {
        t_loop_dist,
        acceptor_dist,
    }
}

/// How the scan ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First acceptable window, `offset` bases left of the 3' end
    Accepted {
        offset: usize,
        result: ClassificationResult,
    },
    /// No window was acceptable; `result` holds the best one seen, if any
    Exhausted { result: ClassificationResult },
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Shift a 24-base window leftward from the 3' end and stop at the first acceptable one.
///
/// The returned result only ever records a window that strictly improves the
/// mismatch count, so on exhaustion it describes the earliest best window.
/// `sequence` must be ASCII; windows are byte offsets.
pub fn search(sequence: &str) -> SearchOutcome {
    debug_assert!(sequence.is_ascii(), "sequence must be ASCII");
    let bytes = sequence.as_bytes();
    let length = bytes.len();
    let mut result = ClassificationResult::new();

    let last_offset = match length.checked_sub(WINDOW_SIZE) {
        Some(last) => last,
        None => return SearchOutcome::Exhausted { result },
    };

    for offset in 0..=last_offset {
        let end = length - offset;
        let window = &bytes[end - WINDOW_SIZE..end];
        let score = score_window(window);
        let mismatch_count = score.mismatch_count();

        if mismatch_count < result.mismatch_count {
            result.length = length;
            result.mismatch_count = mismatch_count;
            result.t_loop_error = score.t_loop_error();
            result.acceptor_error = score.acceptor_error();
            result.sequence = sequence.to_string();
            result.window = text(window);
            result.t_loop_motif = text(&window[..T_LOOP_SPAN]);
            result.acceptor_motif = text(&window[WINDOW_SIZE - ACCEPTOR_MOTIF.len()..]);
        }

        if score.is_acceptable() {
            return SearchOutcome::Accepted { offset, result };
        }
    }

    SearchOutcome::Exhausted { result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trnasorter_core::types::NO_CANDIDATE;

    const PERFECT: &str = "GTTCAAAACAAAAAAAAAAAACCA";

    #[test]
    fn test_perfect_window_score() {
        let score = score_window(PERFECT.as_bytes());
        assert_eq!(score.mismatch_count(), 0);
        assert!(!score.t_loop_error());
        assert!(!score.acceptor_error());
    }

    #[test]
    fn test_single_substitution_score() {
        let score = score_window(b"GTACAAAACAAAAAAAAAAAACCA");
        assert_eq!(score.t_loop_dist, 1);
        assert_eq!(score.acceptor_dist, 0);
        assert!(score.is_acceptable());
    }

    #[test]
    fn test_anchor_counts_toward_t_loop() {
        let score = score_window(b"GTTCAAAAGAAAAAAAAAAAACCA");
        assert_eq!(score.t_loop_dist, 1);
        assert!(score.t_loop_error());
    }

    #[test]
    fn test_short_sequence_keeps_sentinel() {
        match search("GTTCAAAACCA") {
            SearchOutcome::Exhausted { result } => {
                assert_eq!(result.mismatch_count, NO_CANDIDATE);
                assert!(result.t_loop_error && result.acceptor_error);
                assert_eq!(result.length, 0);
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_window_at_3_prime_end() {
        let sequence = format!("TTTTTTTTTT{}", PERFECT);
        match search(&sequence) {
            SearchOutcome::Accepted { offset, result } => {
                assert_eq!(offset, 0);
                assert_eq!(result.mismatch_count, 0);
                assert_eq!(result.window, PERFECT);
                assert_eq!(result.t_loop_motif, "GTTCAAAAC");
                assert_eq!(result.acceptor_motif, "CCA");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_first_acceptable_window_wins_over_better_one() {
        // One-edit window at the 3' end, perfect window further left
        let sequence = format!("{}GTACAAAACAAAAAAAAAAAACCA", PERFECT);
        match search(&sequence) {
            SearchOutcome::Accepted { offset, result } => {
                assert_eq!(offset, 0);
                assert_eq!(result.mismatch_count, 1);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_window_found_with_trailer() {
        let sequence = format!("AAAA{}TG", PERFECT);
        match search(&sequence) {
            SearchOutcome::Accepted { offset, result } => {
                assert_eq!(offset, 2);
                assert_eq!(result.window, PERFECT);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sequence must be ASCII")]
    fn test_non_ascii_input_rejected_in_debug() {
        search("GTTCAAAACAAAAAAAAAAAACCAé");
    }

    #[test]
    fn test_exhausted_keeps_best_window() {
        let sequence = "A".repeat(30);
        match search(&sequence) {
            SearchOutcome::Exhausted { result } => {
                assert!(result.has_candidate());
                assert!(result.mismatch_count >= ACCEPT_THRESHOLD);
                assert_eq!(result.length, 30);
                assert_eq!(result.window.len(), WINDOW_SIZE);
                assert_eq!(result.sequence, sequence);
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }
}
