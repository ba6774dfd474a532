//! Per-sequence classification record

use serde::{Deserialize, Serialize};

/// Mismatch count of a result that has not seen any candidate window yet
pub const NO_CANDIDATE: usize = 100;

/// Best candidate window of one sequence plus the attributes derived once it passes.
///
/// `mismatch_count`, `window`, `t_loop_motif`, `acceptor_motif`, `t_loop_error` and
/// `acceptor_error` always describe the same window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub length: usize,
    pub mismatch_count: usize,
    pub t_loop_error: bool,
    pub acceptor_error: bool,
    pub sequence: String,
    pub window: String,
    pub t_loop_motif: String,
    pub acceptor_motif: String,
    pub is_full_length: bool,
    pub trailer: String,
    pub trailer_length: usize,
    pub anticodon: String,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            length: 0,
            mismatch_count: NO_CANDIDATE,
            t_loop_error: true,
            acceptor_error: true,
            sequence: String::new(),
            window: String::new(),
            t_loop_motif: String::new(),
            acceptor_motif: String::new(),
            is_full_length: false,
            trailer: String::new(),
            trailer_length: 0,
            anticodon: String::new(),
        }
    }
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the search has recorded at least one window
    pub fn has_candidate(&self) -> bool {
        self.mismatch_count != NO_CANDIDATE
    }

    pub fn has_trailer(&self) -> bool {
        self.trailer_length > 0
    }

    /// Trailer as stored: `None` when nothing was trimmed
    pub fn stored_trailer(&self) -> Option<&str> {
        if self.trailer_length == 0 {
            None
        } else {
            Some(&self.trailer)
        }
    }

    /// Anticodon as stored: `None` when no candidate was found
    pub fn stored_anticodon(&self) -> Option<&str> {
        if self.anticodon.is_empty() {
            None
        } else {
            Some(&self.anticodon)
        }
    }

    /// Approximate heap plus inline footprint, used for batch accounting
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.sequence.capacity()
            + self.window.capacity()
            + self.t_loop_motif.capacity()
            + self.acceptor_motif.capacity()
            + self.trailer.capacity()
            + self.anticodon.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let result = ClassificationResult::new();
        assert_eq!(result.mismatch_count, NO_CANDIDATE);
        assert!(result.t_loop_error);
        assert!(result.acceptor_error);
        assert!(!result.is_full_length);
        assert!(!result.has_candidate());
        assert!(!result.has_trailer());
    }

    #[test]
    fn test_stored_fields_null_when_empty() {
        let mut result = ClassificationResult::new();
        assert_eq!(result.stored_trailer(), None);
        assert_eq!(result.stored_anticodon(), None);

        result.trailer = "AG".to_string();
        result.trailer_length = 2;
        result.anticodon = "GCA".to_string();
        assert_eq!(result.stored_trailer(), Some("AG"));
        assert_eq!(result.stored_anticodon(), Some("GCA"));
    }

    #[test]
    fn test_estimated_size_grows_with_content() {
        let empty = ClassificationResult::new();
        let mut filled = ClassificationResult::new();
        filled.sequence = "A".repeat(80);

        assert!(filled.estimated_size() >= empty.estimated_size() + 80);
    }
}
