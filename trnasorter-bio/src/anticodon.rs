//! Anticodon extraction from classified tRNA bodies

/// Supplies candidate anticodons for a trimmed tRNA body.
///
/// Both calls are pure functions of the sequence; an empty list means no candidate.
pub trait AnticodonExtractor {
    /// Body carries a complete 5' end, so positions can be read directly
    fn extract_full_length(&self, sequence: &str) -> Vec<String>;

    /// Body may be 5'-truncated; positions are inferred from the 3' end
    fn extract_not_full_length(&self, sequence: &str) -> Vec<String>;
}

/// Canonical body length, CCA included
const CANONICAL_LENGTH: usize = 76;
/// 0-based start of the anticodon in the canonical body (positions 34-36)
const ANTICODON_START: usize = 33;
const CODON: usize = 3;

/// Reads the anticodon from canonical tRNA numbering.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalExtractor;

impl PositionalExtractor {
    pub fn new() -> Self {
        Self
    }

    fn triplet(sequence: &[u8], start: usize) -> Option<String> {
        let codon = sequence.get(start..start + CODON)?;
        if codon.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')) {
            Some(String::from_utf8_lossy(codon).into_owned())
        } else {
            None
        }
    }
}

impl AnticodonExtractor for PositionalExtractor {
    fn extract_full_length(&self, sequence: &str) -> Vec<String> {
        Self::triplet(sequence.as_bytes(), ANTICODON_START)
            .into_iter()
            .collect()
    }

    fn extract_not_full_length(&self, sequence: &str) -> Vec<String> {
        let bytes = sequence.as_bytes();
        let from_end = CANONICAL_LENGTH - ANTICODON_START;

        let mut candidates: Vec<String> = Vec::new();
        for shift in [0isize, -1, 1] {
            let start = bytes.len() as isize - from_end as isize + shift;
            if start < 0 {
                continue;
            }
            if let Some(codon) = Self::triplet(bytes, start as usize) {
                if !candidates.contains(&codon) {
                    candidates.push(codon);
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 76-base body with anticodon GCA at positions 34-36
    fn canonical_body() -> String {
        let mut body = String::new();
        body.push_str(&"A".repeat(33));
        body.push_str("GCA");
        body.push_str(&"T".repeat(37));
        body.push_str("CCA");
        assert_eq!(body.len(), 76);
        body
    }

    #[test]
    fn test_full_length_reads_positions_34_to_36() {
        let extractor = PositionalExtractor::new();
        assert_eq!(extractor.extract_full_length(&canonical_body()), vec!["GCA"]);
    }

    #[test]
    fn test_full_length_too_short() {
        let extractor = PositionalExtractor::new();
        assert!(extractor.extract_full_length("ACGTACGT").is_empty());
    }

    #[test]
    fn test_full_length_skips_ambiguous() {
        let mut body = canonical_body();
        body.replace_range(34..35, "N");
        let extractor = PositionalExtractor::new();
        assert!(extractor.extract_full_length(&body).is_empty());
    }

    #[test]
    fn test_not_full_length_anchors_on_3_prime_end() {
        // Drop 10 bases from the 5' end; the 3' anchor still finds GCA first
        let body = canonical_body()[10..].to_string();
        let extractor = PositionalExtractor::new();
        let candidates = extractor.extract_not_full_length(&body);

        assert_eq!(candidates[0], "GCA");
        assert_eq!(candidates, vec!["GCA", "AGC", "CAT"]);
    }

    #[test]
    fn test_not_full_length_deduplicates() {
        let body = "A".repeat(60);
        let extractor = PositionalExtractor::new();
        assert_eq!(extractor.extract_not_full_length(&body), vec!["AAA"]);
    }

    #[test]
    fn test_not_full_length_short_body() {
        let extractor = PositionalExtractor::new();
        assert!(extractor.extract_not_full_length("GTTCAAATCCA").is_empty());
    }
}
