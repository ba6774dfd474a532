use std::fmt;

/// One input read: normalised identifier plus uppercase sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// Build a record from a raw FASTA header and residue bytes.
    ///
    /// The header is cut at the first whitespace and then at the first `|`.
    /// Residues are uppercased; bytes outside ASCII become `N`.
    pub fn from_raw(header: &[u8], residues: &[u8]) -> Self {
        Self {
            id: normalize_identifier(&String::from_utf8_lossy(header)),
            sequence: residues
                .iter()
                .map(|&b| if b.is_ascii() { b.to_ascii_uppercase() as char } else { 'N' })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.id, self.sequence)
    }
}

/// Stored identifier: first whitespace-delimited token, up to the first `|`
pub fn normalize_identifier(header: &str) -> String {
    header
        .split_whitespace()
        .next()
        .unwrap_or("")
        .split('|')
        .next()
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("read_1|count:12|sample:a"), "read_1");
        assert_eq!(normalize_identifier("read_2 some description"), "read_2");
        assert_eq!(normalize_identifier("read_3|x description|y"), "read_3");
        assert_eq!(normalize_identifier("plain"), "plain");
        assert_eq!(normalize_identifier(""), "");
    }

    #[test]
    fn test_from_raw_uppercases() {
        let record = SequenceRecord::from_raw(b"r1|meta", b"acgtN");
        assert_eq!(record.id, "r1");
        assert_eq!(record.sequence, "ACGTN");
        assert_eq!(record.len(), 5);
    }

    #[test]
    fn test_from_raw_replaces_non_ascii() {
        let record = SequenceRecord::from_raw(b"r2", &[b'a', 0xC3, 0xA9, b'g']);
        assert_eq!(record.sequence, "ANNG");
    }

    #[test]
    fn test_display() {
        let record = SequenceRecord::new("r1", "ACGT");
        assert_eq!(record.to_string(), ">r1\nACGT");
    }
}
