use crate::sequence::SequenceRecord;
use needletail::errors::{ParseError, ParseErrorKind};
use needletail::{parse_fastx_file, parse_fastx_reader, FastxReader};
use std::collections::VecDeque;
use std::io;
use std::path::Path;
use trnasorter_core::{SorterError, SorterResult};

/// Pull-style supplier of input reads
pub trait SequenceSource {
    /// Next record, `None` once the input is exhausted
    fn next_record(&mut self) -> Option<SorterResult<SequenceRecord>>;
}

/// Streaming FASTA/FASTQ reader (plain or gzip), one record at a time.
pub struct FastaSource<'a> {
    reader: Option<Box<dyn FastxReader + 'a>>,
    origin: String,
    records_read: usize,
}

fn parse_error(origin: &str, err: ParseError) -> SorterError {
    match err.kind {
        ParseErrorKind::Io => SorterError::Io(io::Error::new(
            io::ErrorKind::Other,
            format!("{}: {}", origin, err),
        )),
        _ => SorterError::Parse(format!("{}: {}", origin, err)),
    }
}

fn open_reader<'a>(
    opened: Result<Box<dyn FastxReader + 'a>, ParseError>,
    origin: &str,
) -> SorterResult<Option<Box<dyn FastxReader + 'a>>> {
    match opened {
        Ok(reader) => Ok(Some(reader)),
        // An empty input is an empty stream, not a malformed one
        Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => Ok(None),
        Err(e) => Err(parse_error(origin, e)),
    }
}

impl FastaSource<'static> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> SorterResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        if !path.exists() {
            return Err(SorterError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("input file not found: {}", origin),
            )));
        }
        let reader = open_reader(parse_fastx_file(path), &origin)?;
        Ok(Self {
            reader,
            origin,
            records_read: 0,
        })
    }
}

impl<'a> FastaSource<'a> {
    pub fn from_reader(reader: impl io::Read + Send + 'a) -> SorterResult<Self> {
        let origin = "<reader>".to_string();
        let reader = open_reader(parse_fastx_reader(reader), &origin)?;
        Ok(Self {
            reader,
            origin,
            records_read: 0,
        })
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

impl SequenceSource for FastaSource<'_> {
    fn next_record(&mut self) -> Option<SorterResult<SequenceRecord>> {
        let reader = self.reader.as_mut()?;
        match reader.next()? {
            Ok(record) => {
                self.records_read += 1;
                Some(Ok(SequenceRecord::from_raw(record.id(), &record.seq())))
            }
            Err(e) => Some(Err(parse_error(&self.origin, e))),
        }
    }
}

impl Iterator for FastaSource<'_> {
    type Item = SorterResult<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Records held in memory, handed out in insertion order
#[derive(Debug, Default)]
pub struct MemorySource {
    records: VecDeque<SequenceRecord>,
}

impl MemorySource {
    pub fn new(records: impl IntoIterator<Item = SequenceRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl SequenceSource for MemorySource {
    fn next_record(&mut self) -> Option<SorterResult<SequenceRecord>> {
        self.records.pop_front().map(Ok)
    }
}
