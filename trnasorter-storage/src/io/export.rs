/// Tab-separated tables of stored records, split by trailer presence
use crate::core::RecordRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;
use trnasorter_core::{SorterError, SorterResult};

pub const EXPORT_HEADER: [&str; 9] = [
    "ID",
    "Seq",
    "3-trailer",
    "t-loop",
    "acceptor",
    "full-length",
    "Seq_length",
    "Trailer_length",
    "Anticodon",
];

/// Placeholder written in the 3-trailer column of rows without one
pub const NO_TRAILER_MARK: &str = "_";

const PAD: &str = "-";

/// Row counts of one export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub no_trailer_rows: usize,
    pub trailer_rows: usize,
}

impl ExportSummary {
    pub fn total(&self) -> usize {
        self.no_trailer_rows + self.trailer_rows
    }
}

fn csv_error(err: csv::Error) -> SorterError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => SorterError::Io(io),
            other => SorterError::Serialization(format!("{:?}", other)),
        }
    } else {
        SorterError::Serialization(err.to_string())
    }
}

/// Width the Seq column is padded to
fn seq_width(rows: &[&RecordRow]) -> usize {
    rows.iter()
        .map(|row| row.seq.len())
        .max()
        .unwrap_or(0)
        .max(EXPORT_HEADER[1].len())
}

/// Write `rows` as one table, Seq left-padded with `-` to `width`
pub fn write_table<W: Write>(writer: W, rows: &[&RecordRow], width: usize) -> SorterResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    writer.write_record(EXPORT_HEADER).map_err(csv_error)?;
    for row in rows {
        let mut seq = PAD.repeat(width.saturating_sub(row.seq.len()));
        seq.push_str(&row.seq);
        let seq_length = row.seq_length.to_string();
        let trailer_length = row.trailer_length.to_string();
        writer
            .write_record([
                row.id.as_str(),
                seq.as_str(),
                row.trailer.as_deref().unwrap_or(NO_TRAILER_MARK),
                row.t_loop.as_str(),
                row.acceptor.as_str(),
                row.full_length.as_str(),
                seq_length.as_str(),
                trailer_length.as_str(),
                row.anticodon.as_deref().unwrap_or(""),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Split `rows` into the no-trailer and trailer tables.
///
/// Both tables share one Seq width so their 3' ends line up. With
/// `length_sort` rows are ordered by sequence length, longest first, ties
/// keeping store order.
pub fn export_tables<P: AsRef<Path>, Q: AsRef<Path>>(
    rows: &[RecordRow],
    no_trailer_path: P,
    trailer_path: Q,
    length_sort: bool,
) -> SorterResult<ExportSummary> {
    let mut ordered: Vec<&RecordRow> = rows.iter().collect();
    if length_sort {
        ordered.sort_by(|a, b| b.seq.len().cmp(&a.seq.len()));
    }
    let width = seq_width(&ordered);

    let (trailer, no_trailer): (Vec<&RecordRow>, Vec<&RecordRow>) =
        ordered.into_iter().partition(|row| row.has_trailer());

    write_table(File::create(no_trailer_path.as_ref())?, &no_trailer, width)?;
    write_table(File::create(trailer_path.as_ref())?, &trailer, width)?;

    let summary = ExportSummary {
        no_trailer_rows: no_trailer.len(),
        trailer_rows: trailer.len(),
    };
    info!(
        "Exported {} rows without trailer to {} and {} with trailer to {}",
        summary.no_trailer_rows,
        no_trailer_path.as_ref().display(),
        summary.trailer_rows,
        trailer_path.as_ref().display()
    );
    Ok(summary)
}
