//! Sorting statistics types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns in a persisted statistics row
pub const STATS_COLUMNS: usize = 20;

/// Why a sequence was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// T-loop motif diverged, acceptor matched
    TLoop,
    /// Acceptor motif diverged, T-loop matched
    Acceptor,
    /// Both motifs diverged in every window
    Both,
    /// Shorter than one window
    TooShort,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::TLoop => write!(f, "t-loop diverged"),
            RejectionReason::Acceptor => write!(f, "acceptor diverged"),
            RejectionReason::Both => write!(f, "both motifs diverged"),
            RejectionReason::TooShort => write!(f, "too short"),
        }
    }
}

/// Window offset of the first diverging T-loop base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TLoopPosition {
    At0,
    At1,
    At2,
    At3,
    At8,
}

/// Offset from the window end of the first diverging acceptor base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcceptorPosition {
    Neg3,
    Neg2,
    Neg1,
}

/// Where an accepted window deviates from the reference motifs.
///
/// T-loop divergence shadows acceptor divergence. The position is `None` only
/// when no checked base differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divergence {
    None,
    TLoop(Option<TLoopPosition>),
    Acceptor(Option<AcceptorPosition>),
}

/// Run-wide counters. Every counter only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterStats {
    pub total_seqs: u64,
    pub total_rejected: u64,
    pub total_passed: u64,
    pub num_trailer: u64,
    pub total_full_length: u64,

    pub no_divergence: u64,
    pub t_loop_divergence: u64,
    pub div_at_0: u64,
    pub div_at_1: u64,
    pub div_at_2: u64,
    pub div_at_3: u64,
    pub div_at_8: u64,
    pub acceptor_divergence: u64,
    pub div_at_neg_1: u64,
    pub div_at_neg_2: u64,
    pub div_at_neg_3: u64,

    pub t_loop_seq_rejected: u64,
    pub acceptor_seq_rejected: u64,
    pub both_rejected: u64,
    pub short_rejected: u64,
}

impl SorterStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_seen(&mut self) {
        self.total_seqs += 1;
    }

    pub fn record_pass(&mut self) {
        self.total_passed += 1;
    }

    pub fn record_rejection(&mut self, reason: RejectionReason) {
        match reason {
            RejectionReason::TLoop => self.t_loop_seq_rejected += 1,
            RejectionReason::Acceptor => self.acceptor_seq_rejected += 1,
            RejectionReason::Both => self.both_rejected += 1,
            RejectionReason::TooShort => self.short_rejected += 1,
        }
        self.total_rejected += 1;
    }

    pub fn record_divergence(&mut self, divergence: Divergence) {
        match divergence {
            Divergence::None => self.no_divergence += 1,
            Divergence::TLoop(position) => {
                self.t_loop_divergence += 1;
                match position {
                    Some(TLoopPosition::At0) => self.div_at_0 += 1,
                    Some(TLoopPosition::At1) => self.div_at_1 += 1,
                    Some(TLoopPosition::At2) => self.div_at_2 += 1,
                    Some(TLoopPosition::At3) => self.div_at_3 += 1,
                    Some(TLoopPosition::At8) => self.div_at_8 += 1,
                    None => {}
                }
            }
            Divergence::Acceptor(position) => {
                self.acceptor_divergence += 1;
                match position {
                    Some(AcceptorPosition::Neg3) => self.div_at_neg_3 += 1,
                    Some(AcceptorPosition::Neg2) => self.div_at_neg_2 += 1,
                    Some(AcceptorPosition::Neg1) => self.div_at_neg_1 += 1,
                    None => {}
                }
            }
        }
    }

    pub fn record_trailer(&mut self) {
        self.num_trailer += 1;
    }

    pub fn record_full_length(&mut self) {
        self.total_full_length += 1;
    }

    /// Sum of the four rejection-reason counters
    pub fn rejections_by_reason(&self) -> u64 {
        self.t_loop_seq_rejected
            + self.acceptor_seq_rejected
            + self.both_rejected
            + self.short_rejected
    }

    /// Fold counters gathered elsewhere (e.g. another worker) into this one
    pub fn merge(&mut self, other: &SorterStats) {
        let mut row = self.as_row();
        for (mine, theirs) in row.iter_mut().zip(other.as_row()) {
            *mine += theirs;
        }
        *self = Self::from_row(row);
    }

    /// Counters in persisted column order
    pub fn as_row(&self) -> [u64; STATS_COLUMNS] {
        [
            self.total_seqs,
            self.total_rejected,
            self.total_passed,
            self.num_trailer,
            self.total_full_length,
            self.no_divergence,
            self.t_loop_divergence,
            self.div_at_0,
            self.div_at_1,
            self.div_at_2,
            self.div_at_3,
            self.div_at_8,
            self.acceptor_divergence,
            self.div_at_neg_1,
            self.div_at_neg_2,
            self.div_at_neg_3,
            self.t_loop_seq_rejected,
            self.acceptor_seq_rejected,
            self.both_rejected,
            self.short_rejected,
        ]
    }

    pub fn from_row(row: [u64; STATS_COLUMNS]) -> Self {
        Self {
            total_seqs: row[0],
            total_rejected: row[1],
            total_passed: row[2],
            num_trailer: row[3],
            total_full_length: row[4],
            no_divergence: row[5],
            t_loop_divergence: row[6],
            div_at_0: row[7],
            div_at_1: row[8],
            div_at_2: row[9],
            div_at_3: row[10],
            div_at_8: row[11],
            acceptor_divergence: row[12],
            div_at_neg_1: row[13],
            div_at_neg_2: row[14],
            div_at_neg_3: row[15],
            t_loop_seq_rejected: row[16],
            acceptor_seq_rejected: row[17],
            both_rejected: row[18],
            short_rejected: row[19],
        }
    }
}

const REPORT_PADDING: usize = 55;

fn format_line(f: &mut fmt::Formatter<'_>, label: &str, value: u64, level: usize) -> fmt::Result {
    let (indent, used) = match level {
        1 => ("", 0),
        2 => ("\t", 4),
        _ => ("\t\t", 12),
    };
    let pad = REPORT_PADDING.saturating_sub(used + label.len());
    writeln!(f, "{}{} {}\t{}", indent, label, " ".repeat(pad), value)
}

/// Plain-text report, as written to `<sample>_SORTER_STATS.txt`
impl fmt::Display for SorterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_line(f, "Total seqs", self.total_seqs, 1)?;
        format_line(f, "Total full-length", self.total_full_length, 1)?;
        format_line(f, "With trailer", self.num_trailer, 1)?;
        format_line(f, "Total passed", self.total_passed, 1)?;

        format_line(f, "No divergence", self.no_divergence, 2)?;
        format_line(f, "T-loop divergence", self.t_loop_divergence, 2)?;
        format_line(f, "Divergence at pos 0", self.div_at_0, 3)?;
        format_line(f, "Divergence at pos 1", self.div_at_1, 3)?;
        format_line(f, "Divergence at pos 2", self.div_at_2, 3)?;
        format_line(f, "Divergence at pos 3", self.div_at_3, 3)?;
        format_line(f, "Divergence at pos 8", self.div_at_8, 3)?;
        format_line(f, "Acceptor divergence", self.acceptor_divergence, 2)?;
        format_line(f, "Divergence at pos -3", self.div_at_neg_3, 3)?;
        format_line(f, "Divergence at pos -2", self.div_at_neg_2, 3)?;
        format_line(f, "Divergence at pos -1", self.div_at_neg_1, 3)?;

        format_line(f, "Total failed", self.total_rejected, 1)?;
        format_line(f, "T-loop seq rejected", self.t_loop_seq_rejected, 2)?;
        format_line(f, "Acceptor seq rejected", self.acceptor_seq_rejected, 2)?;
        format_line(f, "Both rejected", self.both_rejected, 2)?;
        format_line(f, "Short rejected", self.short_rejected, 2)
    }
}
