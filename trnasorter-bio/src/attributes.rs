//! Attributes derived for an accepted sequence: divergence site, trailer,
//! full-length status and anticodon.
//!
//! Every step takes the result by value and hands back the updated one, so each can be
//! exercised on its own; [`derive`] chains them in pass order and records the statistics.

use crate::anticodon::AnticodonExtractor;
use tracing::trace;
use trnasorter_core::{
    AcceptorPosition, ClassificationResult, Divergence, SorterStats, TLoopPosition,
};

/// Length bounds (exclusive) of a full-length body
const FULL_LENGTH_MIN: usize = 70;
const FULL_LENGTH_MAX: usize = 100;

const T_LOOP_CHECKS: [(usize, u8, TLoopPosition); 5] = [
    (0, b'G', TLoopPosition::At0),
    (1, b'T', TLoopPosition::At1),
    (2, b'T', TLoopPosition::At2),
    (3, b'C', TLoopPosition::At3),
    (8, b'C', TLoopPosition::At8),
];

// Offsets from the window end
const ACCEPTOR_CHECKS: [(usize, u8, AcceptorPosition); 3] = [
    (3, b'C', AcceptorPosition::Neg3),
    (2, b'C', AcceptorPosition::Neg2),
    (1, b'A', AcceptorPosition::Neg1),
];

/// Locate the first deviating base of the accepted window. First mismatch wins.
pub fn divergence(result: &ClassificationResult) -> Divergence {
    let window = result.window.as_bytes();

    if result.t_loop_error {
        let position = T_LOOP_CHECKS
            .iter()
            .find(|(offset, expected, _)| window.get(*offset) != Some(expected))
            .map(|(_, _, position)| *position);
        Divergence::TLoop(position)
    } else if result.acceptor_error {
        let position = ACCEPTOR_CHECKS
            .iter()
            .find(|(from_end, expected, _)| {
                window
                    .len()
                    .checked_sub(*from_end)
                    .and_then(|i| window.get(i))
                    != Some(expected)
            })
            .map(|(_, _, position)| *position);
        Divergence::Acceptor(position)
    } else {
        Divergence::None
    }
}

/// Move the last `offset` bases into the trailer; the rest stays the sequence.
pub fn split_trailer(mut result: ClassificationResult, offset: usize) -> ClassificationResult {
    let bytes = result.sequence.as_bytes();
    let keep = bytes.len().saturating_sub(offset);

    let body = String::from_utf8_lossy(&bytes[..keep]).into_owned();
    let trailer = String::from_utf8_lossy(&bytes[keep..]).into_owned();

    result.length = body.len();
    result.trailer_length = trailer.len();
    result.sequence = body;
    result.trailer = trailer;
    result
}

/// True for a trimmed body of 71..=99 bases with T at position 7 and A at 13
pub fn is_full_length(sequence: &str) -> bool {
    let bytes = sequence.as_bytes();
    bytes.len() > FULL_LENGTH_MIN
        && bytes.len() < FULL_LENGTH_MAX
        && bytes.get(7) == Some(&b'T')
        && bytes.get(13) == Some(&b'A')
}

pub fn mark_full_length(mut result: ClassificationResult) -> ClassificationResult {
    result.is_full_length = is_full_length(&result.sequence);
    result
}

/// Candidates from the extractor joined with `,`; empty when there are none
pub fn assign_anticodon<E: AnticodonExtractor + ?Sized>(
    mut result: ClassificationResult,
    extractor: &E,
) -> ClassificationResult {
    let candidates = if result.is_full_length {
        extractor.extract_full_length(&result.sequence)
    } else {
        extractor.extract_not_full_length(&result.sequence)
    };
    result.anticodon = candidates.join(",");
    result
}

/// Pass handling for a window accepted at `offset` from the 3' end
pub fn derive<E: AnticodonExtractor + ?Sized>(
    result: ClassificationResult,
    offset: usize,
    extractor: &E,
    stats: &mut SorterStats,
) -> ClassificationResult {
    stats.record_pass();
    stats.record_divergence(divergence(&result));

    let result = split_trailer(result, offset);
    if result.has_trailer() {
        stats.record_trailer();
    }

    let result = mark_full_length(result);
    if result.is_full_length {
        stats.record_full_length();
    }

    let result = assign_anticodon(result, extractor);
    trace!(
        length = result.length,
        trailer = result.trailer_length,
        full_length = result.is_full_length,
        anticodon = %result.anticodon,
        "derived attributes"
    );
    result
}
