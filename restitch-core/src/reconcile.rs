//! Partition reconstruction from segments and their pairwise overlaps

use crate::overlap::scan;
use crate::piece::Piece;

/// Re-partitions `segments` into unique and shared pieces.
///
/// Segments are processed left to right in a single pass. The text a
/// segment shares with its predecessor is emitted exactly once, as an
/// Overlap piece placed between the two segments' Unique remainders.
/// Each segment then contributes its remainder with the leading overlap
/// (toward the previous segment) and trailing overlap (toward the next)
/// removed, as a Unique piece. Empty remainders are still emitted so that
/// a fully consumed segment stays distinguishable from a skipped one;
/// zero-length overlaps produce no Overlap piece at all.
///
/// Total over arbitrary input, including empty sequences and segments with
/// no relationship to each other.
pub fn reconcile<S: AsRef<str>>(segments: &[S]) -> Vec<Piece> {
    let overlaps = scan(segments);
    let mut pieces = Vec::with_capacity(segments.len() + overlaps.len());

    for (index, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();

        // Single emission point for the text shared with the predecessor.
        if index > 0 && !overlaps[index - 1].is_none() {
            pieces.push(Piece::overlap(overlaps[index - 1].text.clone()));
        }

        // Overlap text is a literal prefix/suffix of this segment, so its
        // byte length is a valid trim amount on either side.
        let left_trim = if index > 0 {
            overlaps[index - 1].text.len()
        } else {
            0
        };
        let right_trim = if index + 1 < segments.len() {
            overlaps[index].text.len()
        } else {
            0
        };

        // The two trims can cross when a segment is shorter than its
        // neighbors' combined overlaps; clamp to an empty remainder.
        let end = segment.len().saturating_sub(right_trim);
        let start = left_trim.min(end);
        pieces.push(Piece::unique(&segment[start..end]));
    }

    pieces
}

/// Concatenates piece texts in order, yielding the de-overlapped document.
pub fn merged_text(pieces: &[Piece]) -> String {
    pieces.iter().map(|piece| piece.text.as_str()).collect()
}
