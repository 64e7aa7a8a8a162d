//! Width-index / byte-index conversions for block selections
//!
//! Block selections are defined by visual column alignment, so the extractor
//! maps byte columns to display-cell spans and back on lines whose
//! bytes-per-cell differ. Spans are half-open and always cover whole
//! characters: a cell landing inside a double-width character expands to the
//! character's full span.
//!
//! Out-of-range requests fall back to the whole line. Hosts report
//! end-of-line and past-end columns for selections that reach the line end;
//! treating those as "the rest of the line" matches what a modal editor
//! shows as selected.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::primitives::display_width::{Direction, TextMetrics};

/// Cells occupied by the character containing `byte`.
///
/// Falls back to the line's full cell range when `byte` is not inside the
/// line (including any request against an empty line).
pub fn cell_span<M: TextMetrics>(line: &str, byte: usize, metrics: &M) -> Range<usize> {
    if byte < line.len() {
        let mut cell = 0;
        for (start, g) in line.grapheme_indices(true) {
            let width = metrics.width_of(g);
            if byte < start + g.len() {
                return cell..cell + width;
            }
            cell += width;
        }
    }
    0..metrics.width_of(line)
}

/// Bytes of the character occupying `cell`.
///
/// Walks the line accumulating display width until the running total passes
/// the requested cell. Falls back to the line's full byte range when `cell`
/// is at or past the line's display width.
pub fn byte_span<M: TextMetrics>(line: &str, cell: usize, metrics: &M) -> Range<usize> {
    let mut col = 0;
    for (start, g) in line.grapheme_indices(true) {
        let width = metrics.width_of(g);
        if width > 0 && cell < col + width {
            return start..start + g.len();
        }
        col += width;
    }
    0..line.len()
}

/// Bytes of the character containing `byte`, snapped to boundaries both
/// ways. Falls back to the line's full byte range when out of range.
pub fn char_span<M: TextMetrics>(line: &str, byte: usize, metrics: &M) -> Range<usize> {
    if byte >= line.len() {
        return 0..line.len();
    }
    let start = metrics.char_boundary(line, byte, Direction::Backward);
    let end = metrics.char_boundary(line, byte + 1, Direction::Forward);
    start..end
}
