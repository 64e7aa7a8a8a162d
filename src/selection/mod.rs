//! Visual selection extraction
//!
//! Given a buffer snapshot and a pair of selection endpoints, produce the
//! exact text a modal editor considers selected, in any of the three
//! selection shapes:
//!
//! - **Character**: exact start/end positions, possibly spanning lines
//! - **Line**: whole lines, columns ignored
//! - **Block**: a rectangular visual column band applied uniformly to every
//!   line, aligned by display cells rather than bytes
//!
//! Extraction is a pure function of the snapshot and the endpoints: no I/O,
//! no shared state, no mutation of inputs. Multi-byte characters are never
//! split, and "nothing selected" is an empty string rather than an error.

pub mod cells;

use std::ops::Range;

use crate::primitives::display_width::{Direction, TextMetrics};
use cells::{byte_span, cell_span, char_span};

/// Shape of a visual selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exact start/end character positions, possibly spanning lines
    Character,
    /// Whole lines; columns are ignored
    Line,
    /// Rectangular visual column band applied uniformly to every line
    Block,
}

impl SelectionMode {
    /// Parse the raw mode tag a modal host reports.
    ///
    /// Accepts the vi-style tags (`"v"`, `"V"`, ctrl-V as `"\u{16}"`) as
    /// well as spelled-out names. An unknown tag means "nothing selected"
    /// and is reported as `None` rather than an error.
    pub fn from_host_tag(tag: &str) -> Option<Self> {
        match tag {
            "v" | "char" | "character" | "charwise" => Some(Self::Character),
            "V" | "line" | "linewise" => Some(Self::Line),
            "\u{16}" | "^V" | "block" | "blockwise" => Some(Self::Block),
            _ => None,
        }
    }
}

/// A selection endpoint: 0-indexed line and byte column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Extract the selected text from a buffer snapshot.
///
/// Endpoints may be given in either order; they are normalized to document
/// order (line, then column). Returns an empty string when the selection
/// covers nothing; that is a normal outcome, not an error.
pub fn extract<S, M>(
    lines: &[S],
    start: Position,
    end: Position,
    mode: SelectionMode,
    metrics: &M,
) -> String
where
    S: AsRef<str>,
    M: TextMetrics,
{
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    if lines.is_empty() || start.line >= lines.len() {
        return String::new();
    }
    let last_idx = end.line.min(lines.len() - 1);
    let slice: Vec<&str> = lines[start.line..=last_idx]
        .iter()
        .map(|s| s.as_ref())
        .collect();

    // The end column never exceeds the last sliced line
    let last = slice[slice.len() - 1];
    let end_col = end.col.min(last.len().saturating_sub(1));

    match mode {
        SelectionMode::Line => slice.join("\n"),
        SelectionMode::Character => extract_charwise(&slice, start.col, end_col, metrics),
        SelectionMode::Block => extract_blockwise(&slice, start.col, end_col, metrics),
    }
}

/// Extract using the host's raw mode tag; unknown tags select nothing.
pub fn extract_with_tag<S, M>(
    lines: &[S],
    start: Position,
    end: Position,
    tag: &str,
    metrics: &M,
) -> String
where
    S: AsRef<str>,
    M: TextMetrics,
{
    match SelectionMode::from_host_tag(tag) {
        Some(mode) => extract(lines, start, end, mode, metrics),
        None => String::new(),
    }
}

fn extract_charwise<M: TextMetrics>(
    slice: &[&str],
    start_col: usize,
    end_col: usize,
    metrics: &M,
) -> String {
    let first = slice[0];
    let last = slice[slice.len() - 1];

    if slice.len() == 1 {
        if first.is_empty() || start_col >= first.len() {
            return String::new();
        }
        let from = metrics.char_boundary(first, start_col, Direction::Backward);
        let to = char_span(first, end_col, metrics).end;
        return first[from..to].to_string();
    }

    let mut parts: Vec<&str> = Vec::with_capacity(slice.len());
    let from = metrics.char_boundary(first, start_col.min(first.len()), Direction::Backward);
    parts.push(&first[from..]);
    for line in &slice[1..slice.len() - 1] {
        parts.push(*line);
    }
    let to = if last.is_empty() {
        0
    } else {
        char_span(last, end_col, metrics).end
    };
    parts.push(&last[..to]);
    parts.join("\n")
}

fn extract_blockwise<M: TextMetrics>(
    slice: &[&str],
    start_col: usize,
    end_col: usize,
    metrics: &M,
) -> String {
    let first = slice[0];
    let last = slice[slice.len() - 1];

    // One visual band for every line: the union of the cells occupied by
    // the two endpoint characters. A wide endpoint character widens the
    // band for the whole block.
    let start_cells = cell_span(first, start_col, metrics);
    let end_cells = cell_span(last, end_col, metrics);
    let band: Range<usize> = start_cells.start.min(end_cells.start)
        ..start_cells.end.max(end_cells.end);

    let parts: Vec<&str> = slice
        .iter()
        .map(|line| clip_to_band(line, &band, metrics))
        .collect();
    parts.join("\n")
}

/// The byte substring of `line` covered by the cell band, expanded to whole
/// characters. Lines narrower than the band start fall back to their full
/// content.
fn clip_to_band<'a, M: TextMetrics>(line: &'a str, band: &Range<usize>, metrics: &M) -> &'a str {
    if line.is_empty() || band.is_empty() {
        return "";
    }
    let from = byte_span(line, band.start, metrics).start;
    let to = byte_span(line, band.end - 1, metrics).end;
    if from >= to {
        return "";
    }
    &line[from..to]
}
