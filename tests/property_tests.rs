// Property-based tests using proptest
// These tests generate random buffers mixing character widths and verify
// the extraction invariants hold for every endpoint combination.

use proptest::prelude::*;

use tandem::selection::cells::{byte_span, cell_span, char_span};
use tandem::{extract, Position, SelectionMode, UnicodeMetrics};

/// Characters mixing display widths: ASCII (1 cell), CJK (2 cells),
/// Latin-1 letters (1 cell, single byte or two bytes)
fn mixed_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => proptest::char::range('a', 'z'),
        2 => proptest::char::range('\u{4e00}', '\u{4e2f}'),
        1 => proptest::char::range('À', 'Ö'),
        1 => Just('日'),
        1 => Just(' '),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(mixed_char(), 0..12).prop_map(|cs| cs.into_iter().collect())
}

fn buffer_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(line_strategy(), 1..6)
}

fn mode_strategy() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::Character),
        Just(SelectionMode::Line),
        Just(SelectionMode::Block),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property test: width -> byte -> width lands back on the same
    /// character's cells, and that byte span is exactly the containing
    /// character's span
    #[test]
    fn prop_conversion_round_trip(line in line_strategy(), byte in 0usize..48) {
        let metrics = UnicodeMetrics;
        prop_assume!(byte < line.len());

        let cells = cell_span(&line, byte, &metrics);
        prop_assume!(!cells.is_empty());

        let bytes = byte_span(&line, cells.start, &metrics);
        prop_assert_eq!(bytes.clone(), char_span(&line, byte, &metrics));
        prop_assert_eq!(cell_span(&line, bytes.start, &metrics), cells);
    }

    /// Property test: byte spans never split a character
    #[test]
    fn prop_byte_spans_char_aligned(line in line_strategy(), cell in 0usize..32) {
        let metrics = UnicodeMetrics;
        let span = byte_span(&line, cell, &metrics);
        prop_assert!(line.is_char_boundary(span.start));
        prop_assert!(line.is_char_boundary(span.end));
        prop_assert!(span.end <= line.len());
    }

    /// Property test: cell spans never split a character's cells
    #[test]
    fn prop_cell_spans_cover_whole_chars(line in line_strategy(), byte in 0usize..48) {
        let metrics = UnicodeMetrics;
        prop_assume!(byte < line.len());
        let cells = cell_span(&line, byte, &metrics);
        prop_assume!(!cells.is_empty());
        // the byte span at either edge cell is the same character
        prop_assert_eq!(
            byte_span(&line, cells.start, &metrics),
            byte_span(&line, cells.end - 1, &metrics)
        );
    }

    /// Property test: swapped endpoints extract identical text in every mode
    #[test]
    fn prop_order_independent(
        buffer in buffer_strategy(),
        sl in 0usize..6, sc in 0usize..24,
        el in 0usize..6, ec in 0usize..24,
        mode in mode_strategy(),
    ) {
        let metrics = UnicodeMetrics;
        let a = Position::new(sl, sc);
        let b = Position::new(el, ec);
        prop_assert_eq!(
            extract(&buffer, a, b, mode, &metrics),
            extract(&buffer, b, a, mode, &metrics)
        );
    }

    /// Property test: line mode ignores columns entirely
    #[test]
    fn prop_line_mode_ignores_columns(
        buffer in buffer_strategy(),
        sl in 0usize..6, el in 0usize..6,
        c1 in 0usize..32, c2 in 0usize..32,
    ) {
        let metrics = UnicodeMetrics;
        let base = extract(
            &buffer,
            Position::new(sl, 0),
            Position::new(el, 0),
            SelectionMode::Line,
            &metrics,
        );
        let shifted = extract(
            &buffer,
            Position::new(sl, c1),
            Position::new(el, c2),
            SelectionMode::Line,
            &metrics,
        );
        prop_assert_eq!(base, shifted);
    }

    /// Property test: every extracted line is a contiguous, char-aligned
    /// slice of its source line (character and block modes)
    #[test]
    fn prop_extracted_lines_are_source_slices(
        buffer in buffer_strategy(),
        sl in 0usize..6, sc in 0usize..24,
        el in 0usize..6, ec in 0usize..24,
        block in proptest::bool::ANY,
    ) {
        let metrics = UnicodeMetrics;
        let mode = if block { SelectionMode::Block } else { SelectionMode::Character };
        let a = Position::new(sl, sc);
        let b = Position::new(el, ec);
        let text = extract(&buffer, a, b, mode, &metrics);
        prop_assume!(!text.is_empty());

        let first_line = sl.min(el).min(buffer.len() - 1);
        for (i, part) in text.split('\n').enumerate() {
            let source = &buffer[first_line + i];
            prop_assert!(
                source.contains(part),
                "line {:?} not a slice of source {:?}",
                part,
                source
            );
        }
    }

    /// Property test: extraction never panics anywhere in the input space
    #[test]
    fn prop_extract_total(
        buffer in proptest::collection::vec(line_strategy(), 0..5),
        sl in 0usize..8, sc in 0usize..48,
        el in 0usize..8, ec in 0usize..48,
        mode in mode_strategy(),
    ) {
        let metrics = UnicodeMetrics;
        let _ = extract(&buffer, Position::new(sl, sc), Position::new(el, ec), mode, &metrics);
    }
}
