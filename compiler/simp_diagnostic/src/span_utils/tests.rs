use pretty_assertions::assert_eq;
use simp_ir::Span;

use super::*;

#[test]
fn single_line() {
    let table = LineOffsetTable::build("var x = 1;");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col(4), (1, 5));
}

#[test]
fn multi_line_lookup() {
    let source = "a\nbb\nccc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(1), 1);
    assert_eq!(table.line_from_offset(2), 2);
    assert_eq!(table.line_from_offset(5), 3);
    assert_eq!(table.offset_to_line_col(6), (3, 2));
}

#[test]
fn offsets_count_chars_not_bytes() {
    let source = "é\nx";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(2), (2, 1));
}

#[test]
fn past_end_clamps() {
    let table = LineOffsetTable::build("ab");
    assert_eq!(table.offset_to_line_col(100), (1, 3));
}

#[test]
fn line_start_offset_rejects_zero() {
    let table = LineOffsetTable::build("a\nb");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.line_start_offset(3), None);
}

#[test]
fn line_text_and_number() {
    let source = "first\nsecond\n";
    assert_eq!(line_text(source, 2), Some("second"));
    assert_eq!(line_text(source, 0), None);
    assert_eq!(line_number(source, Span::new(7, 8)), 2);
}
