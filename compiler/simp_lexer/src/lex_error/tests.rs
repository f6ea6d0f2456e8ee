use pretty_assertions::assert_eq;
use simp_diagnostic::ErrorCode;
use simp_ir::Span;

use super::*;

#[test]
fn display_prefixes_line() {
    let err = LexError::unexpected_char('#', Span::new(3, 4), 2);
    assert_eq!(err.to_string(), "line 2: unexpected character '#'");
}

#[test]
fn codes_by_kind() {
    let span = Span::new(0, 1);
    assert_eq!(LexError::unterminated_string(span, 1).code(), ErrorCode::E0001);
    assert_eq!(LexError::unexpected_char('@', span, 1).code(), ErrorCode::E0002);
    assert_eq!(
        LexError::multiple_decimal_points(span, 1).code(),
        ErrorCode::E0003
    );
}

#[test]
fn diagnostic_carries_span_and_line() {
    let diag = LexError::unterminated_string(Span::new(5, 9), 3).to_diagnostic();
    assert_eq!(diag.span, Some(Span::new(5, 9)));
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.message, "unterminated string literal");
}
