use super::*;
use pretty_assertions::assert_eq;

#[test]
fn tag_covers_half_open_span() {
    let mut highlights = Highlights::new(6);
    highlights.tag(Span::new(1, 3), HighlightKind::VariableName);
    assert_eq!(highlights.get(0), HighlightKind::None);
    assert_eq!(highlights.get(1), HighlightKind::VariableName);
    assert_eq!(highlights.get(2), HighlightKind::VariableName);
    assert_eq!(highlights.get(3), HighlightKind::None);
}

#[test]
fn later_tags_win() {
    let mut highlights = Highlights::new(3);
    highlights.tag(Span::new(0, 3), HighlightKind::Called);
    highlights.tag(Span::new(0, 3), HighlightKind::FunctionName);
    assert_eq!(highlights.as_slice(), &[HighlightKind::FunctionName; 3]);
}

#[test]
fn out_of_range_is_clamped() {
    let mut highlights = Highlights::new(2);
    highlights.tag(Span::new(1, 10), HighlightKind::Comment);
    highlights.tag(Span::point(5), HighlightKind::Null);
    assert_eq!(
        highlights.into_vec(),
        vec![HighlightKind::None, HighlightKind::Comment]
    );
}

#[test]
fn runs_merge_adjacent_equal_kinds() {
    let mut highlights = Highlights::for_source("var ab;");
    highlights.tag(Span::new(0, 3), HighlightKind::VarKeyword);
    highlights.tag(Span::new(4, 6), HighlightKind::VariableName);
    assert_eq!(
        highlights.runs(),
        vec![
            (Span::new(0, 3), HighlightKind::VarKeyword),
            (Span::new(4, 6), HighlightKind::VariableName),
        ]
    );
}

#[test]
fn length_counts_characters() {
    assert_eq!(Highlights::for_source("é!").len(), 2);
    assert!(Highlights::for_source("").is_empty());
}
