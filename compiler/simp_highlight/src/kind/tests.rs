use super::*;

#[test]
fn bracket_colors_cycle_every_three_levels() {
    assert_eq!(HighlightKind::bracket(0), HighlightKind::B0);
    assert_eq!(HighlightKind::bracket(1), HighlightKind::B1);
    assert_eq!(HighlightKind::bracket(2), HighlightKind::B2);
    assert_eq!(HighlightKind::bracket(3), HighlightKind::B0);
    assert!(HighlightKind::bracket(7).is_bracket());
    assert!(!HighlightKind::Called.is_bracket());
}

#[test]
fn ident_kinds_map_to_display_kinds() {
    assert_eq!(IdentKind::Argument.highlight(), HighlightKind::Argument);
    assert_eq!(IdentKind::Variable.highlight(), HighlightKind::VariableName);
    assert_eq!(IdentKind::Super.highlight().to_string(), "super");
}

#[test]
fn default_is_none() {
    assert_eq!(HighlightKind::default(), HighlightKind::None);
}
