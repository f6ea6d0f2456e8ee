use super::*;

#[test]
fn phase_is_encoded_in_first_digit() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(ErrorCode::E1002.is_parser_error());
    assert!(ErrorCode::E6009.is_runtime_error());
    assert!(!ErrorCode::E6009.is_parser_error());
}

#[test]
fn display_matches_variant_name() {
    assert_eq!(ErrorCode::E6012.to_string(), "E6012");
    assert_eq!(format!("{:?}", ErrorCode::E0003), ErrorCode::E0003.as_str());
}
