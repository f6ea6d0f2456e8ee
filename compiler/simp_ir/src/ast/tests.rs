use super::*;
use crate::{Span, Token, TokenKind};

fn ident(name: &str) -> Expr {
    Expr::new(
        ExprKind::Variable(Token::new(TokenKind::Identifier, name, 1, Span::new(0, 1))),
        Span::new(0, 1),
    )
}

#[test]
fn assignable_targets() {
    let var = ident("a");
    assert!(var.is_assignable());

    let dot = Expr::new(
        ExprKind::DotAccess {
            target: Box::new(ident("a")),
            name: Token::new(TokenKind::Identifier, "b", 1, Span::new(2, 3)),
        },
        Span::new(0, 3),
    );
    assert!(dot.is_assignable());

    let literal = Expr::new(ExprKind::Literal(Constant::Number(1.0)), Span::new(0, 1));
    assert!(!literal.is_assignable());

    let grouped = Expr::new(ExprKind::Grouping(Box::new(ident("a"))), Span::new(0, 3));
    assert!(!grouped.is_assignable());
}

#[test]
fn operator_tokens_round_trip_to_symbols() {
    for kind in [
        TokenKind::Plus,
        TokenKind::Caret,
        TokenKind::LessEqual,
        TokenKind::BangEqual,
    ] {
        let op = BinaryOp::from_token(kind);
        assert_eq!(op.map(BinaryOp::as_symbol), Some(kind.friendly_name()));
    }
    assert_eq!(BinaryOp::from_token(TokenKind::AmpersandAmpersand), None);
}

#[test]
fn compound_assignment_maps_to_binary_op() {
    assert_eq!(
        BinaryOp::from_compound_assign(TokenKind::PipeEqual),
        Some(BinaryOp::BitOr)
    );
    assert_eq!(BinaryOp::from_compound_assign(TokenKind::Equal), None);
}

#[test]
fn logical_ops_are_separate_from_binary() {
    assert_eq!(
        LogicalOp::from_token(TokenKind::QuestionQuestion),
        Some(LogicalOp::Coalesce)
    );
    assert_eq!(LogicalOp::from_token(TokenKind::Pipe), None);
}

#[test]
fn inc_dec_delta() {
    assert!((IncDecOp::Increment.delta() - 1.0).abs() < f64::EPSILON);
    assert!((IncDecOp::Decrement.delta() + 1.0).abs() < f64::EPSILON);
}
