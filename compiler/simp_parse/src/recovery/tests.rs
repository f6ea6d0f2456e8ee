use simp_ir::TokenKind;

use super::*;

#[test]
fn token_set_membership() {
    let set = TokenSet::new().with(TokenKind::Var).with(TokenKind::If);
    assert_eq!(set.count(), 2);
    assert!(set.contains(TokenKind::Var));
    assert!(!set.contains(TokenKind::While));
}

#[test]
fn union_combines() {
    let a = TokenSet::new().with(TokenKind::Plus);
    let b = TokenSet::new().with(TokenKind::Minus);
    let both = a.union(b);
    assert!(both.contains(TokenKind::Plus));
    assert!(both.contains(TokenKind::Minus));
}

#[test]
fn every_kind_fits_in_the_bitset() {
    assert!(TokenKind::Eof.discriminant_index() < 64);
    assert!(TokenSet::new().with(TokenKind::Eof).contains(TokenKind::Eof));
}

#[test]
fn boundaries() {
    assert!(STMT_BOUNDARY.contains(TokenKind::Const));
    assert!(STMT_BOUNDARY.contains(TokenKind::Eof));
    assert!(!STMT_BOUNDARY.contains(TokenKind::RBrace));
    assert!(BLOCK_BOUNDARY.contains(TokenKind::RBrace));
}

#[test]
fn synchronize_skips_to_boundary() {
    let tokens = simp_lexer::lex("1 + ; ) var x;").tokens;
    let mut cursor = Cursor::new(&tokens);
    let skipped = synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(skipped, 4);
    assert!(cursor.check(TokenKind::Var));
}

#[test]
fn synchronize_stops_at_eof() {
    let tokens = simp_lexer::lex("1 2 3").tokens;
    let mut cursor = Cursor::new(&tokens);
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert!(cursor.is_at_end());
}
