use simp_ir::TokenKind;

use super::Cursor;

fn cursor(source: &str) -> Cursor {
    Cursor::new(&simp_lexer::lex(source).tokens)
}

#[test]
fn comments_are_filtered() {
    let mut c = cursor("a // hi\nb");
    assert_eq!(c.current().lexeme, "a");
    c.advance();
    assert_eq!(c.current().lexeme, "b");
    c.advance();
    assert!(c.is_at_end());
}

#[test]
fn advance_sticks_at_eof() {
    let mut c = cursor("x");
    c.advance();
    c.advance();
    c.advance();
    assert!(c.is_at_end());
    assert_eq!(c.previous().kind, TokenKind::Identifier);
}

#[test]
fn missing_eof_is_appended() {
    let mut tokens = simp_lexer::lex("a b").tokens;
    tokens.pop();
    let mut c = Cursor::new(&tokens);
    c.advance();
    c.advance();
    assert!(c.is_at_end());
    assert_eq!(c.current_span().start, 3);
}

#[test]
fn empty_token_list_is_just_eof() {
    let c = Cursor::new(&[]);
    assert!(c.is_at_end());
    assert_eq!(c.peek_next_kind(), TokenKind::Eof);
}

#[test]
fn eat_and_peek() {
    let mut c = cursor("x = 1");
    assert_eq!(c.peek_next_kind(), TokenKind::Equal);
    assert!(!c.eat(TokenKind::Equal));
    assert!(c.eat(TokenKind::Identifier));
    assert!(c.eat(TokenKind::Equal));
    assert_eq!(c.position(), 2);
}
