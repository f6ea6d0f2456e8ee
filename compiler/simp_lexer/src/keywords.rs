//! Reserved keyword table.

use simp_ir::TokenKind;

/// Resolve `text` to a keyword kind, or `None` for a plain identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "function" => Some(TokenKind::Function),
        "class" => Some(TokenKind::Class),
        "var" => Some(TokenKind::Var),
        "const" => Some(TokenKind::Const),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "null" => Some(TokenKind::Null),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}
