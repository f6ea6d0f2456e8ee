//! Token-only classification: keywords, literals, comments and bracket
//! pair colors.

use simp_ir::{Token, TokenKind};

use crate::{HighlightKind, Highlights};

/// Display kind implied by a token's type alone.
pub fn token_kind(kind: TokenKind) -> Option<HighlightKind> {
    let highlight = match kind {
        TokenKind::Comment => HighlightKind::Comment,
        TokenKind::Var | TokenKind::Const => HighlightKind::VarKeyword,
        TokenKind::Function => HighlightKind::FunctionKeyword,
        TokenKind::Class => HighlightKind::ClassKeyword,
        TokenKind::If => HighlightKind::IfKeyword,
        TokenKind::Else => HighlightKind::ElseKeyword,
        TokenKind::While => HighlightKind::WhileKeyword,
        TokenKind::Return => HighlightKind::ReturnKeyword,
        TokenKind::StringLiteral => HighlightKind::StringLiteral,
        TokenKind::NumberLiteral => HighlightKind::NumberLiteral,
        TokenKind::True => HighlightKind::True,
        TokenKind::False => HighlightKind::False,
        TokenKind::Null => HighlightKind::Null,
        _ => return None,
    };
    Some(highlight)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Bracket {
    Paren,
    Square,
    Curly,
}

impl Bracket {
    /// `(bracket, is_opener)` for bracket tokens.
    fn classify(kind: TokenKind) -> Option<(Bracket, bool)> {
        match kind {
            TokenKind::LParen => Some((Bracket::Paren, true)),
            TokenKind::RParen => Some((Bracket::Paren, false)),
            TokenKind::LBracket => Some((Bracket::Square, true)),
            TokenKind::RBracket => Some((Bracket::Square, false)),
            TokenKind::LBrace => Some((Bracket::Curly, true)),
            TokenKind::RBrace => Some((Bracket::Curly, false)),
            _ => None,
        }
    }
}

/// Colors matched bracket pairs by nesting depth.
///
/// Openers are pushed; a closer that matches the innermost open bracket pops
/// it and both get the color for the pair's depth. Unmatched openers and
/// mismatched closers stay uncolored.
#[derive(Default)]
struct BracketMatcher<'tok> {
    open: Vec<(Bracket, &'tok Token)>,
}

impl<'tok> BracketMatcher<'tok> {
    fn feed(&mut self, token: &'tok Token, highlights: &mut Highlights) {
        let Some((bracket, is_opener)) = Bracket::classify(token.kind) else {
            return;
        };
        if is_opener {
            self.open.push((bracket, token));
            return;
        }
        if self.open.last().is_some_and(|(top, _)| *top == bracket) {
            if let Some((_, opener)) = self.open.pop() {
                let color = HighlightKind::bracket(self.open.len());
                highlights.tag(opener.span, color);
                highlights.tag(token.span, color);
            }
        }
    }
}

/// Apply the token-only pass to `highlights`.
pub fn lexical_pass(tokens: &[Token], highlights: &mut Highlights) {
    let mut brackets = BracketMatcher::default();
    for token in tokens {
        if let Some(kind) = token_kind(token.kind) {
            highlights.tag(token.span, kind);
        }
        brackets.feed(token, highlights);
    }
    if !brackets.open.is_empty() {
        tracing::trace!(unmatched = brackets.open.len(), "unclosed brackets");
    }
}
