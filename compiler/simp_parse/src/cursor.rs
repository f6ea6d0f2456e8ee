//! Token cursor for navigating the token stream.

use simp_ir::{Span, Token, TokenKind};

/// Cursor over a trivia-free token list.
///
/// Invariant: the list is non-empty and ends with [`TokenKind::Eof`], so
/// `current()` is always valid and the cursor never moves past the EOF.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Build a cursor, dropping comment tokens and appending an EOF if the
    /// input lacks one.
    pub fn new(tokens: &[Token]) -> Self {
        let mut tokens: Vec<Token> = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .cloned()
            .collect();

        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, end) = tokens.last().map_or((1, 0), |t| (t.line, t.span.end));
            tokens.push(Token::new(TokenKind::Eof, "", line, Span::point(end)));
        }

        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// The most recently consumed token, or the current one at the start.
    #[inline]
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.previous().span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Kind of the token after the current one.
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Advance and return the consumed token. Stays put at EOF.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
