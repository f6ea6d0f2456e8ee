//! Grammar productions, split into expression and statement parsing.

mod expr;
mod stmt;

use simp_ir::{Token, TokenKind};

use crate::{ParseError, Parser};

impl Parser {
    /// Consume a token of `kind` or fail with `message`.
    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance().clone())
        } else {
            Err(ParseError::unexpected(message, self.cursor.current()))
        }
    }

    /// Consume a statement-ending `;`. Optional in REPL mode.
    pub(crate) fn expect_terminator(&mut self, message: &str) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Semicolon) || self.repl {
            Ok(())
        } else {
            Err(ParseError::unexpected(message, self.cursor.current()))
        }
    }
}
