//! Lexer for SIMP.
//!
//! Turns source text into a flat token stream terminated by a single
//! [`TokenKind::Eof`](simp_ir::TokenKind::Eof). Token spans are char
//! offsets into the source.
//!
//! Comment tokens are kept in the output so offset-based consumers (the
//! highlighter) can see them. The parser drops them itself.

mod cursor;
mod keywords;
mod lex_error;
mod lexer;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;

use simp_ir::Token;

/// Tokens and errors from lexing a whole source string.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source` to completion.
pub fn lex(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}
