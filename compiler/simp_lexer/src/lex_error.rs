//! Lexer error types.
//!
//! Lexing never aborts. Each problem is recorded as a [`LexError`] and the
//! scanner carries on with the next character.

use simp_diagnostic::{Diagnostic, ErrorCode};
use simp_ir::Span;
use thiserror::Error;

/// A recorded lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// 1-based line the error was found on.
    pub line: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("multiple decimal points found in a number literal")]
    MultipleDecimalPoints,
    #[error("failed to convert number literal ({0}) to a number")]
    InvalidNumber(String),
}

impl LexError {
    #[cold]
    pub fn unexpected_char(c: char, span: Span, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedChar(c),
            span,
            line,
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            span,
            line,
        }
    }

    #[cold]
    pub fn multiple_decimal_points(span: Span, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::MultipleDecimalPoints,
            span,
            line,
        }
    }

    #[cold]
    pub fn invalid_number(text: impl Into<String>, span: Span, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::InvalidNumber(text.into()),
            span,
            line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0002,
            LexErrorKind::MultipleDecimalPoints | LexErrorKind::InvalidNumber(_) => {
                ErrorCode::E0003
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_span(self.span)
            .with_line(self.line);
        match self.kind {
            LexErrorKind::UnterminatedString => diag.with_note("add a closing `\"`"),
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests;
