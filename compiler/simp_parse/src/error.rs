//! Parse error types.

use simp_diagnostic::{Diagnostic, ErrorCode};
use simp_ir::{Span, Token, TokenKind};
use thiserror::Error;

/// A statement-level parse failure.
///
/// Raised inside a declaration, caught at the declaration boundary, and
/// recorded while the parser synchronizes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {message}, found `{found}`")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub line: u32,
    /// Kind of the token the parser was looking at.
    pub found: TokenKind,
}

impl ParseError {
    #[cold]
    pub fn unexpected(message: impl Into<String>, at: &Token) -> Self {
        ParseError {
            code: ErrorCode::E1001,
            message: message.into(),
            span: at.span,
            line: at.line,
            found: at.kind,
        }
    }

    #[cold]
    pub fn expected_expression(at: &Token) -> Self {
        ParseError {
            code: ErrorCode::E1002,
            message: "expected expression".to_string(),
            span: at.span,
            line: at.line,
            found: at.kind,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(format!("{}, found `{}`", self.message, self.found))
            .with_span(self.span)
            .with_line(self.line)
    }
}
