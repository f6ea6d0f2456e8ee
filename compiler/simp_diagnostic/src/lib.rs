//! Diagnostic system shared by the lexer, parser, and interpreter.
//!
//! Each phase keeps its own error type and converts it into a
//! [`Diagnostic`] for reporting:
//! - Error code for searchability (`E0xxx` lex, `E1xxx` parse, `E6xxx` runtime)
//! - Message (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (extra context)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
