//! Error codes for all diagnostics.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Invalid number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Wrong number of arguments
    E6002,
    /// Value is not callable
    E6003,
    /// Invalid operand types for an operator
    E6004,
    /// Value cannot be indexed
    E6005,
    /// Value has no such field / is not dot-accessible
    E6006,
    /// Index out of bounds
    E6007,
    /// Invalid assignment target
    E6008,
    /// Division by zero
    E6009,
    /// Assignment to a constant
    E6010,
    /// Superclass is not a class
    E6011,
    /// `return` outside of a function
    E6012,
    /// Write to a read-only value
    E6013,
    /// Uncategorized runtime error
    E6099,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E6099 => "E6099",
        }
    }

    pub const fn is_lexer_error(self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    pub const fn is_parser_error(self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    pub const fn is_runtime_error(self) -> bool {
        !self.is_lexer_error() && !self.is_parser_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
