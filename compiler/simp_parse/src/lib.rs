//! Recursive descent parser for SIMP.
//!
//! Turns a token stream into a list of statements. A failure inside one
//! declaration is recorded and the parser synchronizes to the next
//! statement boundary, so a single bad statement never hides the rest of
//! the file.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, BLOCK_BOUNDARY, STMT_BOUNDARY};

use simp_ir::{Stmt, Token};

/// Statements and errors from parsing a token stream.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser {
    cursor: Cursor,
    errors: Vec<ParseError>,
    /// Tolerate a missing trailing `;`.
    repl: bool,
}

impl Parser {
    pub fn new(tokens: &[Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            repl: false,
        }
    }

    /// Parser for interactive input, where statement terminators are optional.
    pub fn new_repl(tokens: &[Token]) -> Self {
        Parser {
            repl: true,
            ..Parser::new(tokens)
        }
    }

    pub fn is_repl(&self) -> bool {
        self.repl
    }

    /// Parse declarations until EOF.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration(STMT_BOUNDARY) {
                statements.push(stmt);
            }
        }
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }
}

/// Parse a file-mode token stream.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Parse a REPL-mode token stream.
pub fn parse_repl(tokens: &[Token]) -> ParseOutput {
    Parser::new_repl(tokens).parse_program()
}
