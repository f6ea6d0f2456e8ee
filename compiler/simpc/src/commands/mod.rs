//! Command handlers for the `simp` CLI.
//!
//! Each submodule implements one command. File reading and front-end error
//! reporting are shared and live here.

use simp_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use simp_diagnostic::Diagnostic;
use simp_ir::{Stmt, Token};

mod debug;
mod repl;
mod run;

pub use debug::{
    format_highlights, format_parse, format_tokens, highlight_file, lex_file, parse_file,
};
pub use repl::{run_repl, Repl};
pub use run::{run_file, run_source};

/// Tokens, statements and every lex/parse diagnostic for one source text.
pub struct Frontend {
    pub tokens: Vec<Token>,
    pub statements: Vec<Stmt>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Frontend {
    /// Lex and parse `source`, in REPL mode when `repl` is set.
    pub fn new(source: &str, repl: bool) -> Self {
        let lexed = simp_lexer::lex(source);
        let parsed = if repl {
            simp_parse::parse_repl(&lexed.tokens)
        } else {
            simp_parse::parse(&lexed.tokens)
        };

        let mut diagnostics: Vec<Diagnostic> =
            lexed.errors.iter().map(simp_lexer::LexError::to_diagnostic).collect();
        diagnostics.extend(parsed.errors.iter().map(simp_parse::ParseError::to_diagnostic));

        Frontend {
            tokens: lexed.tokens,
            statements: parsed.statements,
            diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Stderr emitter rendering snippets from `source`.
pub(crate) fn stderr_emitter<'src>(
    path: &'src str,
    source: &'src str,
) -> TerminalEmitter<'src, std::io::Stderr> {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source)
}

/// Emit `diagnostics` with a trailing summary.
pub(crate) fn report(path: &str, source: &str, diagnostics: &[Diagnostic]) {
    let mut emitter = stderr_emitter(path, source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
