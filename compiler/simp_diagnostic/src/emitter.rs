//! Diagnostic emitters.
//!
//! Only a human-readable terminal emitter exists today. Emitters
//! implement [`DiagnosticEmitter`] so the CLI can pick one per run.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Emit a one-line error count, nothing when it is zero.
    fn emit_summary(&mut self, error_count: usize);
}
