//! The `run` command: parse and evaluate a SIMP source file.

use simp_diagnostic::Diagnostic;
use simp_eval::Interpreter;

use super::{read_file, report, Frontend};

/// Run a SIMP source file, exiting with status 1 on any error.
///
/// Lex and parse errors are all reported and nothing is executed; a runtime
/// error aborts the run at the first failure.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let mut interpreter = Interpreter::new();
    if let Err(diagnostics) = run_source(&source, &mut interpreter) {
        report(path, &source, &diagnostics);
        std::process::exit(1);
    }
}

/// Parse and evaluate `source` on `interpreter`.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<(), Vec<Diagnostic>> {
    let frontend = Frontend::new(source, interpreter.is_repl());
    if frontend.has_errors() {
        return Err(frontend.diagnostics);
    }

    interpreter.interpret(&frontend.statements).map_err(|err| {
        tracing::debug!(code = %err.code(), "runtime error");
        vec![err.to_diagnostic()]
    })
}
