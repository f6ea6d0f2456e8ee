//! The interactive `repl` command.

use std::io::{self, BufRead, Write};

use simp_diagnostic::Diagnostic;
use simp_eval::{Interpreter, SharedPrintHandler};

use super::{report, run_source};

const PROMPT: &str = "> ";

/// One interactive session. Globals persist from line to line.
pub struct Repl {
    interpreter: Interpreter,
}

impl Repl {
    pub fn new() -> Self {
        Repl {
            interpreter: Interpreter::builder().repl(true).build(),
        }
    }

    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        Repl {
            interpreter: Interpreter::builder()
                .repl(true)
                .print_handler(handler)
                .build(),
        }
    }

    /// Run one line. Top-level expression values are echoed.
    pub fn eval_line(&mut self, line: &str) -> Result<(), Vec<Diagnostic>> {
        run_source(line, &mut self.interpreter)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-eval-print on stdin until end of input.
pub fn run_repl() {
    let mut repl = Repl::new();
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        }
        let input = line.trim_end();
        if input.is_empty() {
            continue;
        }
        if let Err(diagnostics) = repl.eval_line(input) {
            report("<repl>", input, &diagnostics);
        }
    }
    println!();
}
