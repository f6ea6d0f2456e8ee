//! Tree-walking interpreter.
//!
//! The interpreter owns one "current environment" cursor. Every construct
//! that opens a scope (block, function body, method body) swaps a child in
//! through [`ScopedInterpreter`], whose `Drop` restores the previous
//! environment on every exit path, errors included.
//!
//! `return` is not an error: statement execution yields a [`StmtFlow`], and
//! a `Return` flow is collapsed into the call's result at the call boundary.

mod builder;
mod call;
mod class;
mod eval;
mod exec;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use simp_ir::Stmt;

use crate::errors::EvalError;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, Value};

/// Outcome of executing one statement.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtFlow {
    /// Fall through to the next statement.
    Normal,
    /// A `return` is unwinding toward the nearest call.
    Return(Value),
}

pub struct Interpreter {
    /// Current environment.
    pub(crate) env: Environment<Value>,
    globals: Environment<Value>,
    print_handler: SharedPrintHandler,
    /// Echo the value of top-level expression statements.
    repl: bool,
    /// Active user-function calls; `return` is only legal above zero.
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter writing to stdout, with the standard library loaded.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn globals(&self) -> &Environment<Value> {
        &self.globals
    }

    /// Global binding `name`, if defined.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.get_no_fail(name)
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn is_repl(&self) -> bool {
        self.repl
    }

    /// Execute a program. The first runtime error aborts the run.
    ///
    /// Globals persist across calls, so a REPL feeds each line's
    /// statements to the same interpreter.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            if self.repl {
                if let Stmt::Expression(expr) = stmt {
                    let value = self.eval(expr)?;
                    if !value.is_null() {
                        self.print_handler.println(&value.to_text());
                    }
                    continue;
                }
            }
            let flow = self.execute(stmt)?;
            debug_assert_eq!(flow, StmtFlow::Normal, "`return` escaped to the top level");
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
