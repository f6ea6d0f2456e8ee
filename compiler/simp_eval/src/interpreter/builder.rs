//! Builder for `Interpreter`.

use std::rc::Rc;

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::{FunctionValue, NativeFn};
use crate::{stdlib, Environment, EvalResult, Value};

/// Configures an [`Interpreter`] before it runs anything.
///
/// ```text
/// let mut interpreter = Interpreter::builder()
///     .print_handler(buffer_handler())
///     .native("twice", 1, |args| Ok(Value::Number(args[0].to_number()? * 2.0)))
///     .build();
/// ```
pub struct InterpreterBuilder {
    repl: bool,
    print_handler: Option<SharedPrintHandler>,
    stdlib: bool,
    natives: Vec<(String, usize, NativeFn)>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            repl: false,
            print_handler: None,
            stdlib: true,
            natives: Vec::new(),
        }
    }

    /// Echo non-null values of top-level expression statements.
    #[must_use]
    pub fn repl(mut self, repl: bool) -> Self {
        self.repl = repl;
        self
    }

    /// Where `print` writes and `readline` reads. Defaults to stdout/stdin.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Start with empty globals.
    #[must_use]
    pub fn without_stdlib(mut self) -> Self {
        self.stdlib = false;
        self
    }

    /// Register a host function as a global. Later registrations of the
    /// same name win, including over the standard library.
    #[must_use]
    pub fn native<F>(mut self, name: impl Into<String>, arity: usize, callback: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + 'static,
    {
        self.natives.push((name.into(), arity, Rc::new(callback)));
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        let globals = Environment::new();
        if self.stdlib {
            stdlib::register(&globals, &print_handler);
        }
        for (name, arity, callback) in self.natives {
            let func = FunctionValue::native(name.clone(), arity, callback);
            globals.define(name, Value::Function(Rc::new(func)));
        }
        Interpreter {
            env: globals.clone(),
            globals,
            print_handler,
            repl: self.repl,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
