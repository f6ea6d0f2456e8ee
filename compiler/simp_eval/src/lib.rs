//! Tree-walking evaluator for SIMP.
//!
//! - [`Environment`]: chained lexical scopes, generic over the bound value
//! - [`Value`]: runtime values and the [`IndexAccess`] / [`DotAccess`] /
//!   [`Callable`] capability traits
//! - [`Interpreter`]: statement execution, calls, class instantiation
//! - [`print_handler`]: where `print` and `readline` do their I/O
//!
//! Embedders register host functions through
//! [`InterpreterBuilder::native`]; a native is a global `Function` value with
//! a fixed arity and a callback over the evaluated arguments.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod stdlib;
mod value;

pub use environment::{Environment, LocalScope, Mutability, Scope, ScopeError};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter, StmtFlow};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, buffer_handler_with_input, silent_handler, stdout_handler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use value::{
    ArrayValue, Callable, ClassValue, DotAccess, FunctionKind, FunctionValue, IndexAccess,
    InstanceValue, NativeFn, RawValue, Value,
};
