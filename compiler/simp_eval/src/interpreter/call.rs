//! Function calls.

use simp_ir::Expr;

use super::{Interpreter, StmtFlow};
use crate::errors::{not_callable, wrong_arg_count, EvalError};
use crate::value::{Callable, ClassValue, FunctionKind, FunctionValue};
use crate::{EvalResult, Value};

impl Interpreter {
    /// Evaluate callee, then arguments left to right, then call.
    pub(crate) fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> EvalResult {
        let callee_value = self.eval(callee)?;
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg)?);
        }
        match callee_value.as_callable() {
            Some(callable) => callable.call(self, values),
            None => Err(not_callable(callee_value.type_name()).with_span(callee.span)),
        }
    }

    /// Call a function value. User functions run in a fresh child of
    /// their captured environment with parameters bound positionally.
    #[tracing::instrument(level = "debug", skip_all, fields(name = func.name()))]
    pub fn call_function(&mut self, func: &FunctionValue, args: Vec<Value>) -> EvalResult {
        check_arity(func.arity(), args.len())?;
        match func.kind() {
            FunctionKind::Native { callback, .. } => callback(&args),
            FunctionKind::User { decl, closure } => {
                let env = closure.child();
                for (param, arg) in decl.params.iter().zip(args) {
                    env.define(param.lexeme.clone(), arg);
                }
                let mut scoped = self.enter(env);
                scoped.call_depth += 1;
                let flow = scoped.execute_block(&decl.body);
                scoped.call_depth -= 1;
                match flow? {
                    StmtFlow::Return(value) => Ok(value),
                    StmtFlow::Normal => Ok(Value::Null),
                }
            }
        }
    }
}

fn check_arity(expected: usize, got: usize) -> Result<(), EvalError> {
    if expected == got {
        Ok(())
    } else {
        Err(wrong_arg_count(expected, got))
    }
}

impl Callable for FunctionValue {
    fn arity(&self) -> usize {
        match self.kind() {
            FunctionKind::User { decl, .. } => decl.arity(),
            FunctionKind::Native { arity, .. } => *arity,
        }
    }

    fn param_names(&self) -> Option<Vec<&str>> {
        match self.kind() {
            FunctionKind::User { decl, .. } => {
                Some(decl.params.iter().map(|p| p.lexeme.as_str()).collect())
            }
            FunctionKind::Native { .. } => None,
        }
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> EvalResult {
        interpreter.call_function(self, args)
    }
}

/// Calling a class constructs an instance.
impl Callable for ClassValue {
    fn arity(&self) -> usize {
        self.decl().constructor.as_ref().map_or(0, |ctor| ctor.arity())
    }

    fn param_names(&self) -> Option<Vec<&str>> {
        self.decl()
            .constructor
            .as_ref()
            .map(|ctor| ctor.params.iter().map(|p| p.lexeme.as_str()).collect())
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> EvalResult {
        check_arity(self.arity(), args.len())?;
        interpreter.instantiate(self, args)
    }
}
