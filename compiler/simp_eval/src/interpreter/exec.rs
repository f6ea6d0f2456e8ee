//! Statement execution.

use std::rc::Rc;

use simp_ir::{ClassDecl, FunctionDecl, Stmt, VarDecl};
use simp_stack::ensure_sufficient_stack;

use super::{Interpreter, StmtFlow};
use crate::errors::{not_a_class, return_outside_function, undefined_variable, EvalError};
use crate::value::{ClassValue, FunctionValue};
use crate::{Mutability, Value};

impl Interpreter {
    pub(crate) fn execute(&mut self, stmt: &Stmt) -> Result<StmtFlow, EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<StmtFlow, EvalError> {
        match stmt {
            Stmt::Var(decl) => {
                self.declare_var(decl)?;
                Ok(StmtFlow::Normal)
            }
            Stmt::Function(decl) => {
                self.declare_function(decl);
                Ok(StmtFlow::Normal)
            }
            Stmt::Class(decl) => {
                self.declare_class(decl)?;
                Ok(StmtFlow::Normal)
            }
            Stmt::Return { value, span } => {
                if self.call_depth == 0 {
                    return Err(return_outside_function().with_span(*span));
                }
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                Ok(StmtFlow::Return(value))
            }
            Stmt::Expression(expr) => {
                self.eval(expr)?;
                Ok(StmtFlow::Normal)
            }
            Stmt::Block(statements) => self.scoped().execute_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition)?.to_boolean() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(StmtFlow::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.eval(condition)?.to_boolean() {
                    if let flow @ StmtFlow::Return(_) = self.execute(body)? {
                        return Ok(flow);
                    }
                }
                Ok(StmtFlow::Normal)
            }
        }
    }

    /// Run statements in the current environment, stopping at the first
    /// `return`.
    pub(crate) fn execute_block(&mut self, statements: &[Stmt]) -> Result<StmtFlow, EvalError> {
        for stmt in statements {
            if let flow @ StmtFlow::Return(_) = self.execute(stmt)? {
                return Ok(flow);
            }
        }
        Ok(StmtFlow::Normal)
    }

    fn declare_var(&mut self, decl: &VarDecl) -> Result<(), EvalError> {
        let value = match &decl.initializer {
            Some(expr) => self.eval(expr)?,
            None => Value::Null,
        };
        let mutability = if decl.is_const {
            Mutability::Immutable
        } else {
            Mutability::Mutable
        };
        self.env
            .define_with(decl.name.lexeme.clone(), value, mutability);
        Ok(())
    }

    fn declare_function(&mut self, decl: &Rc<FunctionDecl>) {
        let func = FunctionValue::user(Rc::clone(decl), self.env.clone());
        self.env
            .define(decl.name.lexeme.clone(), Value::Function(Rc::new(func)));
    }

    /// The superclass is resolved here, in the declaring scope.
    fn declare_class(&mut self, decl: &Rc<ClassDecl>) -> Result<(), EvalError> {
        let superclass = match &decl.superclass {
            Some(name) => match self.env.get(&name.lexeme) {
                Ok(Value::Class(class)) => Some(class),
                Ok(_) => return Err(not_a_class(&name.lexeme).with_span(name.span)),
                Err(_) => return Err(undefined_variable(&name.lexeme).with_span(name.span)),
            },
            None => None,
        };
        let class = ClassValue::new(Rc::clone(decl), self.env.clone(), superclass);
        self.env
            .define(decl.name.lexeme.clone(), Value::Class(Rc::new(class)));
        Ok(())
    }
}
