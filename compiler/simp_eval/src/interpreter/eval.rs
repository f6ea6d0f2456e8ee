//! Expression evaluation.

use simp_ir::{Constant, Expr, ExprKind, IncDecOp, LogicalOp, Token};
use simp_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    cannot_access_field, cannot_assign_constant, cannot_index, invalid_assignment_target,
    undefined_variable, EvalError,
};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalResult, ScopeError, Value};

impl Interpreter {
    /// Evaluate `expr`, attaching its span to errors that carry none yet.
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr)).map_err(|e| e.or_span(expr.span))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(constant) => Ok(constant_value(constant)),
            ExprKind::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, *op, &right)
            }
            ExprKind::ShortCircuit { left, op, right } => self.eval_short_circuit(left, *op, right),
            ExprKind::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition)?.to_boolean() {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            }
            ExprKind::Unary { op, operand } => evaluate_unary(*op, &self.eval(operand)?),
            ExprKind::Prefix { op, operand } => self.eval_inc_dec(operand, *op, true),
            ExprKind::Postfix { operand, op } => self.eval_inc_dec(operand, *op, false),
            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Variable(name) => self.lookup(name),
            ExprKind::Assignment { target, value } => {
                let value = self.eval(value)?;
                self.assign_to(target, value.clone())?;
                Ok(value)
            }
            ExprKind::IndexAccess { target, index } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                match target.as_indexable() {
                    Some(indexable) => indexable.index_get(&index),
                    None => Err(cannot_index(target.type_name())),
                }
            }
            ExprKind::DotAccess { target, name } => {
                let target = self.eval(target)?;
                match target.as_dot_accessible() {
                    Some(object) => object
                        .field_get(&name.lexeme)
                        .map_err(|e| e.or_span(name.span)),
                    None => Err(cannot_access_field(target.type_name(), &name.lexeme)
                        .with_span(name.span)),
                }
            }
            ExprKind::FunctionCall { callee, args } => self.eval_call(callee, args),
            ExprKind::ArrayCreation(elements) => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.eval(element)?);
                }
                Ok(Value::array(items))
            }
        }
    }

    fn lookup(&self, name: &Token) -> EvalResult {
        self.env
            .get(&name.lexeme)
            .map_err(|_| undefined_variable(&name.lexeme).with_span(name.span))
    }

    /// The right operand is only evaluated when the left one doesn't
    /// decide the result.
    fn eval_short_circuit(&mut self, left: &Expr, op: LogicalOp, right: &Expr) -> EvalResult {
        let left = self.eval(left)?;
        match op {
            LogicalOp::And => {
                if !left.to_boolean() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval(right)?.to_boolean()))
            }
            LogicalOp::Or => {
                if left.to_boolean() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval(right)?.to_boolean()))
            }
            LogicalOp::Coalesce => {
                if left.is_null() {
                    self.eval(right)
                } else {
                    Ok(left)
                }
            }
        }
    }

    /// `++`/`--`: read the target, then write back through the same node.
    fn eval_inc_dec(&mut self, target: &Expr, op: IncDecOp, prefix: bool) -> EvalResult {
        if !target.is_assignable() {
            return Err(invalid_assignment_target());
        }
        let old = self.eval(target)?.to_number()?;
        let new = old + op.delta();
        self.assign_to(target, Value::Number(new))?;
        Ok(Value::Number(if prefix { new } else { old }))
    }

    /// Store `value` into an assignable expression.
    pub(crate) fn assign_to(&mut self, target: &Expr, value: Value) -> Result<(), EvalError> {
        match &target.kind {
            ExprKind::Variable(name) => self.env.assign(&name.lexeme, value).map_err(|e| {
                let err = match e {
                    ScopeError::Undefined => undefined_variable(&name.lexeme),
                    ScopeError::Immutable => cannot_assign_constant(&name.lexeme),
                };
                err.with_span(name.span)
            }),
            ExprKind::IndexAccess { target, index } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                match target.as_indexable() {
                    Some(indexable) => indexable.index_set(&index, value),
                    None => Err(cannot_index(target.type_name())),
                }
            }
            ExprKind::DotAccess { target, name } => {
                let target = self.eval(target)?;
                match target.as_dot_accessible() {
                    Some(object) => object
                        .field_set(&name.lexeme, value)
                        .map_err(|e| e.or_span(name.span)),
                    None => Err(cannot_access_field(target.type_name(), &name.lexeme)
                        .with_span(name.span)),
                }
            }
            _ => Err(invalid_assignment_target().with_span(target.span)),
        }
    }
}

fn constant_value(constant: &Constant) -> Value {
    match constant {
        Constant::Null => Value::Null,
        Constant::Bool(b) => Value::Bool(*b),
        Constant::Number(n) => Value::Number(*n),
        Constant::Str(s) => Value::from(s.as_str()),
    }
}
