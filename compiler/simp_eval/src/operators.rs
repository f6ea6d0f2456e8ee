//! Binary and unary operator semantics on already-evaluated operands.
//!
//! Short-circuit operators are not here: they need the unevaluated right
//! operand and live in the interpreter.

use simp_ir::{BinaryOp, UnaryOp};

use crate::errors::{binary_type_mismatch, division_by_zero};
use crate::{EvalResult, Value};

pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => Ok(Value::Number(left.to_number()? - right.to_number()?)),
        BinaryOp::Mul => Ok(Value::Number(left.to_number()? * right.to_number()?)),
        BinaryOp::Div => {
            let divisor = right.to_number()?;
            if divisor == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::Number(left.to_number()? / divisor))
        }

        BinaryOp::BitOr => bitwise(left, right, |a, b| a | b),
        BinaryOp::BitAnd => bitwise(left, right, |a, b| a & b),
        BinaryOp::BitXor => bitwise(left, right, |a, b| a ^ b),

        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.equals(right))),
        BinaryOp::Lt => compare(left, right, |a, b| a < b),
        BinaryOp::LtEq => compare(left, right, |a, b| a <= b),
        BinaryOp::Gt => compare(left, right, |a, b| a > b),
        BinaryOp::GtEq => compare(left, right, |a, b| a >= b),
    }
}

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.to_boolean())),
        UnaryOp::Neg => Ok(Value::Number(-operand.to_number()?)),
    }
}

/// Both strings concatenate, both numbers add, anything else is an error.
fn add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        _ => Err(binary_type_mismatch(
            BinaryOp::Add.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn compare(left: &Value, right: &Value, cmp: impl Fn(f64, f64) -> bool) -> EvalResult {
    Ok(Value::Bool(cmp(left.to_number()?, right.to_number()?)))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "bitwise operators work on the truncated integer value"
)]
fn bitwise(left: &Value, right: &Value, op: impl Fn(i64, i64) -> i64) -> EvalResult {
    let a = left.to_number()?.trunc() as i64;
    let b = right.to_number()?.trunc() as i64;
    Ok(Value::Number(op(a, b) as f64))
}
