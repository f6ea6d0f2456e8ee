//! Capability contracts: what a value can do beyond conversion.
//!
//! | Contract | Implemented by |
//! |----------|----------------|
//! | [`IndexAccess`] | strings (read-only), arrays |
//! | [`DotAccess`] | strings (`.length` only), instances |
//! | [`Callable`] | functions, classes |

use std::rc::Rc;

use super::heap::{ArrayValue, InstanceValue};
use super::Value;
use crate::errors::{
    cannot_access_field, index_out_of_bounds, invalid_index_type, read_only, EvalError,
};
use crate::{EvalResult, Interpreter};

/// `target[index]` reads and writes.
pub trait IndexAccess {
    fn type_name(&self) -> &'static str;

    fn length(&self) -> usize;

    fn index_get(&self, index: &Value) -> EvalResult;

    fn index_set(&self, index: &Value, value: Value) -> Result<(), EvalError> {
        let _ = (index, value);
        Err(read_only(self.type_name()))
    }
}

/// `target.name` reads and writes.
pub trait DotAccess {
    fn type_name(&self) -> &'static str;

    fn field_get(&self, name: &str) -> EvalResult;

    fn field_set(&self, name: &str, value: Value) -> Result<(), EvalError> {
        let _ = (name, value);
        Err(read_only(self.type_name()))
    }
}

/// Values that can appear as the callee of a call expression.
pub trait Callable {
    fn arity(&self) -> usize;

    /// Declared parameter names, for user-defined callables.
    fn param_names(&self) -> Option<Vec<&str>> {
        None
    }

    /// Invoke with already-evaluated arguments. The caller has checked
    /// nothing; implementations check arity themselves.
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> EvalResult;
}

/// Indices must be numbers; fractions truncate toward zero.
#[allow(
    clippy::cast_possible_truncation,
    reason = "out-of-range floats saturate, which then fails the bounds checks"
)]
fn to_index(index: &Value) -> Result<i64, EvalError> {
    match index {
        Value::Number(n) => Ok(n.trunc() as i64),
        other => Err(invalid_index_type(other.type_name())),
    }
}

impl IndexAccess for Rc<str> {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn index_get(&self, index: &Value) -> EvalResult {
        let i = to_index(index)?;
        usize::try_from(i)
            .ok()
            .and_then(|at| self.chars().nth(at))
            .map(|c| Value::string(c.to_string()))
            .ok_or_else(|| index_out_of_bounds(i, self.length()))
    }
}

impl DotAccess for Rc<str> {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn field_get(&self, name: &str) -> EvalResult {
        match name {
            "length" => Ok(Value::from_len(self.length())),
            _ => Err(cannot_access_field("string", name)),
        }
    }
}

impl IndexAccess for ArrayValue {
    fn type_name(&self) -> &'static str {
        "array"
    }

    fn length(&self) -> usize {
        self.len()
    }

    /// Reading past the end yields `null`.
    fn index_get(&self, index: &Value) -> EvalResult {
        let i = to_index(index)?;
        let at = usize::try_from(i).map_err(|_| index_out_of_bounds(i, self.len()))?;
        Ok(self.get(at).unwrap_or(Value::Null))
    }

    /// Writing past the end pads the gap with `null`.
    fn index_set(&self, index: &Value, value: Value) -> Result<(), EvalError> {
        let i = to_index(index)?;
        let at = usize::try_from(i).map_err(|_| index_out_of_bounds(i, self.len()))?;
        if self.set(at, value) {
            Ok(())
        } else {
            Err(index_out_of_bounds(i, self.len()).with_note(format!(
                "arrays grow to at most {} elements",
                ArrayValue::MAX_LEN
            )))
        }
    }
}

impl DotAccess for InstanceValue {
    fn type_name(&self) -> &'static str {
        "instance"
    }

    fn field_get(&self, name: &str) -> EvalResult {
        self.get_field(name).ok_or_else(|| {
            cannot_access_field("instance", name)
                .with_note(format!("`{}` defines no field `{name}`", self.class_name()))
        })
    }

    fn field_set(&self, name: &str, value: Value) -> Result<(), EvalError> {
        self.set_field(name, value);
        Ok(())
    }
}
