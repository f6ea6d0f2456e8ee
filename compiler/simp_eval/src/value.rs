//! Runtime values.
//!
//! [`Value`] is a closed tagged union. Heap variants are reference counted:
//! cloning a `Value` never copies an array, function, class, or instance.
//! What a value can do beyond the conversions below is expressed through
//! the capability traits in [`capability`].

mod capability;
mod heap;

pub use capability::{Callable, DotAccess, IndexAccess};
pub use heap::{ArrayValue, ClassValue, FunctionKind, FunctionValue, InstanceValue, NativeFn};

use std::fmt;
use std::rc::Rc;

use crate::errors::{not_a_number, EvalError};

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Array(Rc<ArrayValue>),
    Function(Rc<FunctionValue>),
    Class(Rc<ClassValue>),
    Instance(Rc<InstanceValue>),
}

/// The underlying primitive of a value, used for equality.
///
/// Heap values compare by identity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawValue<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Str(&'a str),
    Ref(*const ()),
}

impl Value {
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(ArrayValue::new(items)))
    }

    /// A host function with a fixed arity.
    pub fn native<F>(name: impl Into<String>, arity: usize, callback: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, EvalError> + 'static,
    {
        Value::Function(Rc::new(FunctionValue::native(name, arity, Rc::new(callback))))
    }

    pub fn from_len(len: usize) -> Self {
        Value::Number(len_to_f64(len))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::Class(_) => "class",
            Value::Instance(_) => "instance",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric projection. Strings are parsed; functions, classes, and
    /// instances have none.
    pub fn to_number(&self) -> Result<f64, EvalError> {
        match self {
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => Ok(*n),
            Value::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| not_a_number(format!("string \"{s}\""))),
            Value::Array(items) => Ok(len_to_f64(items.len())),
            Value::Function(_) | Value::Class(_) | Value::Instance(_) => {
                Err(not_a_number(self.type_name()))
            }
        }
    }

    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Function(_) | Value::Class(_) | Value::Instance(_) => true,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, &mut Vec::new());
        out
    }

    /// `seen` holds the arrays currently being printed, so a self-containing
    /// array prints `[...]` instead of recursing forever.
    fn write_text(&self, out: &mut String, seen: &mut Vec<*const ArrayValue>) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::Str(s) => out.push_str(s),
            Value::Array(items) => {
                let ptr = Rc::as_ptr(items);
                if seen.contains(&ptr) {
                    out.push_str("[...]");
                    return;
                }
                seen.push(ptr);
                out.push('[');
                for (i, item) in items.to_vec().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_text(out, seen);
                }
                out.push(']');
                seen.pop();
            }
            Value::Function(func) => {
                if func.is_native() {
                    out.push_str(&format!("<native function {}>", func.name()));
                } else {
                    out.push_str(&format!("<function {}>", func.name()));
                }
            }
            Value::Class(class) => out.push_str(&format!("<class {}>", class.name())),
            Value::Instance(instance) => {
                out.push_str(&format!("<{} instance>", instance.class_name()));
            }
        }
    }

    pub fn to_raw(&self) -> RawValue<'_> {
        match self {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(*b),
            Value::Number(n) => RawValue::Number(*n),
            Value::Str(s) => RawValue::Str(s),
            Value::Array(v) => RawValue::Ref(Rc::as_ptr(v).cast()),
            Value::Function(v) => RawValue::Ref(Rc::as_ptr(v).cast()),
            Value::Class(v) => RawValue::Ref(Rc::as_ptr(v).cast()),
            Value::Instance(v) => RawValue::Ref(Rc::as_ptr(v).cast()),
        }
    }

    /// `==` semantics: null equals only null; otherwise the primitives'
    /// own equality, with no cross-type coercion.
    pub fn equals(&self, other: &Value) -> bool {
        self.to_raw() == other.to_raw()
    }

    pub fn as_indexable(&self) -> Option<&dyn IndexAccess> {
        match self {
            Value::Str(s) => Some(s),
            Value::Array(items) => Some(&**items),
            _ => None,
        }
    }

    pub fn as_dot_accessible(&self) -> Option<&dyn DotAccess> {
        match self {
            Value::Str(s) => Some(s),
            Value::Instance(instance) => Some(&**instance),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&dyn Callable> {
        match self {
            Value::Function(func) => Some(&**func),
            Value::Class(class) => Some(&**class),
            _ => None,
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "lengths beyond 2^53 elements are not reachable"
)]
fn len_to_f64(len: usize) -> f64 {
    len as f64
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            other => write!(f, "{}({})", other.type_name(), other.to_text()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

#[cfg(test)]
mod tests;
