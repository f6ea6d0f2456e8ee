use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use simp_ir::{ClassDecl, FunctionDecl};

use super::Value;
use crate::{Environment, EvalResult};

/// Host callback behind a native function.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> EvalResult>;

/// A mutable, growable sequence.
pub struct ArrayValue {
    items: RefCell<Vec<Value>>,
}

impl ArrayValue {
    /// Largest length an index write may grow an array to.
    pub const MAX_LEN: usize = 1 << 24;

    pub fn new(items: Vec<Value>) -> Self {
        ArrayValue {
            items: RefCell::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.borrow().get(index).cloned()
    }

    /// Write at `index`, padding any gap with `null`.
    ///
    /// Returns `false`, leaving the array untouched, when the write would
    /// grow it past [`ArrayValue::MAX_LEN`] or the allocation fails.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut items = self.items.borrow_mut();
        if index < items.len() {
            items[index] = value;
            return true;
        }
        let len = items.len();
        if index >= Self::MAX_LEN || items.try_reserve(index + 1 - len).is_err() {
            return false;
        }
        items.resize(index, Value::Null);
        items.push(value);
        true
    }

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }
}

pub enum FunctionKind {
    /// A `function` declaration or class method, closed over its
    /// defining environment.
    User {
        decl: Rc<FunctionDecl>,
        closure: Environment<Value>,
    },
    Native { arity: usize, callback: NativeFn },
}

pub struct FunctionValue {
    name: String,
    kind: FunctionKind,
}

impl FunctionValue {
    pub fn user(decl: Rc<FunctionDecl>, closure: Environment<Value>) -> Self {
        FunctionValue {
            name: decl.name.lexeme.clone(),
            kind: FunctionKind::User { decl, closure },
        }
    }

    pub fn native(name: impl Into<String>, arity: usize, callback: NativeFn) -> Self {
        FunctionValue {
            name: name.into(),
            kind: FunctionKind::Native { arity, callback },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    pub fn is_native(&self) -> bool {
        matches!(self.kind, FunctionKind::Native { .. })
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arity = match &self.kind {
            FunctionKind::User { decl, .. } => decl.arity(),
            FunctionKind::Native { arity, .. } => *arity,
        };
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("arity", &arity)
            .field("native", &self.is_native())
            .finish()
    }
}

/// A class declaration evaluated in its defining environment.
///
/// The superclass is resolved when the declaration runs, so the chain
/// always points at classes created earlier.
pub struct ClassValue {
    decl: Rc<ClassDecl>,
    closure: Environment<Value>,
    superclass: Option<Rc<ClassValue>>,
}

impl ClassValue {
    pub fn new(
        decl: Rc<ClassDecl>,
        closure: Environment<Value>,
        superclass: Option<Rc<ClassValue>>,
    ) -> Self {
        ClassValue {
            decl,
            closure,
            superclass,
        }
    }

    pub fn name(&self) -> &str {
        &self.decl.name.lexeme
    }

    pub fn decl(&self) -> &ClassDecl {
        &self.decl
    }

    pub fn closure(&self) -> &Environment<Value> {
        &self.closure
    }

    pub fn superclass(&self) -> Option<&Rc<ClassValue>> {
        self.superclass.as_ref()
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassValue")
            .field("name", &self.name())
            .field("superclass", &self.superclass.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// An object: a class name plus an open field map.
///
/// Bound methods live in the field map next to data fields.
pub struct InstanceValue {
    class_name: String,
    fields: RefCell<FxHashMap<String, Value>>,
}

impl InstanceValue {
    pub fn new(class_name: impl Into<String>) -> Self {
        InstanceValue {
            class_name: class_name.into(),
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.fields.borrow_mut().insert(name.into(), value);
    }

    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for InstanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceValue")
            .field("class_name", &self.class_name)
            .field("fields", &self.field_names())
            .finish()
    }
}
