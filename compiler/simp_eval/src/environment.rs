//! Chained lexical scopes.
//!
//! An [`Environment`] is a handle to one scope node. Scopes form a tree: a
//! child points at the scope that was current when it was created, and a
//! closure keeps its defining scope alive by holding a handle to it.
//!
//! The environment is generic over the bound value so the interpreter
//! (binding [`Value`](crate::Value)s) and the semantic analyzer (binding
//! identifier kinds) resolve names with exactly the same walk.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `var x = ...`
    Mutable,
    /// `const x = ...`, and the implicit `this` / `base` / `super`.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why a lookup or assignment failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// The binding exists but is immutable.
    Immutable,
    /// No scope in the chain binds the name.
    Undefined,
}

/// A single-threaded, shared, mutable scope cell.
///
/// All scope allocations go through [`LocalScope::new`]. The wrapper has the
/// same layout as `Rc<RefCell<T>>`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope's bindings plus the link to its enclosing scope.
pub struct Scope<T> {
    bindings: FxHashMap<String, Binding<T>>,
    parent: Option<LocalScope<Scope<T>>>,
}

struct Binding<T> {
    value: T,
    mutability: Mutability,
}

impl<T> Scope<T> {
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    pub fn with_parent(parent: LocalScope<Scope<T>>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope. An existing local binding is overwritten.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: T, mutability: Mutability) {
        self.bindings
            .insert(name.into(), Binding { value, mutability });
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Local names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a scope node; cloning shares the node.
pub struct Environment<T> {
    scope: LocalScope<Scope<T>>,
}

impl<T> Environment<T> {
    /// A root environment with no enclosing scope.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// A fresh scope enclosed by this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// The enclosing scope, if any.
    pub fn enclosing(&self) -> Option<Self> {
        self.scope
            .borrow()
            .parent
            .clone()
            .map(|scope| Environment { scope })
    }

    /// Number of scopes between this one and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.enclosing();
        while let Some(env) = current {
            depth += 1;
            current = env.enclosing();
        }
        depth
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// Define a mutable binding in this scope.
    pub fn define(&self, name: impl Into<String>, value: T) {
        self.define_with(name, value, Mutability::Mutable);
    }

    pub fn define_with(&self, name: impl Into<String>, value: T, mutability: Mutability) {
        self.scope.borrow_mut().define(name, value, mutability);
    }

    /// Whether this scope itself binds `name`; parents are not consulted.
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().contains(name)
    }

    /// Run `f` on the innermost scope binding `name`.
    fn with_binding<R>(&self, name: &str, f: impl FnOnce(&mut Binding<T>) -> R) -> Option<R> {
        let mut scope = self.scope.clone();
        loop {
            let parent = {
                let mut inner = scope.borrow_mut();
                if let Some(binding) = inner.bindings.get_mut(name) {
                    return Some(f(binding));
                }
                inner.parent.clone()
            };
            scope = parent?;
        }
    }
}

impl<T: Clone> Environment<T> {
    /// Resolve `name`, innermost scope first.
    pub fn get(&self, name: &str) -> Result<T, ScopeError> {
        self.get_no_fail(name).ok_or(ScopeError::Undefined)
    }

    /// Resolve `name`; an unbound name yields `None`.
    pub fn get_no_fail(&self, name: &str) -> Option<T> {
        self.with_binding(name, |binding| binding.value.clone())
    }

    /// Rebind the innermost scope that defines `name`.
    pub fn assign(&self, name: &str, value: T) -> Result<(), ScopeError> {
        self.with_binding(name, |binding| {
            if binding.mutability.is_mutable() {
                binding.value = value;
                Ok(())
            } else {
                Err(ScopeError::Immutable)
            }
        })
        .unwrap_or(Err(ScopeError::Undefined))
    }

    /// Like [`assign`](Self::assign), but unbound or immutable names are
    /// silently ignored. Returns whether anything was written.
    pub fn assign_no_fail(&self, name: &str, value: T) -> bool {
        self.assign(name, value).is_ok()
    }
}

impl<T> Clone for Environment<T> {
    fn clone(&self) -> Self {
        Environment {
            scope: self.scope.clone(),
        }
    }
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Prints names only: bound values can hold closures over this very scope.
impl<T> fmt::Debug for Environment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        f.debug_struct("Environment")
            .field("locals", &scope.names())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
