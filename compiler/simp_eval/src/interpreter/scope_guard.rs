//! RAII guard for the interpreter's current environment.
//!
//! [`ScopedInterpreter`] swaps an environment in and puts the previous one
//! back when dropped, so early returns, `?` propagation, and unwinding all
//! restore the cursor.
//!
//! ```text
//! {
//!     let mut scoped = interpreter.scoped();
//!     scoped.env.define(name, value);
//!     scoped.execute_block(body)?;
//! } // previous environment restored here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::{Environment, Value};

/// Access the interpreter through this guard; it derefs to `Interpreter`.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    previous: Option<Environment<Value>>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.env = previous;
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a fresh child of the current environment.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        let child = self.env.child();
        self.enter(child)
    }

    /// Make `env` current until the guard drops.
    pub fn enter(&mut self, env: Environment<Value>) -> ScopedInterpreter<'_> {
        let previous = std::mem::replace(&mut self.env, env);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }

    pub fn current_env(&self) -> &Environment<Value> {
        &self.env
    }
}
