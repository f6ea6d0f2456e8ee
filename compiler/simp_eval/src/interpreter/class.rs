//! Class instantiation.
//!
//! Each class in the inheritance chain gets its own environment, a child of
//! the scope the class was declared in, binding:
//! - `this`: the instance under construction
//! - `base`: an object holding the superclass's methods (subclasses only)
//! - `super`: the superclass's constructor (subclasses only)
//!
//! The chain is applied root first, so a subclass's field defaults and
//! methods overwrite inherited ones in the instance's field map.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::Interpreter;
use crate::errors::EvalError;
use crate::value::{ClassValue, FunctionValue, InstanceValue};
use crate::{EvalResult, Mutability, Value};

/// What one level of the chain contributes to the levels below it.
struct BoundClass {
    /// Every method visible at this level, inherited ones included.
    methods: FxHashMap<String, Value>,
    constructor: Option<Rc<FunctionValue>>,
}

impl Interpreter {
    #[tracing::instrument(level = "debug", skip_all, fields(class = class.name()))]
    pub(crate) fn instantiate(&mut self, class: &ClassValue, args: Vec<Value>) -> EvalResult {
        let instance = Rc::new(InstanceValue::new(class.name()));
        let bound = self.bind_class(class, &instance)?;
        if let Some(constructor) = bound.constructor {
            self.call_function(&constructor, args)?;
        }
        Ok(Value::Instance(instance))
    }

    fn bind_class(
        &mut self,
        class: &ClassValue,
        instance: &Rc<InstanceValue>,
    ) -> Result<BoundClass, EvalError> {
        let env = class.closure().child();
        env.define_with(
            "this",
            Value::Instance(Rc::clone(instance)),
            Mutability::Immutable,
        );

        let mut methods = FxHashMap::default();
        if let Some(superclass) = class.superclass() {
            let inherited = self.bind_class(superclass, instance)?;

            let base = InstanceValue::new(superclass.name());
            for (name, method) in &inherited.methods {
                base.set_field(name.clone(), method.clone());
            }
            env.define_with("base", Value::Instance(Rc::new(base)), Mutability::Immutable);

            let super_ctor = match inherited.constructor {
                Some(ctor) => Value::Function(ctor),
                None => Value::native("super", 0, |_| Ok(Value::Null)),
            };
            env.define_with("super", super_ctor, Mutability::Immutable);

            methods = inherited.methods;
        }

        {
            let mut scoped = self.enter(env.clone());
            for field in &class.decl().fields {
                let value = scoped.eval(&field.value)?;
                instance.set_field(field.name.lexeme.clone(), value);
            }
        }

        for decl in &class.decl().methods {
            let method = Value::Function(Rc::new(FunctionValue::user(
                Rc::clone(decl),
                env.clone(),
            )));
            instance.set_field(decl.name.lexeme.clone(), method.clone());
            methods.insert(decl.name.lexeme.clone(), method);
        }

        let constructor = class
            .decl()
            .constructor
            .as_ref()
            .map(|decl| Rc::new(FunctionValue::user(Rc::clone(decl), env.clone())));

        Ok(BoundClass {
            methods,
            constructor,
        })
    }
}
