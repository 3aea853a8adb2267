//! Lexical scope frames. Environments form a tree with shared parents —
//! `Rc<RefCell<_>>` so a function value captured in an inner scope keeps
//! its defining environment alive after the defining call returns.

use std::cell::RefCell;
use std::rc::Rc;

use lng_util::FxHashMap;

use crate::error::RuntimeError;
use crate::value::Value;

pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Debug)]
pub struct Environment {
    values: FxHashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    pub fn new_global() -> EnvRef {
        Rc::new(RefCell::new(Self { values: FxHashMap::default(), enclosing: None }))
    }

    pub fn new_child(enclosing: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self {
            values: FxHashMap::default(),
            enclosing: Some(Rc::clone(enclosing)),
        }))
    }

    /// Binds `name` in this scope, shadowing any same-named binding in
    /// an enclosing scope.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(env: &EnvRef, name: &str) -> Result<Value, RuntimeError> {
        if let Some(value) = env.borrow().values.get(name) {
            return Ok(value.clone());
        }
        match &env.borrow().enclosing {
            Some(parent) => Environment::get(parent, name),
            None => Err(RuntimeError::new(format!("undefined variable '{name}'"))),
        }
    }

    /// Writes to the nearest enclosing scope that already defines
    /// `name`; undefined targets are a runtime error rather than an
    /// implicit global definition.
    pub fn assign(env: &EnvRef, name: &str, value: Value) -> Result<(), RuntimeError> {
        if env.borrow().values.contains_key(name) {
            env.borrow_mut().values.insert(name.to_string(), value);
            return Ok(());
        }
        let parent = env.borrow().enclosing.clone();
        match parent {
            Some(parent) => Environment::assign(&parent, name, value),
            None => Err(RuntimeError::new(format!("undefined variable '{name}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fall_through_to_an_enclosing_scope() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Int(1));
        let child = Environment::new_child(&global);
        assert!(matches!(Environment::get(&child, "x"), Ok(Value::Int(1))));
    }

    #[test]
    fn assign_writes_to_the_scope_that_defines_the_name() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Int(1));
        let child = Environment::new_child(&global);
        Environment::assign(&child, "x", Value::Int(2)).unwrap();
        assert!(matches!(Environment::get(&global, "x"), Ok(Value::Int(2))));
    }

    #[test]
    fn assigning_an_undefined_name_is_a_runtime_error() {
        let global = Environment::new_global();
        assert!(Environment::assign(&global, "x", Value::Int(1)).is_err());
    }

    #[test]
    fn a_child_scope_can_shadow_without_mutating_the_parent() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Int(1));
        let child = Environment::new_child(&global);
        child.borrow_mut().define("x", Value::Int(99));
        assert!(matches!(Environment::get(&child, "x"), Ok(Value::Int(99))));
        assert!(matches!(Environment::get(&global, "x"), Ok(Value::Int(1))));
    }
}
