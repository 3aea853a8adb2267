//! Class descriptors and instances.

use std::rc::Rc;

use lng_util::FxHashMap;

use crate::value::{UserFunction, Value};

/// Metadata for a declared class: its methods and optional constructor,
/// plus a link to the superclass for method lookup. Method lookup
/// recurses into `superclass` on miss so overrides in a subclass win.
#[derive(Debug)]
pub struct ClassDescriptor {
    pub name: String,
    pub superclass: Option<Rc<ClassDescriptor>>,
    pub methods: FxHashMap<String, Rc<UserFunction>>,
    pub constructor: Option<Rc<UserFunction>>,
}

impl ClassDescriptor {
    pub fn find_method(&self, name: &str) -> Option<Rc<UserFunction>> {
        if let Some(method) = self.methods.get(name) {
            return Some(Rc::clone(method));
        }
        self.superclass.as_ref()?.find_method(name)
    }

    /// A subclass that declares no constructor of its own inherits the
    /// nearest ancestor's, same as method lookup.
    pub fn find_constructor(&self) -> Option<Rc<UserFunction>> {
        self.constructor.clone().or_else(|| self.superclass.as_ref()?.find_constructor())
    }
}

/// A runtime instance. Fields are created on first write, not seeded
/// from the class's field declarations (the language contract stores
/// no default field values on the descriptor).
#[derive(Debug)]
pub struct Instance {
    pub class: Rc<ClassDescriptor>,
    pub fields: FxHashMap<String, Value>,
}
