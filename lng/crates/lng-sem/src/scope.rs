//! Scope stack used by the analyzer for name resolution.
//!
//! Each scope is a flat set of bound names — we only need a presence
//! flag, not a value, since the analyzer checks resolution and
//! redeclaration but never computes anything from a binding.

use lng_util::FxHashSet;

pub struct ScopeStack {
    scopes: Vec<FxHashSet<String>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { scopes: vec![FxHashSet::default()] }
    }

    pub fn enter(&mut self) {
        self.scopes.push(FxHashSet::default());
    }

    pub fn exit(&mut self) {
        self.scopes.pop();
    }

    /// Binds `name` in the current (innermost) scope. Returns `false` if
    /// the name is already bound there — redeclaration in the same
    /// scope is an error, but shadowing an outer scope is fine.
    pub fn declare(&mut self, name: &str) -> bool {
        self.scopes.last_mut().expect("scope stack is never empty").insert(name.to_string())
    }

    /// Whether `name` resolves in this scope or any enclosing one.
    pub fn resolves(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(name))
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadowing_an_outer_scope_is_allowed() {
        let mut scopes = ScopeStack::new();
        assert!(scopes.declare("x"));
        scopes.enter();
        assert!(scopes.declare("x"));
        assert!(scopes.resolves("x"));
    }

    #[test]
    fn redeclaration_in_the_same_scope_is_rejected() {
        let mut scopes = ScopeStack::new();
        assert!(scopes.declare("x"));
        assert!(!scopes.declare("x"));
    }

    #[test]
    fn exiting_a_scope_drops_its_bindings() {
        let mut scopes = ScopeStack::new();
        scopes.enter();
        scopes.declare("x");
        scopes.exit();
        assert!(!scopes.resolves("x"));
    }
}
