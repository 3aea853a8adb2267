//! lng-interp - tree-walking interpreter for LNG programs.
//!
//! Evaluates an already-parsed [`lng_parse::ast::Program`] directly,
//! without a lowering pass: each statement and expression node is
//! executed/evaluated in place. Scoping is modeled with a chain of
//! `Rc<RefCell<Environment>>` frames so a closure captured in an inner
//! scope keeps its defining environment alive after the defining call
//! returns.

mod class;
mod control;
mod environment;
mod error;
mod interpreter;
mod value;

pub use error::RuntimeError;
pub use interpreter::Interpreter;
pub use value::Value;

use lng_parse::ast::Program;

/// Runs `program` with a fresh interpreter and returns its `pf` output,
/// one entry per call, with a trailing `"Runtime Error: ..."` line if
/// execution hit a fatal error.
pub fn interpret(program: &Program) -> Vec<String> {
    Interpreter::new().interpret(program)
}
