//! Runtime error type.

use thiserror::Error;

/// A fatal error for the current `Run`: arity mismatch, undefined
/// variable, invalid index/key, a type-incompatible operation, or a
/// constructor that returned a non-null value. The interpreter catches
/// this at the top of `interpret` and converts it into the trailing
/// `"Runtime Error: ..."` output line.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct RuntimeError {
    pub message: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
