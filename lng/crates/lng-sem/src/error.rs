//! Semantic error type.

use thiserror::Error;

/// A rule violation from the single-pass analyzer. Never fatal — the
/// analyzer collects every violation it finds and keeps walking.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct SemanticError {
    pub line: u32,
    pub message: String,
}

impl SemanticError {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}
