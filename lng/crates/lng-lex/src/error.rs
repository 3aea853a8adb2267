//! Lexical error type.

use thiserror::Error;

/// A non-fatal lexical error: an unknown character, an unterminated
/// string or block comment, or a disallowed bitwise operator. The lexer
/// records these and keeps scanning past the offending character.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct LexError {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl LexError {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}
