//! Parse error type.

use thiserror::Error;

/// A recoverable parse error: an unexpected or missing token. The parser
/// records these and resynchronizes rather than aborting (see
/// `Parser::synchronize`).
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub line: u32,
    pub message: String,
}

impl ParseError {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}
