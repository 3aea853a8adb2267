//! String literal lexing.
//!
//! A string opens with either `'` or `"` and closes with the matching
//! quote. Embedded newlines are permitted and advance the line counter;
//! running off the end of the source before the closing quote is a
//! lexical error. There is no escape-sequence syntax.

use super::core::Lexer;
use crate::token::{Token, TokenKind, TokenValue};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self, quote: char) -> Token {
        self.cursor().advance(); // opening quote
        let mut content = String::new();

        loop {
            if self.cursor().is_at_end() {
                self.error("unterminated string literal");
                break;
            }
            let c = self.cursor().current_char();
            if c == quote {
                self.cursor().advance();
                break;
            }
            content.push(c);
            self.cursor().advance();
        }

        self.make(TokenKind::Str, TokenValue::Str(content))
    }
}
