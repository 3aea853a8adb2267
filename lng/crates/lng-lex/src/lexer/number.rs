//! Number literal lexing.
//!
//! Decimal integers and floats only: no hex/binary/octal prefixes and no
//! exponent notation. A literal is a float exactly when it has a `.`
//! followed by at least one digit.

use super::core::Lexer;
use crate::token::{Token, TokenKind, TokenValue};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor().position();

        while self.cursor().current_char().is_ascii_digit() {
            self.cursor().advance();
        }

        let is_float =
            self.cursor().current_char() == '.' && self.cursor().peek_char(1).is_ascii_digit();

        if is_float {
            self.cursor().advance(); // '.'
            while self.cursor().current_char().is_ascii_digit() {
                self.cursor().advance();
            }
            let text = self.cursor().slice_from(start);
            match text.parse::<f64>() {
                Ok(value) => self.make(TokenKind::Float, TokenValue::Float(value)),
                Err(e) => {
                    self.error(format!("invalid float literal '{text}': {e}"));
                    self.make(TokenKind::Float, TokenValue::Float(0.0))
                }
            }
        } else {
            let text = self.cursor().slice_from(start);
            match text.parse::<i64>() {
                Ok(value) => self.make(TokenKind::Int, TokenValue::Int(value)),
                Err(e) => {
                    self.error(format!("invalid integer literal '{text}': {e}"));
                    self.make(TokenKind::Int, TokenValue::Int(0))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenValue;

    #[test]
    fn integer_literal() {
        let (tokens, errors) = Lexer::new("42").tokenize();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].value, TokenValue::Int(42));
    }

    #[test]
    fn float_literal() {
        let (tokens, errors) = Lexer::new("2.5").tokenize();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].value, TokenValue::Float(2.5));
    }

    #[test]
    fn dot_without_trailing_digit_is_not_float() {
        let (tokens, _) = Lexer::new("42.foo").tokenize();
        assert_eq!(tokens[0].value, TokenValue::Int(42));
    }

    #[test]
    fn no_exponent_notation() {
        // `1e10` lexes as the int 1, then identifier `e10`.
        let (tokens, _) = Lexer::new("1e10").tokenize();
        assert_eq!(tokens[0].value, TokenValue::Int(1));
        assert_eq!(tokens[1].value, TokenValue::Ident("e10".to_string()));
    }
}
