//! Operator and punctuation lexing.
//!
//! Every composite operator here is at most two characters wide, decided
//! by a single character of lookahead. `&` and `|` only compose into
//! `&&`/`||`; bare bitwise `&`, `|`, `^` are not part of the language and
//! are reported as lexical errors by the dispatch in `core`.

use super::core::Lexer;
use crate::token::{Token, TokenKind, TokenValue};

impl<'a> Lexer<'a> {
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor().advance();
        self.make(kind, TokenValue::None)
    }

    /// Consumes the first character, then checks for a trailing `=` to
    /// produce the "-eq" composite variant.
    pub(crate) fn composite(&mut self, next: char, plain: TokenKind, eq: TokenKind) -> Token {
        self.cursor().advance();
        if self.cursor().match_char(next) {
            self.make(eq, TokenValue::None)
        } else {
            self.make(plain, TokenValue::None)
        }
    }

    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('/') {
            while !self.cursor().is_at_end() && self.cursor().current_char() != '\n' {
                self.cursor().advance();
            }
            self.next_token()
        } else if self.cursor().match_char('*') {
            self.skip_block_comment();
            self.next_token()
        } else if self.cursor().match_char('=') {
            self.make(TokenKind::DivEq, TokenValue::None)
        } else {
            self.make(TokenKind::Div, TokenValue::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let (tokens, errors) = Lexer::new(src).tokenize();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn compound_assignment_operators() {
        assert_eq!(
            kinds("+= -= *= /= %="),
            vec![
                TokenKind::PlusEq,
                TokenKind::MinusEq,
                TokenKind::MulEq,
                TokenKind::DivEq,
                TokenKind::ModEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comparison_operators() {
        assert_eq!(
            kinds("< <= > >= == !="),
            vec![
                TokenKind::Less,
                TokenKind::LessEq,
                TokenKind::Greater,
                TokenKind::GreaterEq,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn logical_operators_require_doubling() {
        assert_eq!(
            kinds("&& ||"),
            vec![TokenKind::And, TokenKind::Or, TokenKind::Eof]
        );
    }

    #[test]
    fn bare_bitwise_characters_are_lex_errors() {
        let (_, errors) = Lexer::new("a & b").tokenize();
        assert_eq!(errors.len(), 1);
        let (_, errors) = Lexer::new("a | b").tokenize();
        assert_eq!(errors.len(), 1);
        let (_, errors) = Lexer::new("a ^ b").tokenize();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn division_vs_comment() {
        assert_eq!(kinds("1 / 2"), vec![TokenKind::Int, TokenKind::Div, TokenKind::Int, TokenKind::Eof]);
        assert_eq!(kinds("1 // 2"), vec![TokenKind::Int, TokenKind::Eof]);
    }
}
