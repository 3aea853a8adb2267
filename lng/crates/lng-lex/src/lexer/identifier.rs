//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use super::core::{is_alpha, is_alphanumeric, Lexer};
use crate::token::{Token, TokenKind, TokenValue};

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters or underscores. After reading the
    /// identifier, checks it against the exact keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.cursor().position();
        while is_alphanumeric(self.cursor().current_char()) {
            self.cursor().advance();
        }
        let text = self.cursor().slice_from(start);

        match keyword_kind(text) {
            Some(TokenKind::True) => self.make(TokenKind::True, TokenValue::Bool(true)),
            Some(TokenKind::False) => self.make(TokenKind::False, TokenValue::Bool(false)),
            Some(TokenKind::Null) => self.make(TokenKind::Null, TokenValue::Null),
            Some(kind) => self.make(kind, TokenValue::None),
            None => self.make(TokenKind::Ident, TokenValue::Ident(text.to_string())),
        }
    }
}

fn keyword_kind(text: &str) -> Option<TokenKind> {
    debug_assert!(text.chars().next().map(is_alpha).unwrap_or(false));
    Some(match text {
        "var" => TokenKind::Var,
        "const" => TokenKind::Const,
        "function" => TokenKind::Function,
        "return" => TokenKind::Return,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "class" => TokenKind::Class,
        "extends" => TokenKind::Extends,
        "constructor" => TokenKind::Constructor,
        "import" => TokenKind::Import,
        "as" => TokenKind::As,
        "int" => TokenKind::TypeInt,
        "float" => TokenKind::TypeFloat,
        "string" => TokenKind::TypeString,
        "bool" => TokenKind::TypeBool,
        "char" => TokenKind::TypeChar,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        _ => return None,
    })
}
