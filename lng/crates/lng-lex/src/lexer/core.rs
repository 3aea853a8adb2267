//! Core lexer: dispatch loop and the pieces too small to deserve their
//! own submodule (punctuation, whitespace).

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind, TokenValue};

/// Scans a source string into a token stream.
///
/// Single-pass, greedy, and never aborts: an unknown character or an
/// unterminated literal is recorded as a [`LexError`] and scanning
/// continues past it, so one bad character never prevents reporting
/// errors elsewhere in the file.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    errors: Vec<LexError>,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Tokenizes the whole source, returning the token vector (terminated
    /// by a single `Eof` token) and any lexical errors collected along
    /// the way.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        (tokens, self.errors)
    }

    pub(crate) fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof, TokenValue::None);
        }

        let c = self.cursor.current_char();
        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            ';' => self.single(TokenKind::Semicolon),
            ':' => self.single(TokenKind::Colon),

            '+' => self.composite('=', TokenKind::Plus, TokenKind::PlusEq),
            '-' => self.composite('=', TokenKind::Minus, TokenKind::MinusEq),
            '*' => self.composite('=', TokenKind::Mul, TokenKind::MulEq),
            '%' => self.composite('=', TokenKind::Mod, TokenKind::ModEq),
            '!' => self.composite('=', TokenKind::Not, TokenKind::NotEq),
            '=' => self.composite('=', TokenKind::Eq, TokenKind::EqEq),
            '<' => self.composite('=', TokenKind::Less, TokenKind::LessEq),
            '>' => self.composite('=', TokenKind::Greater, TokenKind::GreaterEq),

            '/' => self.lex_slash(),

            '&' => {
                self.cursor.advance();
                if self.cursor.match_char('&') {
                    self.make(TokenKind::And, TokenValue::None)
                } else {
                    self.error("unexpected character '&' (bitwise '&' is not supported)");
                    self.next_token()
                }
            }
            '|' => {
                self.cursor.advance();
                if self.cursor.match_char('|') {
                    self.make(TokenKind::Or, TokenValue::None)
                } else {
                    self.error("unexpected character '|' (bitwise '|' is not supported)");
                    self.next_token()
                }
            }
            '^' => {
                self.cursor.advance();
                self.error("unexpected character '^' (bitwise '^' is not supported)");
                self.next_token()
            }

            '"' | '\'' => self.lex_string(c),

            c if c.is_ascii_digit() => self.lex_number(),
            c if is_alpha(c) => self.lex_identifier(),

            other => {
                self.cursor.advance();
                self.error(format!("unknown character: '{other}'"));
                self.next_token()
            }
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    pub(crate) fn skip_block_comment(&mut self) {
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
        self.errors.push(LexError::new(
            start_line,
            start_column,
            "unterminated block comment",
        ));
    }

    pub(crate) fn make(&mut self, kind: TokenKind, value: TokenValue) -> Token {
        Token::new(kind, value, self.token_start_line, self.token_start_column)
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(LexError::new(
            self.cursor.line(),
            self.cursor.column(),
            message,
        ));
    }

    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }
}

pub(crate) fn is_alpha(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub(crate) fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
