//! lng-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXICAL ANALYSIS THEORY
//! ============================================================================
//!
//! Lexical analysis is the first phase of the pipeline. It transforms a
//! stream of characters into a stream of tokens ("tokenization" or
//! "scanning").
//!
//! The lexer is a function L: Σ* → T* where Σ is the source alphabet and T
//! is the set of tokens. It runs in O(n) time, single-pass, and is
//! context-free: it never looks at surrounding tokens, only characters.
//!
//! LEXEME vs TOKEN:
//! - Lexeme: the raw characters ("var", "123", "+=")
//! - Token: the abstract kind plus any payload (`TokenKind::Var`, `TokenKind::Int`
//!   with `TokenValue::Int(123)`, `TokenKind::PlusEq`)
//!
//! ============================================================================
//! TOKEN CATEGORIES
//! ============================================================================
//!
//! 1. KEYWORDS - reserved words, cannot be used as identifiers: `var`,
//!    `const`, `function`, `return`, `if`, `else`, `while`, `for`, `break`,
//!    `continue`, `class`, `extends`, `constructor`, `import`, `as`.
//! 2. PRIMITIVE TYPE NAMES - `int`, `float`, `string`, `bool`, `char`.
//! 3. IDENTIFIERS - `[a-zA-Z_][a-zA-Z0-9_]*`, anything not a keyword.
//! 4. LITERALS - decimal int/float (no hex/binary/octal, no exponent),
//!    single- or double-quoted strings, `true`/`false`/`null`.
//! 5. OPERATORS - arithmetic (`+ - * / %`), compound assignment
//!    (`+= -= *= /= %=`), comparison (`< <= > >= == !=`), logical (`&& ||`,
//!    `!`). Bitwise `& | ^` are not part of the language.
//! 6. PUNCTUATION - `( ) { } [ ] , . ; :`.
//! 7. SPECIAL - whitespace and comments (`//`, `/* */`) are skipped and
//!    produce no token; `Eof` terminates every token stream.
//!
//! ============================================================================
//! ERROR RECOVERY
//! ============================================================================
//!
//! Panic-mode at the character level: an unknown character, an
//! unterminated string, or an unterminated block comment is recorded as a
//! [`error::LexError`] and scanning resumes at the next character, so a
//! single bad character never stops the rest of the file from being
//! tokenized.
//!
//! ```text
//! Source: var @x = 5;
//!             ↑ invalid
//!
//! Error: "unknown character: '@'"
//! Tokens: [Var] [Ident("x")] [Eq] [Int(5)] [Semicolon] [Eof]
//! ```
//!
//! ============================================================================
//! SOURCE LOCATION TRACKING
//! ============================================================================
//!
//! Every token carries the 1-based line/column of its first character, so
//! downstream stages (parser, analyzer, interpreter) can report errors at
//! the exact source position without re-scanning.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenValue};

/// Tokenizes `source`, returning the token stream (`Eof`-terminated) and
/// any lexical errors collected along the way.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_just_eof() {
        let (tokens, errors) = tokenize("");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn full_statement() {
        let (tokens, errors) = tokenize("var x: int = 1 + 2;");
        assert!(errors.is_empty());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Var,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::TypeInt,
                TokenKind::Eq,
                TokenKind::Int,
                TokenKind::Plus,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn line_and_column_tracking_across_lines() {
        let (tokens, _) = tokenize("var x = 1;\nvar y = 2;");
        let second_var = tokens.iter().find(|t| t.kind == TokenKind::Var).unwrap();
        assert_eq!(second_var.line, 1);
        let y_line_var = tokens
            .iter()
            .skip_while(|t| t.line == 1)
            .find(|t| t.kind == TokenKind::Var);
        assert_eq!(y_line_var.unwrap().line, 2);
    }
}
