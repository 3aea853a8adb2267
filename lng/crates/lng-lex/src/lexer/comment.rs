//! Comment skipping.
//!
//! Line comments run from `//` to end of line. Block comments run from
//! `/*` to the first matching `*/`; they do not nest. Both are folded
//! into the whitespace skip in `core` since neither produces a token.
//! This module just covers them with tests.

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{TokenKind, TokenValue};

    #[test]
    fn skip_line_comment() {
        let (tokens, errors) = Lexer::new("// comment\nhello").tokenize();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].value, TokenValue::Ident("hello".to_string()));
    }

    #[test]
    fn skip_block_comment() {
        let (tokens, errors) = Lexer::new("/* comment */hello").tokenize();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].value, TokenValue::Ident("hello".to_string()));
    }

    #[test]
    fn block_comments_do_not_nest() {
        let (tokens, errors) = Lexer::new("/* outer /* inner */ hello */").tokenize();
        assert!(errors.is_empty());
        // The first `*/` closes the comment; ` hello */` is then lexed as code.
        assert_eq!(tokens[0].value, TokenValue::Ident("hello".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Mul);
        assert_eq!(tokens[2].kind, TokenKind::Div);
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let (_, errors) = Lexer::new("/* never closed").tokenize();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("unterminated"));
    }
}
