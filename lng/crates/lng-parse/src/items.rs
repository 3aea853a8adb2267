//! Variable and function declarations.

use crate::ast::{FunctionDecl, Param, VariableDecl};
use crate::error::ParseError;
use crate::Parser;
use lng_lex::TokenKind;

impl<'a> Parser<'a> {
    /// `("var" | "const") ident (":" type)? ("=" expr)? ";"`
    ///
    /// A `const` with no initializer is a parse error — constants must be
    /// initialized where they're declared.
    pub(crate) fn variable_declaration(&mut self, is_const: bool) -> Result<VariableDecl, ParseError> {
        let line = self.advance().line; // consume 'var' / 'const'
        let name = self
            .consume(TokenKind::Ident, "expected a variable name")?
            .value
            .as_ident()
            .unwrap()
            .to_string();

        let declared_type = if self.match_kind(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let initializer = if self.match_kind(TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };

        if is_const && initializer.is_none() {
            return Err(ParseError::new(line, "constants must be initialized"));
        }

        self.consume(TokenKind::Semicolon, "expected ';' after variable declaration")?;

        Ok(VariableDecl { name, declared_type, initializer, is_const, line })
    }

    /// `"function" ident "(" params? ")" (":" type)? block`
    pub(crate) fn function_declaration(&mut self) -> Result<FunctionDecl, ParseError> {
        let line = self.advance().line; // consume 'function'
        let name = self
            .consume(TokenKind::Ident, "expected a function name")?
            .value
            .as_ident()
            .unwrap()
            .to_string();

        let params = self.parse_params()?;

        let return_type = if self.match_kind(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = self.block()?;

        Ok(FunctionDecl { name, params, return_type, body, line })
    }

    /// `"(" (ident (":" type)? ("," ident (":" type)?)*)? ")"`
    pub(crate) fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        self.consume(TokenKind::LParen, "expected '(' to start parameter list")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let name = self
                    .consume(TokenKind::Ident, "expected a parameter name")?
                    .value
                    .as_ident()
                    .unwrap()
                    .to_string();
                let type_name = if self.match_kind(TokenKind::Colon) {
                    Some(self.parse_type()?)
                } else {
                    None
                };
                params.push(Param { name, type_name });
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, "expected ')' after parameters")?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Stmt;
    use crate::parse;

    #[test]
    fn variable_without_type_or_initializer() {
        let (program, errors) = parse("var x;");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::VariableDecl(decl) => {
                assert_eq!(decl.name, "x");
                assert!(decl.declared_type.is_none());
                assert!(decl.initializer.is_none());
            }
            other => panic!("expected VariableDecl, got {other:?}"),
        }
    }

    #[test]
    fn const_with_initializer_is_accepted() {
        let (program, errors) = parse("const PI: float = 3.14;");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::VariableDecl(decl) => assert!(decl.is_const),
            other => panic!("expected VariableDecl, got {other:?}"),
        }
    }

    #[test]
    fn function_with_typed_params_and_return_type() {
        let (program, errors) = parse("function add(a: int, b: int): int { return a + b; }");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::FunctionDecl(decl) => {
                assert_eq!(decl.name, "add");
                assert_eq!(decl.params.len(), 2);
                assert!(decl.return_type.is_some());
            }
            other => panic!("expected FunctionDecl, got {other:?}"),
        }
    }

    #[test]
    fn function_with_no_params() {
        let (program, errors) = parse("function main() { }");
        assert!(errors.is_empty(), "{errors:?}");
        assert!(matches!(program.statements[0], Stmt::FunctionDecl(_)));
    }
}
