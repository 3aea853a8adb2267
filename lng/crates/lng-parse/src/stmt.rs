//! Statement parsing: blocks, control flow, and expression statements.

use crate::ast::{Block, ForInit, Stmt};
use crate::error::ParseError;
use crate::Parser;
use lng_lex::TokenKind;

impl<'a> Parser<'a> {
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().kind {
            TokenKind::LBrace => self.block().map(Stmt::Block),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Return => self.return_statement(),
            TokenKind::Break => {
                let line = self.advance().line;
                self.consume(TokenKind::Semicolon, "expected ';' after 'break'")?;
                Ok(Stmt::Break { line })
            }
            TokenKind::Continue => {
                let line = self.advance().line;
                self.consume(TokenKind::Semicolon, "expected ';' after 'continue'")?;
                Ok(Stmt::Continue { line })
            }
            _ => self.expression_statement(),
        }
    }

    pub(crate) fn block(&mut self) -> Result<Block, ParseError> {
        self.consume(TokenKind::LBrace, "expected '{'")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize_in_block();
                }
            }
        }
        self.consume(TokenKind::RBrace, "expected '}' to close block")?;
        Ok(Block { statements })
    }

    /// `declaration()` re-raises unrecoverable errors to the caller via
    /// `?`, but inside a block we want to keep collecting sibling
    /// statements instead of abandoning the whole block, so block-level
    /// recovery records the error itself and resyncs locally.
    fn synchronize_in_block(&mut self) {
        let error_line = self.previous().line;
        while !self.is_at_end() && !self.check(TokenKind::RBrace) {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Function
                | TokenKind::Var
                | TokenKind::Const
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return => return,
                _ => {}
            }
            if self.peek().line > error_line {
                return;
            }
            self.advance();
        }
    }

    /// `"if" "(" expr ")" stmt ("else" stmt)?`
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line; // consume 'if'
        self.consume(TokenKind::LParen, "expected '(' after 'if'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RParen, "expected ')' after condition")?;
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If { cond, then_branch, else_branch, line })
    }

    /// `"while" "(" expr ")" stmt`
    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line; // consume 'while'
        self.consume(TokenKind::LParen, "expected '(' after 'while'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RParen, "expected ')' after condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { cond, body, line })
    }

    /// `"for" "(" (varDecl | exprStmt | ";") expr? ";" expr? ")" stmt`
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line; // consume 'for'
        self.consume(TokenKind::LParen, "expected '(' after 'for'")?;

        let init = if self.match_kind(TokenKind::Semicolon) {
            None
        } else if self.check(TokenKind::Var) {
            let decl = self.variable_declaration(false)?;
            Some(Box::new(ForInit::VarDecl(decl)))
        } else {
            let expr = self.expression()?;
            self.consume(TokenKind::Semicolon, "expected ';' after loop initializer")?;
            Some(Box::new(ForInit::Expr(expr)))
        };

        let cond = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "expected ';' after loop condition")?;

        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RParen, "expected ')' after for clauses")?;

        let body = Box::new(self.statement()?);

        Ok(Stmt::For { init, cond, update, body, line })
    }

    /// `"return" expr? ";"`
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line; // consume 'return'
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "expected ';' after return value")?;
        Ok(Stmt::Return { value, line })
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "expected ';' after expression")?;
        Ok(Stmt::Expression(expr))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Stmt;
    use crate::parse;

    #[test]
    fn if_else_parses_both_branches() {
        let (program, errors) = parse("if (1 < 2) { pf(1); } else { pf(2); }");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::If { else_branch, .. } => assert!(else_branch.is_some()),
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn while_loop() {
        let (program, errors) = parse("while (true) { break; }");
        assert!(errors.is_empty(), "{errors:?}");
        assert!(matches!(program.statements[0], Stmt::While { .. }));
    }

    #[test]
    fn for_loop_with_all_three_clauses() {
        let (program, errors) = parse("for (var i = 0; i < 10; i = i + 1) { continue; }");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::For { init, cond, update, .. } => {
                assert!(init.is_some());
                assert!(cond.is_some());
                assert!(update.is_some());
            }
            other => panic!("expected For, got {other:?}"),
        }
    }

    #[test]
    fn for_loop_with_empty_clauses() {
        let (program, errors) = parse("for (;;) { break; }");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::For { init, cond, update, .. } => {
                assert!(init.is_none());
                assert!(cond.is_none());
                assert!(update.is_none());
            }
            other => panic!("expected For, got {other:?}"),
        }
    }

    #[test]
    fn return_with_and_without_value() {
        let (program, errors) = parse("function f() { return 1; }");
        assert!(errors.is_empty(), "{errors:?}");
        let (program2, errors2) = parse("function g() { return; }");
        assert!(errors2.is_empty(), "{errors2:?}");
        let _ = program;
        let _ = program2;
    }

    #[test]
    fn block_recovers_from_an_inner_error_and_keeps_parsing_siblings() {
        let (program, errors) = parse("function f() { var x = ; var y = 2; }");
        assert!(!errors.is_empty());
        match &program.statements[0] {
            Stmt::FunctionDecl(decl) => {
                assert!(decl
                    .body
                    .statements
                    .iter()
                    .any(|s| matches!(s, Stmt::VariableDecl(d) if d.name == "y")));
            }
            other => panic!("expected FunctionDecl, got {other:?}"),
        }
    }
}
