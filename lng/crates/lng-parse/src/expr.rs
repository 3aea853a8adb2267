//! Expression parsing: one method per precedence level, each calling the
//! next-tighter level for its operands (precedence climbing).
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | assignment | `= += -= *= /= %=` | Right |
//! | logical or | `\|\|` | Left |
//! | logical and | `&&` | Left |
//! | equality | `== !=` | Left |
//! | comparison | `< <= > >=` | Left |
//! | term | `+ -` | Left |
//! | factor | `* / %` | Left |
//! | unary | prefix `! -` | Right |
//! | call/postfix | `(args)` `.member` `[index]` | Left |
//! | primary | literals, identifiers, `(expr)`, array/object literals | - |

use crate::ast::{AssignOp, BinaryOp, Expr, LiteralValue, UnaryOp};
use crate::error::ParseError;
use crate::Parser;
use lng_lex::{TokenKind, TokenValue};

impl<'a> Parser<'a> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.logical_or()?;

        let op = match self.peek().kind {
            TokenKind::Eq => Some(AssignOp::Eq),
            TokenKind::PlusEq => Some(AssignOp::PlusEq),
            TokenKind::MinusEq => Some(AssignOp::MinusEq),
            TokenKind::MulEq => Some(AssignOp::MulEq),
            TokenKind::DivEq => Some(AssignOp::DivEq),
            TokenKind::ModEq => Some(AssignOp::ModEq),
            _ => None,
        };

        let Some(op) = op else {
            return Ok(target);
        };

        let line = self.peek().line;
        self.advance();
        let value = self.assignment()?; // right-associative

        if !target.is_assignable() {
            return Err(ParseError::new(
                target.line(),
                "invalid assignment target: expected an identifier, member access, or index access",
            ));
        }

        Ok(Expr::Assignment { target: Box::new(target), op, value: Box::new(value), line })
    }

    fn logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.logical_and()?;
        while self.check(TokenKind::Or) {
            let line = self.advance().line;
            let right = self.logical_and()?;
            left = Expr::BinaryOp { left: Box::new(left), op: BinaryOp::Or, right: Box::new(right), line };
        }
        Ok(left)
    }

    fn logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;
        while self.check(TokenKind::And) {
            let line = self.advance().line;
            let right = self.equality()?;
            left = Expr::BinaryOp { left: Box::new(left), op: BinaryOp::And, right: Box::new(right), line };
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.comparison()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => BinaryOp::EqEq,
                TokenKind::NotEq => BinaryOp::NotEq,
                _ => break,
            };
            let line = self.advance().line;
            let right = self.comparison()?;
            left = Expr::BinaryOp { left: Box::new(left), op, right: Box::new(right), line };
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEq => BinaryOp::LessEq,
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEq => BinaryOp::GreaterEq,
                _ => break,
            };
            let line = self.advance().line;
            let right = self.term()?;
            left = Expr::BinaryOp { left: Box::new(left), op, right: Box::new(right), line };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.factor()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Plus,
                TokenKind::Minus => BinaryOp::Minus,
                _ => break,
            };
            let line = self.advance().line;
            let right = self.factor()?;
            left = Expr::BinaryOp { left: Box::new(left), op, right: Box::new(right), line };
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Mul => BinaryOp::Mul,
                TokenKind::Div => BinaryOp::Div,
                TokenKind::Mod => BinaryOp::Mod,
                _ => break,
            };
            let line = self.advance().line;
            let right = self.unary()?;
            left = Expr::BinaryOp { left: Box::new(left), op, right: Box::new(right), line };
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Minus,
            _ => return self.call_or_postfix(),
        };
        let line = self.advance().line;
        let operand = self.unary()?; // right-associative
        Ok(Expr::UnaryOp { op, operand: Box::new(operand), line })
    }

    fn call_or_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        loop {
            expr = match self.peek().kind {
                TokenKind::LParen => self.finish_call(expr)?,
                TokenKind::Dot => self.finish_member_access(expr)?,
                TokenKind::LBracket => self.finish_index_access(expr)?,
                _ => break,
            };
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let line = self.advance().line; // consume '('
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                arguments.push(self.expression()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, "expected ')' after arguments")?;
        Ok(Expr::FunctionCall { callee: Box::new(callee), arguments, line })
    }

    fn finish_member_access(&mut self, target: Expr) -> Result<Expr, ParseError> {
        let line = self.advance().line; // consume '.'
        let member = self
            .consume(TokenKind::Ident, "expected property name after '.'")?
            .value
            .as_ident()
            .unwrap()
            .to_string();
        Ok(Expr::MemberAccess { target: Box::new(target), member, line })
    }

    fn finish_index_access(&mut self, target: Expr) -> Result<Expr, ParseError> {
        let line = self.advance().line; // consume '['
        let index = self.expression()?;
        self.consume(TokenKind::RBracket, "expected ']' after index expression")?;
        Ok(Expr::IndexAccess { target: Box::new(target), index: Box::new(index), line })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Int => {
                self.advance();
                let TokenValue::Int(value) = token.value else { unreachable!() };
                Ok(Expr::Literal { value: LiteralValue::Int(value), line: token.line })
            }
            TokenKind::Float => {
                self.advance();
                let TokenValue::Float(value) = token.value else { unreachable!() };
                Ok(Expr::Literal { value: LiteralValue::Float(value), line: token.line })
            }
            TokenKind::Str => {
                self.advance();
                let TokenValue::Str(value) = token.value else { unreachable!() };
                Ok(Expr::Literal { value: LiteralValue::Str(value), line: token.line })
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Literal { value: LiteralValue::Bool(true), line: token.line })
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Literal { value: LiteralValue::Bool(false), line: token.line })
            }
            TokenKind::Null => {
                self.advance();
                Ok(Expr::Literal { value: LiteralValue::Null, line: token.line })
            }
            TokenKind::Ident => {
                self.advance();
                let name = token.value.as_ident().unwrap().to_string();
                Ok(Expr::Identifier { name, line: token.line })
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(TokenKind::RParen, "expected ')' after expression")?;
                Ok(expr)
            }
            TokenKind::LBracket => self.array_literal(),
            TokenKind::LBrace => self.object_literal(),
            _ => Err(self.error_at_current(format!("expected an expression, found {:?}", token.kind))),
        }
    }

    fn array_literal(&mut self) -> Result<Expr, ParseError> {
        let line = self.advance().line; // consume '['
        let mut elements = Vec::new();
        if !self.check(TokenKind::RBracket) {
            loop {
                elements.push(self.expression()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RBracket, "expected ']' after array elements")?;
        Ok(Expr::ArrayLiteral { elements, line })
    }

    fn object_literal(&mut self) -> Result<Expr, ParseError> {
        let line = self.advance().line; // consume '{'
        let mut properties = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let key = self
                    .consume(TokenKind::Ident, "expected property name")?
                    .value
                    .as_ident()
                    .unwrap()
                    .to_string();
                self.consume(TokenKind::Colon, "expected ':' after property name")?;
                let value = self.expression()?;
                properties.push((key, value));
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RBrace, "expected '}' after object properties")?;
        Ok(Expr::ObjectLiteral { properties, line })
    }
}
