//! Type-name grammar: primitive name, user class name, array suffix, or a
//! structural object type. Parsed but never deeply checked here — that's
//! the semantic analyzer's job.

use crate::error::ParseError;
use crate::Parser;
use lng_lex::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveType {
    Int,
    Float,
    String,
    Bool,
    Char,
    Void,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
    Primitive(PrimitiveType),
    Named(String),
    Array(Box<TypeName>),
    Object(Vec<(String, TypeName)>),
}

impl<'a> Parser<'a> {
    /// Parses a base type then zero or more trailing `[]` suffixes.
    pub(crate) fn parse_type(&mut self) -> Result<TypeName, ParseError> {
        let mut ty = self.parse_type_primary()?;
        while self.check(TokenKind::LBracket) && self.check_next(TokenKind::RBracket) {
            self.advance();
            self.advance();
            ty = TypeName::Array(Box::new(ty));
        }
        Ok(ty)
    }

    fn parse_type_primary(&mut self) -> Result<TypeName, ParseError> {
        if let Some(primitive) = self.match_primitive_type() {
            return Ok(TypeName::Primitive(primitive));
        }

        if self.check(TokenKind::LBrace) {
            return self.parse_object_type();
        }

        if self.check(TokenKind::Ident) {
            let name = self.advance().value.as_ident().unwrap().to_string();
            // `void` is a primitive per the type grammar but is not a
            // reserved keyword, so it reaches here as a plain identifier.
            if name == "void" {
                return Ok(TypeName::Primitive(PrimitiveType::Void));
            }
            return Ok(TypeName::Named(name));
        }

        Err(self.error_at_current("expected a type name"))
    }

    fn parse_object_type(&mut self) -> Result<TypeName, ParseError> {
        self.consume(TokenKind::LBrace, "expected '{'")?;
        let mut fields = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let field_name = self
                    .consume(TokenKind::Ident, "expected field name")?
                    .value
                    .as_ident()
                    .unwrap()
                    .to_string();
                self.consume(TokenKind::Colon, "expected ':' after field name")?;
                let field_type = self.parse_type()?;
                fields.push((field_name, field_type));
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RBrace, "expected '}' to close structural type")?;
        Ok(TypeName::Object(fields))
    }

    fn match_primitive_type(&mut self) -> Option<PrimitiveType> {
        let primitive = match self.peek().kind {
            TokenKind::TypeInt => PrimitiveType::Int,
            TokenKind::TypeFloat => PrimitiveType::Float,
            TokenKind::TypeString => PrimitiveType::String,
            TokenKind::TypeBool => PrimitiveType::Bool,
            TokenKind::TypeChar => PrimitiveType::Char,
            _ => return None,
        };
        self.advance();
        Some(primitive)
    }
}
