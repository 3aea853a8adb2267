//! Class declarations: fields, methods, and a single optional constructor.

use crate::ast::{ClassDecl, ClassMember, ConstructorDecl};
use crate::error::ParseError;
use crate::Parser;
use lng_lex::TokenKind;

impl<'a> Parser<'a> {
    /// `"class" ident ("extends" ident)? "{" member* "}"`
    pub(crate) fn class_declaration(&mut self) -> Result<ClassDecl, ParseError> {
        let line = self.advance().line; // consume 'class'
        let name = self
            .consume(TokenKind::Ident, "expected a class name")?
            .value
            .as_ident()
            .unwrap()
            .to_string();

        let super_class = if self.match_kind(TokenKind::Extends) {
            Some(
                self.consume(TokenKind::Ident, "expected a superclass name after 'extends'")?
                    .value
                    .as_ident()
                    .unwrap()
                    .to_string(),
            )
        } else {
            None
        };

        self.consume(TokenKind::LBrace, "expected '{' to start class body")?;
        let mut members = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            members.push(self.class_member()?);
        }
        self.consume(TokenKind::RBrace, "expected '}' to close class body")?;

        Ok(ClassDecl { name, super_class, members, line })
    }

    fn class_member(&mut self) -> Result<ClassMember, ParseError> {
        match self.peek().kind {
            TokenKind::Constructor => self.constructor_declaration().map(ClassMember::Constructor),
            TokenKind::Function => self.function_declaration().map(ClassMember::Method),
            TokenKind::Var => self.variable_declaration(false).map(ClassMember::Field),
            TokenKind::Const => self.variable_declaration(true).map(ClassMember::Field),
            _ => Err(self.error_at_current("expected a field, method, or constructor declaration")),
        }
    }

    /// `"constructor" "(" params? ")" block`
    fn constructor_declaration(&mut self) -> Result<ConstructorDecl, ParseError> {
        let line = self.advance().line; // consume 'constructor'
        let params = self.parse_params()?;
        let body = self.block()?;
        Ok(ConstructorDecl { params, body, line })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{ClassMember, Stmt};
    use crate::parse;

    #[test]
    fn class_with_field_constructor_and_method() {
        let source = r#"
            class Animal {
                var name: string;
                constructor(name: string) {
                    this.name = name;
                }
                function speak(): string {
                    return this.name;
                }
            }
        "#;
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::ClassDecl(decl) => {
                assert_eq!(decl.name, "Animal");
                assert!(decl.super_class.is_none());
                assert_eq!(decl.members.len(), 3);
                assert!(matches!(decl.members[0], ClassMember::Field(_)));
                assert!(matches!(decl.members[1], ClassMember::Constructor(_)));
                assert!(matches!(decl.members[2], ClassMember::Method(_)));
            }
            other => panic!("expected ClassDecl, got {other:?}"),
        }
    }

    #[test]
    fn class_with_extends() {
        let (program, errors) = parse("class Dog extends Animal { }");
        assert!(errors.is_empty(), "{errors:?}");
        match &program.statements[0] {
            Stmt::ClassDecl(decl) => assert_eq!(decl.super_class.as_deref(), Some("Animal")),
            other => panic!("expected ClassDecl, got {other:?}"),
        }
    }
}
