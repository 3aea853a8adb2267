//! lng-sem - single-pass semantic analyzer
//!
//! Walks the parsed AST once, maintaining a stack of scopes (name ->
//! presence), a set of declared type names seeded with the primitives,
//! and an `in_loop` flag, enforcing the rules from the language
//! contract: name resolution, redeclaration, const initialization, loop
//! context, type-name validity, class declaration, assignment targets,
//! and traversal of composite expressions. The analyzer never aborts —
//! it collects every violation and returns the full list.

mod error;
mod scope;

pub use error::SemanticError;

use lng_parse::ast::{
    Block, ClassDecl, ClassMember, Expr, ForInit, FunctionDecl, Program, Stmt, VariableDecl,
};
use lng_parse::types::TypeName;
use lng_util::FxHashSet;
use scope::ScopeStack;

const NATIVE_BINDINGS: [&str; 2] = ["pf", "clock"];
const PRIMITIVE_TYPE_NAMES: [&str; 6] = ["int", "float", "string", "bool", "char", "void"];

/// Analyzes a parsed program, returning every rule violation found. Never
/// aborts early — the caller decides whether a non-empty list gates
/// execution (it does, per the static gate: a non-empty result means the
/// interpreter does not run).
pub fn analyze(program: &Program) -> Vec<SemanticError> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze_program(program);
    analyzer.errors
}

struct Analyzer {
    scopes: ScopeStack,
    declared_types: FxHashSet<String>,
    in_loop: bool,
    errors: Vec<SemanticError>,
}

impl Analyzer {
    fn new() -> Self {
        let mut scopes = ScopeStack::new();
        for name in NATIVE_BINDINGS {
            scopes.declare(name);
        }
        let declared_types = PRIMITIVE_TYPE_NAMES.iter().map(|s| s.to_string()).collect();
        Self { scopes, declared_types, in_loop: false, errors: Vec::new() }
    }

    fn analyze_program(&mut self, program: &Program) {
        for stmt in &program.statements {
            self.statement(stmt);
        }
    }

    fn statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => {
                self.scopes.enter();
                self.block_body(block);
                self.scopes.exit();
            }
            Stmt::VariableDecl(decl) => self.variable_decl(decl),
            Stmt::FunctionDecl(decl) => self.function_decl(decl),
            Stmt::ClassDecl(decl) => self.class_decl(decl),
            Stmt::If { cond, then_branch, else_branch, .. } => {
                self.expr(cond);
                self.statement(then_branch);
                if let Some(else_branch) = else_branch {
                    self.statement(else_branch);
                }
            }
            Stmt::While { cond, body, .. } => {
                self.expr(cond);
                self.with_loop_context(|this| this.statement(body));
            }
            Stmt::For { init, cond, update, body, .. } => {
                self.scopes.enter();
                if let Some(init) = init {
                    match init.as_ref() {
                        ForInit::VarDecl(decl) => self.variable_decl(decl),
                        ForInit::Expr(expr) => self.expr(expr),
                    }
                }
                if let Some(cond) = cond {
                    self.expr(cond);
                }
                if let Some(update) = update {
                    self.expr(update);
                }
                self.with_loop_context(|this| this.statement(body));
                self.scopes.exit();
            }
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.expr(value);
                }
            }
            Stmt::Break { line } => {
                if !self.in_loop {
                    self.errors.push(SemanticError::new(*line, "'break' must be inside a loop"));
                }
            }
            Stmt::Continue { line } => {
                if !self.in_loop {
                    self.errors.push(SemanticError::new(*line, "'continue' must be inside a loop"));
                }
            }
            Stmt::Expression(expr) => self.expr(expr),
        }
    }

    fn with_loop_context(&mut self, body: impl FnOnce(&mut Self)) {
        let was_in_loop = self.in_loop;
        self.in_loop = true;
        body(self);
        self.in_loop = was_in_loop;
    }

    fn block_body(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.statement(stmt);
        }
    }

    fn variable_decl(&mut self, decl: &VariableDecl) {
        if let Some(initializer) = &decl.initializer {
            self.expr(initializer);
        } else if decl.is_const {
            self.errors.push(SemanticError::new(decl.line, "constants must be initialized"));
        }
        if let Some(type_name) = &decl.declared_type {
            self.check_type_name(type_name, decl.line);
        }
        if !self.scopes.declare(&decl.name) {
            self.errors.push(SemanticError::new(
                decl.line,
                format!("'{}' is already declared in this scope", decl.name),
            ));
        }
    }

    fn function_decl(&mut self, decl: &FunctionDecl) {
        if !self.scopes.declare(&decl.name) {
            self.errors.push(SemanticError::new(
                decl.line,
                format!("'{}' is already declared in this scope", decl.name),
            ));
        }
        self.function_body(decl, false);
    }

    /// A method's name is declared by the class body as one of its
    /// members, not as a standalone binding in the enclosing scope; its
    /// body additionally gets an implicit `this` binding.
    fn method_decl(&mut self, decl: &FunctionDecl) {
        self.function_body(decl, true);
    }

    fn function_body(&mut self, decl: &FunctionDecl, declare_this: bool) {
        self.scopes.enter();
        if declare_this {
            self.scopes.declare("this");
        }
        for param in &decl.params {
            if let Some(type_name) = &param.type_name {
                self.check_type_name(type_name, decl.line);
            }
            self.scopes.declare(&param.name);
        }
        if let Some(return_type) = &decl.return_type {
            self.check_type_name(return_type, decl.line);
        }
        // Entering a function resets loop context: a break/continue in a
        // function body defined within a loop is still an error.
        let was_in_loop = self.in_loop;
        self.in_loop = false;
        self.block_body(&decl.body);
        self.in_loop = was_in_loop;
        self.scopes.exit();
    }

    fn class_decl(&mut self, decl: &ClassDecl) {
        if !self.scopes.declare(&decl.name) {
            self.errors.push(SemanticError::new(
                decl.line,
                format!("'{}' is already declared in this scope", decl.name),
            ));
        }
        self.declared_types.insert(decl.name.clone());

        if let Some(super_class) = &decl.super_class {
            if !self.declared_types.contains(super_class) {
                self.errors.push(SemanticError::new(
                    decl.line,
                    format!("undefined type '{super_class}'"),
                ));
            }
        }

        self.scopes.enter();
        for member in &decl.members {
            match member {
                ClassMember::Field(field) => self.variable_decl(field),
                ClassMember::Method(method) => self.method_decl(method),
                ClassMember::Constructor(ctor) => {
                    self.scopes.enter();
                    self.scopes.declare("this");
                    for param in &ctor.params {
                        if let Some(type_name) = &param.type_name {
                            self.check_type_name(type_name, ctor.line);
                        }
                        self.scopes.declare(&param.name);
                    }
                    let was_in_loop = self.in_loop;
                    self.in_loop = false;
                    self.block_body(&ctor.body);
                    self.in_loop = was_in_loop;
                    self.scopes.exit();
                }
            }
        }
        self.scopes.exit();
    }

    fn check_type_name(&mut self, type_name: &TypeName, line: u32) {
        match type_name {
            TypeName::Primitive(_) => {}
            TypeName::Named(name) => {
                if !self.declared_types.contains(name) {
                    self.errors.push(SemanticError::new(line, format!("undefined type '{name}'")));
                }
            }
            TypeName::Array(inner) => self.check_type_name(inner, line),
            TypeName::Object(fields) => {
                for (_, field_type) in fields {
                    self.check_type_name(field_type, line);
                }
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal { .. } => {}
            Expr::Identifier { name, line } => {
                if !self.scopes.resolves(name) {
                    self.errors.push(SemanticError::new(*line, format!("undefined variable '{name}'")));
                }
            }
            Expr::BinaryOp { left, right, .. } => {
                self.expr(left);
                self.expr(right);
            }
            Expr::UnaryOp { operand, .. } => self.expr(operand),
            Expr::FunctionCall { callee, arguments, .. } => {
                self.expr(callee);
                for argument in arguments {
                    self.expr(argument);
                }
            }
            Expr::MemberAccess { target, .. } => self.expr(target),
            Expr::IndexAccess { target, index, .. } => {
                self.expr(target);
                self.expr(index);
            }
            Expr::ArrayLiteral { elements, .. } => {
                for element in elements {
                    self.expr(element);
                }
            }
            Expr::ObjectLiteral { properties, .. } => {
                for (_, value) in properties {
                    self.expr(value);
                }
            }
            Expr::Assignment { target, value, .. } => {
                self.expr(value);
                if !target.is_assignable() {
                    self.errors.push(SemanticError::new(target.line(), "invalid assignment target"));
                }
                self.expr(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lng_parse::parse;

    fn analyze_source(source: &str) -> Vec<SemanticError> {
        let (program, parse_errors) = parse(source);
        assert!(parse_errors.is_empty(), "{parse_errors:?}");
        analyze(&program)
    }

    #[test]
    fn well_formed_program_has_no_errors() {
        let errors = analyze_source("var x: int = 10; var y: int = 20; pf(x + y);");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn undefined_variable_is_reported() {
        let errors = analyze_source("pf(z);");
        assert!(errors.iter().any(|e| e.message.contains("undefined variable 'z'")));
    }

    #[test]
    fn this_resolves_inside_methods_and_constructors_but_not_outside() {
        let errors = analyze_source(
            "class Counter { constructor() { this.n = 0; } function inc() { this.n = this.n + 1; return this.n; } }",
        );
        assert!(errors.is_empty(), "{errors:?}");

        let errors = analyze_source("pf(this);");
        assert!(errors.iter().any(|e| e.message.contains("undefined variable 'this'")));
    }

    #[test]
    fn break_outside_a_loop_is_reported() {
        let errors = analyze_source("break;");
        assert!(errors.iter().any(|e| e.message.contains("'break' must be inside a loop")));
    }

    #[test]
    fn break_inside_nested_function_inside_loop_is_still_an_error() {
        let source = "while (true) { function f() { break; } }";
        let errors = analyze_source(source);
        assert!(errors.iter().any(|e| e.message.contains("'break' must be inside a loop")));
    }

    #[test]
    fn redeclaration_in_the_same_scope_is_reported() {
        let errors = analyze_source("var x = 1; var x = 2;");
        assert!(errors.iter().any(|e| e.message.contains("already declared")));
    }

    #[test]
    fn shadowing_in_an_inner_scope_is_allowed() {
        let errors = analyze_source("var x = 1; { var x = 2; }");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn class_with_undeclared_superclass_is_reported() {
        let errors = analyze_source("class Dog extends Animal { }");
        assert!(errors.iter().any(|e| e.message.contains("undefined type 'Animal'")));
    }

    #[test]
    fn class_declares_its_own_name_as_a_type_for_later_use() {
        let errors = analyze_source("class Animal { } class Dog extends Animal { }");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn undeclared_parameter_type_is_reported() {
        let errors = analyze_source("function f(a: Widget) { }");
        assert!(errors.iter().any(|e| e.message.contains("undefined type 'Widget'")));
    }

    #[test]
    fn native_bindings_resolve_without_declaration() {
        let errors = analyze_source("pf(clock());");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn for_loop_variable_is_scoped_to_the_loop() {
        let errors = analyze_source("for (var i = 0; i < 3; i = i + 1) { } pf(i);");
        assert!(errors.iter().any(|e| e.message.contains("undefined variable 'i'")));
    }
}
