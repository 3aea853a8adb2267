//! lng-driver - ties the four pipeline stages together.
//!
//! Exposes the four external operations from spec.md §6 —
//! [`tokenize`], [`parse`], [`analyze`], [`run`] — plus the CLI's
//! [`Config`]/[`Session`] so the `lng` binary has something to drive.
//! No stage's internals are duplicated here: this crate only
//! sequences calls into `lng-lex`/`lng-parse`/`lng-sem`/`lng-interp`
//! and aggregates their error lists.

mod cli;
mod config;

pub use config::{Config, Emit};
pub use lng_interp::RuntimeError;
pub use lng_lex::{LexError, Token, TokenKind};
pub use lng_parse::{ast, ParseError};
pub use lng_sem::SemanticError;

use std::fmt;

pub use cli::main;

/// Tokenizes `source`. Thin pass-through to `lng-lex`; kept as its own
/// public operation so callers depend on the driver, not each stage
/// crate directly (spec.md §6 "Tokenize").
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    lng_lex::tokenize(source)
}

/// Parses `source` end to end (lexing included). Spec.md §6 "Parse".
pub fn parse(source: &str) -> (ast::Program, Vec<ParseError>) {
    lng_parse::parse(source)
}

/// Runs the semantic analyzer over an already-parsed program. Spec.md
/// §6 "BuildAST" is this plus `parse` composed by the caller.
pub fn analyze(program: &ast::Program) -> Vec<SemanticError> {
    lng_sem::analyze(program)
}

/// A parse or semantic error, combined into one line-tagged list for
/// [`RunOutcome::errors`].
#[derive(Debug, Clone, PartialEq)]
pub struct StaticError {
    pub line: u32,
    pub message: String,
}

impl fmt::Display for StaticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl From<ParseError> for StaticError {
    fn from(e: ParseError) -> Self {
        Self { line: e.line, message: e.message }
    }
}

impl From<SemanticError> for StaticError {
    fn from(e: SemanticError) -> Self {
        Self { line: e.line, message: e.message }
    }
}

/// The result of a `Run`, per spec.md §6's external interface table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOutcome {
    pub output: Vec<String>,
    pub error: Option<String>,
    pub errors: Vec<StaticError>,
}

const STATIC_ANALYSIS_ERROR: &str = "static analysis error";
const RUNTIME_ERROR_PREFIX: &str = "Runtime Error:";

/// Runs `source` end to end: tokenize, parse, analyze, then interpret.
///
/// If parsing or semantic analysis produced any errors, execution is
/// skipped entirely — `output` is empty and `error` names the static
/// gate (spec.md §8's "static gate" property). Otherwise the program
/// runs and a trailing `"Runtime Error: ..."` output line, if present,
/// is mirrored into `error`.
pub fn run(source: &str) -> RunOutcome {
    let (program, parse_errors) = lng_parse::parse(source);
    let semantic_errors = lng_sem::analyze(&program);

    if !parse_errors.is_empty() || !semantic_errors.is_empty() {
        let mut errors: Vec<StaticError> =
            parse_errors.into_iter().map(StaticError::from).collect();
        errors.extend(semantic_errors.into_iter().map(StaticError::from));
        return RunOutcome {
            output: Vec::new(),
            error: Some(STATIC_ANALYSIS_ERROR.to_string()),
            errors,
        };
    }

    let output = lng_interp::interpret(&program);
    let error = output
        .last()
        .filter(|line| line.starts_with(RUNTIME_ERROR_PREFIX))
        .cloned();
    RunOutcome { output, error, errors: Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_scenario_arithmetic() {
        let outcome = run("var x: int = 10; var y: int = 20; pf(x + y);");
        assert_eq!(outcome.output, vec!["30"]);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn positive_scenario_while_loop() {
        let outcome = run("var i: int = 0; while (i < 3) { pf(i); i = i + 1; }");
        assert_eq!(outcome.output, vec!["0", "1", "2"]);
    }

    #[test]
    fn positive_scenario_function_call() {
        let outcome =
            run("function add(a: int, b: int): int { return a + b; } pf(add(5, 7));");
        assert_eq!(outcome.output, vec!["12"]);
    }

    #[test]
    fn positive_scenario_for_loop_with_continue() {
        let outcome =
            run("for (var i = 0; i < 3; i = i + 1) { if (i == 1) { continue; } pf(i); }");
        assert_eq!(outcome.output, vec!["0", "2"]);
    }

    #[test]
    fn positive_scenario_class_with_constructor_and_method() {
        let outcome = run(
            "class Counter { constructor() { this.n = 0; } function inc() { this.n = this.n + 1; return this.n; } } var c = Counter(); pf(c.inc()); pf(c.inc());",
        );
        assert_eq!(outcome.output, vec!["1", "2"]);
    }

    #[test]
    fn positive_scenario_array_indexing() {
        let outcome =
            run("var a = [10, 20, 30]; a[1] = a[1] + 5; pf(a[0]); pf(a[1]); pf(a[2]);");
        assert_eq!(outcome.output, vec!["10", "25", "30"]);
    }

    #[test]
    fn negative_scenario_undefined_variable_trips_the_static_gate() {
        let outcome = run("pf(z);");
        assert!(outcome.output.is_empty());
        assert_eq!(outcome.error.as_deref(), Some(STATIC_ANALYSIS_ERROR));
        assert!(outcome.errors.iter().any(|e| e.message.contains("undefined variable 'z'")));
    }

    #[test]
    fn negative_scenario_const_without_initializer() {
        let outcome = run("const PI;");
        assert!(outcome.output.is_empty());
        assert_eq!(outcome.error.as_deref(), Some(STATIC_ANALYSIS_ERROR));
        assert!(!outcome.errors.is_empty());
    }

    #[test]
    fn negative_scenario_break_outside_a_loop() {
        let outcome = run("break;");
        assert!(outcome.output.is_empty());
        assert_eq!(outcome.error.as_deref(), Some(STATIC_ANALYSIS_ERROR));
        assert!(outcome.errors.iter().any(|e| e.message.contains("loop")));
    }

    #[test]
    fn negative_scenario_runtime_arity_mismatch() {
        let outcome = run("function f() { return 1; } f(1, 2);");
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.output.len(), 1);
        assert!(outcome.output[0].starts_with(RUNTIME_ERROR_PREFIX));
        assert_eq!(outcome.error.as_deref(), Some(outcome.output[0].as_str()));
    }
}
