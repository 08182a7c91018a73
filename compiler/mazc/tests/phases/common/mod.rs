//! Shared test utilities for phase tests.

use maz_eval::Value;
use maz_ir::{Program, SyntaxError};

/// Parse source, panicking on a syntax error.
pub fn parse_ok(source: &str) -> Program {
    let program = maz_parse::parse(source);
    if let Some(error) = program.syntax_error() {
        panic!("unexpected {error} while parsing {source:?}");
    }
    program
}

/// Parse source that must fail, returning the error node.
pub fn parse_err(source: &str) -> SyntaxError {
    maz_parse::parse(source)
        .syntax_error()
        .cloned()
        .unwrap_or_else(|| panic!("expected {source:?} to fail to parse"))
}

/// Evaluate source in a fresh environment, as `mazc run` does.
pub fn eval(source: &str) -> Value {
    mazc::commands::run_source(source)
}

pub fn returned(value: Value) -> Value {
    Value::Return(Box::new(value))
}
