//! Parser tests.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod statements;

use maz_ir::{Node, SyntaxError};

use crate::parse;

/// Parse `source`, failing the test on a syntax error.
fn parse_ok(source: &str) -> Vec<Node> {
    let program = parse(source);
    if let Some(error) = program.syntax_error() {
        panic!("unexpected {error} in {source:?}");
    }
    program.statements
}

/// Parse a single expression statement.
fn parse_one(source: &str) -> Node {
    let mut statements = parse_ok(source);
    assert_eq!(statements.len(), 1, "expected one statement in {source:?}");
    statements.remove(0)
}

/// Parse `source`, expecting a syntax error as the sole statement.
fn parse_err(source: &str) -> SyntaxError {
    let program = parse(source);
    assert_eq!(
        program.statements.len(),
        1,
        "syntax error must be the only statement for {source:?}"
    );
    match program.syntax_error() {
        Some(error) => error.clone(),
        None => panic!("expected a syntax error for {source:?}, got {program}"),
    }
}

fn ident(name: &str) -> Node {
    Node::Identifier(name.to_string())
}
