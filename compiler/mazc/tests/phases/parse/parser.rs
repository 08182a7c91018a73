use maz_ir::{SyntaxErrorKind, TokenKind};
use mazc::commands::render_ast;
use pretty_assertions::assert_eq;

use crate::common::{parse_err, parse_ok};

#[test]
fn rendered_program_reparses_to_the_same_tree() {
    let sources = [
        "2 + 1 * 5",
        "(2 * (1 + 5)) - 10",
        "-a * (b - c) / d",
        "let total = sum(1, 2 * 3);",
        "fn fib(n) { if n < 2 { return n; } return fib(n - 1) + fib(n - 2); }",
        "if a == b { 1 } else if a != b { 2 } else { 3 }",
    ];
    for source in sources {
        let program = parse_ok(source);
        let rendered = program.to_string();
        assert_eq!(parse_ok(&rendered), program, "rendered as {rendered}");
    }
}

#[test]
fn render_ast_matches_repl_ast_mode() {
    assert_eq!(render_ast("let a = 1 + 2 * 3;"), "let a = (1 + (2 * 3));");
    assert_eq!(
        render_ast("let a = 1"),
        "syntax error: missing semicolon near '1'"
    );
}

#[test]
fn missing_semicolon_names_the_integer() {
    let error = parse_err("let a = 1");
    assert_eq!(error.kind, SyntaxErrorKind::MissingSemicolon);
    assert_eq!(error.token.kind, TokenKind::Int);
    assert_eq!(error.token.literal, "1");
}

#[test]
fn unclosed_parenthesis_names_the_last_consumed_token() {
    let error = parse_err("(5+1");
    assert_eq!(error.kind, SyntaxErrorKind::UnexpectedParenthesis);
    assert_eq!(error.token.literal, "1");
}

#[test]
fn syntax_error_is_the_only_statement() {
    let program = maz_parse::parse("let a = 1; let b = 2; (3");
    assert_eq!(program.statements.len(), 1);
    assert!(program.statements[0].is_syntax_error());
}

#[test]
fn syntax_error_spans_point_into_the_source() {
    let source = "let a = 1;\nlet b = a +";
    let error = parse_err(source);
    assert_eq!(error.kind, SyntaxErrorKind::ExpectedExpression);
    assert_eq!(error.token.span.start as usize, source.len());
}
