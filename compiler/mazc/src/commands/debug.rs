//! Debug commands: `lex` and `parse` for inspecting interpreter internals.

use std::fmt::Write as _;

use maz_ir::Token;

use super::read_file;

/// One line per token: kind, literal and span.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let kind = format!("{:?}", token.kind);
        let literal = format!("{:?}", token.literal);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {kind:<10} {literal:<12} @ {}", token.span);
    }
    out
}

/// The parsed program rendered back to source-like text.
pub fn render_ast(source: &str) -> String {
    maz_parse::parse(source).to_string()
}

/// Parse a file and display the syntax tree.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let program = maz_parse::parse(&content);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.statements.len());
    match program.syntax_error() {
        Some(error) => {
            println!("  Errors: 1");
            println!();
            println!("Errors:");
            println!("  {}: {error}", error.token.span);
        }
        None => {
            println!("  Errors: 0");
            println!();
            println!("{program}");
        }
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = maz_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    print!("{}", render_tokens(&tokens));
}
