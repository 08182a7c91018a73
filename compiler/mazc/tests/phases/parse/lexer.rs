use maz_ir::TokenKind;
use mazc::commands::render_tokens;
use pretty_assertions::assert_eq;

#[test]
fn token_dump_lists_every_token_and_eof() {
    let tokens = maz_lexer::lex("let x = 1;");
    let dump = render_tokens(&tokens);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("Let"));
    assert!(lines[0].contains("@ 0..3"));
    assert!(lines[3].contains("\"1\""));
    assert!(lines[5].contains("Eof"));
}

#[test]
fn lexer_feeds_parser_lazily() {
    // The parser stops at the first error, so an unterminated string after
    // it is never an issue.
    let mut lexer = maz_lexer::Lexer::new("1 + ; \"open");
    assert_eq!(lexer.next_token().kind, TokenKind::Int);
    assert_eq!(lexer.next_token().kind, TokenKind::Plus);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}
