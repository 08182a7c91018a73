use mazc::commands::{ReplOptions, ReplSession};
use pretty_assertions::assert_eq;

#[test]
fn options_parse() {
    assert_eq!(ReplOptions::parse(&[]), Ok(ReplOptions { ast_only: false }));
    assert_eq!(
        ReplOptions::parse(&["--ast".to_string()]),
        Ok(ReplOptions { ast_only: true })
    );
    assert_eq!(
        ReplOptions::parse(&["--bogus".to_string()]),
        Err("--bogus".to_string())
    );
}

#[test]
fn bindings_survive_between_lines() {
    let mut session = ReplSession::new(ReplOptions::default());
    assert_eq!(session.eval_line("let a = 2;"), "true");
    assert_eq!(session.eval_line("fn double(x) { return x * 2; }"), "<fn double>");
    assert_eq!(session.eval_line("double(a)"), "4");
}

#[test]
fn errors_do_not_end_the_session() {
    let mut session = ReplSession::new(ReplOptions::default());
    assert_eq!(session.eval_line("1 / 0"), "division by zero");
    assert_eq!(session.eval_line("1 + 1"), "2");
}

#[test]
fn ast_mode_prints_the_tree() {
    let mut session = ReplSession::new(ReplOptions { ast_only: true });
    assert_eq!(session.eval_line("1 + 2 * 3\n"), "(1 + (2 * 3))");
    assert_eq!(session.eval_line("let x = (1;"), "syntax error: unexpected parenthesis near '1'");
}

#[test]
fn session_reads_until_end_of_input() {
    let input = "let a = 1;\n\na + 41\n";
    let mut output = Vec::new();
    ReplSession::new(ReplOptions::default())
        .run(input.as_bytes(), &mut output)
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        "Welcome to the Maz REPL!\n>> true\n>> >> 42\n>> \n"
    );
}
