use maz_ir::{BinaryOp, ElseIf, FunctionDefinition, IfStatement, Node};
use pretty_assertions::assert_eq;

use super::{ident, parse_ok, parse_one};

#[test]
fn let_statement() {
    assert_eq!(
        parse_one("let x = 5 * y;"),
        Node::Let {
            name: "x".to_string(),
            value: Box::new(Node::infix(Node::Integer(5), BinaryOp::Mul, ident("y"))),
        }
    );
}

#[test]
fn return_statement() {
    assert_eq!(
        parse_one("return a + b;"),
        Node::Return {
            value: Box::new(Node::infix(ident("a"), BinaryOp::Add, ident("b"))),
        }
    );
}

#[test]
fn statements_in_sequence() {
    let statements = parse_ok("let a = 1; let b = 2; a + b");
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[2].to_string(), "(a + b)");
}

#[test]
fn if_without_else() {
    assert_eq!(
        parse_one("if x < y { x }"),
        Node::If(IfStatement {
            condition: Box::new(Node::infix(ident("x"), BinaryOp::Lt, ident("y"))),
            consequence: vec![ident("x")],
            alternatives: vec![],
            otherwise: vec![],
        })
    );
}

#[test]
fn if_with_every_branch() {
    assert_eq!(
        parse_one("if a { 1 } else if b { 2 } else if c { 3 } else { 4 }"),
        Node::If(IfStatement {
            condition: Box::new(ident("a")),
            consequence: vec![Node::Integer(1)],
            alternatives: vec![
                ElseIf {
                    condition: ident("b"),
                    body: vec![Node::Integer(2)],
                },
                ElseIf {
                    condition: ident("c"),
                    body: vec![Node::Integer(3)],
                },
            ],
            otherwise: vec![Node::Integer(4)],
        })
    );
}

#[test]
fn if_with_parenthesised_condition_and_empty_blocks() {
    assert_eq!(
        parse_one("if (true) { } else { }"),
        Node::If(IfStatement {
            condition: Box::new(Node::Boolean(true)),
            consequence: vec![],
            alternatives: vec![],
            otherwise: vec![],
        })
    );
}

#[test]
fn scoping_program_shape() {
    let statements = parse_ok("let a = 5; if 1 > 2 {let a = 10;} else {let a = 20;} a");
    assert_eq!(statements.len(), 3);
    assert_eq!(
        statements[1].to_string(),
        "if (1 > 2) { let a = 10; } else { let a = 20; }"
    );
    assert_eq!(statements[2], ident("a"));
}

#[test]
fn named_function() {
    assert_eq!(
        parse_one("fn sum(a, b) { return a + b; }"),
        Node::Function(FunctionDefinition {
            name: Some("sum".to_string()),
            parameters: vec!["a".to_string(), "b".to_string()],
            body: vec![Node::Return {
                value: Box::new(Node::infix(ident("a"), BinaryOp::Add, ident("b"))),
            }],
        })
    );
}

#[test]
fn anonymous_function_bound_with_let() {
    assert_eq!(
        parse_one("let id = fn(x) { x };"),
        Node::Let {
            name: "id".to_string(),
            value: Box::new(Node::Function(FunctionDefinition {
                name: None,
                parameters: vec!["x".to_string()],
                body: vec![ident("x")],
            })),
        }
    );
}

#[test]
fn function_without_parameters() {
    assert_eq!(
        parse_one("fn answer() { 42 }"),
        Node::Function(FunctionDefinition {
            name: Some("answer".to_string()),
            parameters: vec![],
            body: vec![Node::Integer(42)],
        })
    );
}

#[test]
fn function_definition_then_call() {
    let statements = parse_ok("fn sum(a,b){return a+b;} sum(1,2)");
    assert_eq!(statements.len(), 2);
    assert_eq!(
        statements[1],
        Node::Call {
            callee: "sum".to_string(),
            arguments: vec![Node::Integer(1), Node::Integer(2)],
        }
    );
}

#[test]
fn recursive_function() {
    let source = "
        fn fib(n) {
            if n < 2 { return n; }
            return fib(n - 1) + fib(n - 2);
        }
        fib(19)
    ";
    let statements = parse_ok(source);
    assert_eq!(statements.len(), 2);
    assert_eq!(
        statements[0].to_string(),
        "fn fib(n) { if (n < 2) { return n; } return (fib((n - 1)) + fib((n - 2))); }"
    );
}

#[test]
fn nested_blocks() {
    let node = parse_one("if a { if b { fn f() { if c { 1 } } } }");
    assert_eq!(
        node.to_string(),
        "if a { if b { fn f() { if c { 1 } } } }"
    );
}
