use maz_eval::{evaluate, Environment, Value};
use pretty_assertions::assert_eq;

use crate::common::{eval, parse_ok, returned};

#[test]
fn precedence() {
    assert_eq!(eval("2+1*5"), Value::Integer(7));
    assert_eq!(eval("(2*(1+5))-10"), Value::Integer(2));
    assert_eq!(eval("2*3+4*5-6/2"), Value::Integer(23));
}

#[test]
fn scoping() {
    assert_eq!(
        eval("let a = 5; if 1 > 2 {let a = 10;} else {let a = 20;} a"),
        Value::Integer(5)
    );
}

#[test]
fn functions() {
    assert_eq!(
        eval("fn sum(a,b){return a+b;} sum(1,2)"),
        returned(Value::Integer(3))
    );

    let fib = "
        fn fib(n) {
            if n < 2 { return n; }
            return fib(n - 1) + fib(n - 2);
        }
        fib(19)
    ";
    assert_eq!(eval(fib), returned(Value::Integer(4181)));
}

#[test]
fn final_value_rendering() {
    assert_eq!(eval("fn sum(a,b){return a+b;} sum(1,2)").to_string(), "3");
    assert_eq!(eval("\"con\" + \"cat\"").to_string(), "concat");
    assert_eq!(eval("if false { 1 }").to_string(), "null");
    assert_eq!(eval("fn named() { 1 }").to_string(), "<fn named>");
}

#[test]
fn errors_surface_as_values() {
    let value = eval("let a = 1");
    assert!(value.is_error());
    assert_eq!(value.to_string(), "syntax error: missing semicolon near '1'");

    assert_eq!(
        eval("if 3 { 1 }").to_string(),
        "expected boolean, instead got '3'"
    );
    assert_eq!(eval("10 / (5 - 5)").to_string(), "division by zero");
}

#[test]
fn idempotent_across_fresh_environments() {
    let program = parse_ok(
        "let base = 3; fn scale(x) { return x * base; } if scale(2) > 5 { scale(10) } else { 0 }",
    );
    let first = evaluate(&program, &mut Environment::new());
    let second = evaluate(&program, &mut Environment::new());
    assert_eq!(first, Value::Integer(30));
    assert_eq!(first, second);
}

#[test]
fn helper_return_does_not_end_the_caller() {
    let source = "
        fn log(x) { return x; }
        fn work(n) { log(n); log(n + 1); n * 10 }
        work(4)
    ";
    assert_eq!(eval(source), Value::Integer(40));
}
