//! The `run` command: evaluate a whole file once.

use maz_eval::{evaluate, Environment, Value};
use tracing::debug;

use super::read_file;

/// Parse and evaluate `source` in a fresh root environment.
pub fn run_source(source: &str) -> Value {
    let program = maz_parse::parse(source);
    debug!(statements = program.statements.len(), "parsed");
    evaluate(&program, &mut Environment::new())
}

/// Run a file and print the final value.
///
/// An error value is printed to stderr and exits with status 1.
pub fn run_file(path: &str) {
    let content = read_file(path);
    let value = run_source(&content);
    if value.is_error() {
        eprintln!("error: {value}");
        std::process::exit(1);
    }
    println!("{value}");
}
