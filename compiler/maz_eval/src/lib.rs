//! Maz Eval - tree-walking evaluator for Maz programs.
//!
//! # Architecture
//!
//! - `Environment`: name bindings with a borrowed parent link
//! - `Value`: runtime values
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Interpreter`: walks the tree, one method per node family
//!
//! Inside the evaluator failures travel as `Err(EvalError)`. The public
//! [`evaluate`] entry point folds them into a [`Value::Error`], so callers
//! always get a printable value back.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::Value;

use maz_ir::Program;

/// Evaluate `program` against `env`.
///
/// Statements run in `env` itself, so top-level bindings persist for the
/// next call (the REPL relies on this). The result is the value of the last
/// statement, `Null` for an empty program, or an `Error` value describing
/// the first failure.
pub fn evaluate(program: &Program, env: &mut Environment<'_>) -> Value {
    match Interpreter::new().eval_program(program, env) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, "evaluation failed");
            Value::Error(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests;
