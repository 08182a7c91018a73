//! Tree-walking interpreter.
//!
//! `Interpreter` dispatches on the node variant. Statement families live
//! in sibling modules:
//!
//! - `control.rs`: `if` chains and blocks
//! - `function_call.rs`: function definitions and calls

mod control;
mod function_call;

use maz_ir::{Node, Program};
use maz_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::syntax_error;
use crate::{evaluate_binary, evaluate_unary, Environment, EvalResult, Value};

/// Tree-walking interpreter.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Number of user function calls currently on the stack.
    call_depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter { call_depth: 0 }
    }

    /// Run every top-level statement in `env`.
    ///
    /// A top-level `return` does not stop the program; its wrapped value
    /// is simply the statement's result. The first error does.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program, env: &mut Environment<'_>) -> EvalResult {
        let mut result = Value::Null;
        for statement in &program.statements {
            result = self.eval_node(statement, env)?;
        }
        Ok(result)
    }

    /// Evaluate a single node.
    ///
    /// Uses `ensure_sufficient_stack` so deep nesting and deep user
    /// recursion grow the stack instead of overflowing it.
    pub fn eval_node(&mut self, node: &Node, env: &mut Environment<'_>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_node_inner(node, env))
    }

    fn eval_node_inner(&mut self, node: &Node, env: &mut Environment<'_>) -> EvalResult {
        match node {
            Node::Integer(n) => Ok(Value::Integer(*n)),
            Node::Boolean(b) => Ok(Value::Boolean(*b)),
            Node::Str(s) => Ok(Value::String(s.clone())),
            Node::Identifier(name) => Ok(Self::eval_identifier(name, env)),
            Node::Prefix { op, operand } => {
                let operand = self.eval_operand(operand, env)?;
                evaluate_unary(operand, *op)
            }
            Node::Infix { left, op, right } => {
                let left = self.eval_operand(left, env)?;
                let right = self.eval_operand(right, env)?;
                evaluate_binary(left, right, *op)
            }
            Node::Let { name, value } => {
                let value = self.eval_operand(value, env)?;
                trace!(%name, %value, "let");
                env.define(name.clone(), value);
                Ok(Value::Boolean(true))
            }
            Node::Return { value } => {
                let value = self.eval_operand(value, env)?;
                Ok(Value::Return(Box::new(value)))
            }
            Node::If(stmt) => self.eval_if(stmt, env),
            Node::Function(def) => Self::eval_function_definition(def, env),
            Node::Call { callee, arguments } => self.eval_call(callee, arguments, env),
            Node::SyntaxError(error) => Err(syntax_error(error)),
        }
    }

    /// Evaluate a node whose value is consumed by an enclosing construct.
    ///
    /// A `Return` coming out of a call contributes only its payload.
    fn eval_operand(&mut self, node: &Node, env: &mut Environment<'_>) -> EvalResult {
        self.eval_node(node, env).map(Value::unwrap_return)
    }

    /// Unbound names evaluate to `Null`.
    fn eval_identifier(name: &str, env: &Environment<'_>) -> Value {
        env.lookup(name).cloned().unwrap_or(Value::Null)
    }

    /// Run `statements` in order, stopping at the first `Return` raised by
    /// a `return` statement or a nested `if`.
    ///
    /// A call used as a statement has finished its own `return`, so its
    /// result is unwrapped and the block carries on. An empty block is
    /// `Null`.
    pub(crate) fn eval_block(
        &mut self,
        statements: &[Node],
        env: &mut Environment<'_>,
    ) -> EvalResult {
        let mut result = Value::Null;
        for statement in statements {
            result = match statement {
                Node::Call { .. } => self.eval_operand(statement, env)?,
                _ => self.eval_node(statement, env)?,
            };
            if result.is_return() {
                break;
            }
        }
        Ok(result)
    }
}
