//! Conditional evaluation.

use maz_ir::{IfStatement, Node};

use super::Interpreter;
use crate::errors::condition_not_boolean;
use crate::{Environment, EvalError, EvalResult, Value};

impl Interpreter {
    /// Evaluate an `if` / `else if` / `else` chain.
    ///
    /// Conditions are tried in order and must each be Boolean. The first
    /// branch that matches runs in a fresh child scope, so its bindings
    /// disappear with it. No match and no `else` gives `Null`.
    pub(super) fn eval_if(&mut self, stmt: &IfStatement, env: &mut Environment<'_>) -> EvalResult {
        if self.eval_condition(&stmt.condition, env)? {
            return self.eval_scoped_block(&stmt.consequence, env);
        }

        for alternative in &stmt.alternatives {
            if self.eval_condition(&alternative.condition, env)? {
                return self.eval_scoped_block(&alternative.body, env);
            }
        }

        self.eval_scoped_block(&stmt.otherwise, env)
    }

    fn eval_condition(
        &mut self,
        condition: &Node,
        env: &mut Environment<'_>,
    ) -> Result<bool, EvalError> {
        match self.eval_operand(condition, env)? {
            Value::Boolean(b) => Ok(b),
            other => Err(condition_not_boolean(&other)),
        }
    }

    fn eval_scoped_block(&mut self, statements: &[Node], env: &Environment<'_>) -> EvalResult {
        let mut scope = env.child();
        self.eval_block(statements, &mut scope)
    }
}
