//! Function definition and call evaluation for the Interpreter.

use std::rc::Rc;

use maz_ir::{FunctionDefinition, Node};
use tracing::debug;

use super::Interpreter;
use crate::errors::{arity_mismatch, function_redefinition, not_callable, undefined_function};
use crate::{Environment, EvalResult, Value};

impl Interpreter {
    /// Evaluate a function definition.
    ///
    /// A named function is bound in the current scope unless the name is
    /// already visible from it, in this scope or any enclosing one. Either
    /// way the function value is the result.
    pub(super) fn eval_function_definition(
        def: &FunctionDefinition,
        env: &mut Environment<'_>,
    ) -> EvalResult {
        let function = Value::Function(Rc::new(def.clone()));
        if let Some(name) = &def.name {
            if env.lookup(name).is_some() {
                return Err(function_redefinition(name));
            }
            debug!(%name, arity = def.parameters.len(), "define function");
            env.define(name.clone(), function.clone());
        }
        Ok(function)
    }

    /// Evaluate a call to the function bound to `callee`.
    ///
    /// Arguments are evaluated in the caller's scope. The body then runs in
    /// a child of the caller's scope holding the parameters, and its block
    /// result comes back as is, still wrapped if it came from `return`.
    #[tracing::instrument(level = "debug", skip(self, arguments, env), fields(depth = self.call_depth))]
    pub(super) fn eval_call(
        &mut self,
        callee: &str,
        arguments: &[Node],
        env: &mut Environment<'_>,
    ) -> EvalResult {
        let function = match env.lookup(callee) {
            Some(Value::Function(function)) => Rc::clone(function),
            Some(_) => return Err(not_callable(callee)),
            None => return Err(undefined_function(callee)),
        };

        if arguments.len() != function.parameters.len() {
            return Err(arity_mismatch(function.parameters.len(), arguments.len()));
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval_operand(argument, env)?);
        }

        let mut scope = env.child();
        for (parameter, value) in function.parameters.iter().zip(values) {
            scope.define(parameter.clone(), value);
        }

        self.call_depth += 1;
        let result = self.eval_block(&function.body, &mut scope);
        self.call_depth -= 1;
        result
    }
}
