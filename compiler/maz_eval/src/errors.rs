//! Evaluation errors and their constructors.
//!
//! Factory functions are the public API for building errors; the evaluator
//! never assembles an `EvalErrorKind` by hand.

use maz_ir::{BinaryOp, SyntaxError, UnaryOp};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Evaluation error categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// The program carried a syntax error node.
    #[error(transparent)]
    SyntaxError(SyntaxError),

    #[error("expected boolean, instead got '{got}'")]
    ConditionNotBoolean { got: String },

    // Functions
    #[error("'{name}' cannot be called, it is not a function")]
    NotCallable { name: String },
    #[error("invalid function call: no function with name '{name}'")]
    UndefinedFunction { name: String },
    #[error("expected {expected} arguments in function call, instead got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("function with name '{name}' already exists")]
    FunctionRedefinition { name: String },

    // Operators
    #[error("invalid operand for prefix '{op}': {type_name}")]
    InvalidPrefixOperand { op: &'static str, type_name: &'static str },
    #[error("invalid operands for '{op}': {left} and {right}")]
    InvalidInfixOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

/// Syntax error reached during evaluation.
#[cold]
pub fn syntax_error(error: &SyntaxError) -> EvalError {
    EvalErrorKind::SyntaxError(error.clone()).into()
}

/// Non-boolean `if` condition.
#[cold]
pub fn condition_not_boolean(got: &Value) -> EvalError {
    EvalErrorKind::ConditionNotBoolean {
        got: got.to_string(),
    }
    .into()
}

/// Callee bound to something other than a function.
#[cold]
pub fn not_callable(name: &str) -> EvalError {
    EvalErrorKind::NotCallable {
        name: name.to_string(),
    }
    .into()
}

/// Callee not bound at all.
#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    }
    .into()
}

/// Wrong number of arguments in a call.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

/// Named function defined over an existing binding.
#[cold]
pub fn function_redefinition(name: &str) -> EvalError {
    EvalErrorKind::FunctionRedefinition {
        name: name.to_string(),
    }
    .into()
}

/// Prefix operator applied to an unsupported type.
#[cold]
pub fn invalid_prefix_operand(op: UnaryOp, operand: &Value) -> EvalError {
    EvalErrorKind::InvalidPrefixOperand {
        op: op.as_symbol(),
        type_name: operand.type_name(),
    }
    .into()
}

/// Infix operator applied to an unsupported pair of types.
#[cold]
pub fn invalid_infix_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalErrorKind::InvalidInfixOperands {
        op: op.as_symbol(),
        left: left.type_name(),
        right: right.type_name(),
    }
    .into()
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}
