//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the operand pair. Anything outside the
//! table below is rejected with an explicit error:
//!
//! | Operands | Operators |
//! |---|---|
//! | Integer, Integer | `+ - * /` `== != < > <= >=` |
//! | String, String | `+` `== !=` |
//! | Boolean, Boolean | `== !=` |

use maz_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, invalid_infix_operands};
use crate::{EvalResult, Value};

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult {
    result
        .map(Value::Integer)
        .ok_or_else(|| integer_overflow(operation))
}

/// Evaluate a binary operation.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over freshly evaluated operands; borrowing would only move the clone"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let result = match (&left, &right) {
        (Value::Integer(a), Value::Integer(b)) => return eval_int_binary(*a, *b, op),
        (Value::String(a), Value::String(b)) => eval_string_binary(a, b, op),
        (Value::Boolean(a), Value::Boolean(b)) => eval_bool_binary(*a, *b, op),
        _ => None,
    };
    result.ok_or_else(|| invalid_infix_operands(op, &left, &right))
}

/// Every operator is defined on integers.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => checked_arith(a.checked_div(b), "division"),
        BinaryOp::Eq => Ok(Value::Boolean(a == b)),
        BinaryOp::NotEq => Ok(Value::Boolean(a != b)),
        BinaryOp::Lt => Ok(Value::Boolean(a < b)),
        BinaryOp::Gt => Ok(Value::Boolean(a > b)),
        BinaryOp::LtEq => Ok(Value::Boolean(a <= b)),
        BinaryOp::GtEq => Ok(Value::Boolean(a >= b)),
    }
}

/// `None` when `op` is not defined for strings.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Option<Value> {
    match op {
        BinaryOp::Add => Some(Value::String(format!("{a}{b}"))),
        BinaryOp::Eq => Some(Value::Boolean(a == b)),
        BinaryOp::NotEq => Some(Value::Boolean(a != b)),
        _ => None,
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> Option<Value> {
    match op {
        BinaryOp::Eq => Some(Value::Boolean(a == b)),
        BinaryOp::NotEq => Some(Value::Boolean(a != b)),
        _ => None,
    }
}
