//! Unary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so a match is
//! exhaustive and needs no trait objects.

use maz_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_prefix_operand};
use crate::{EvalResult, Value};

/// Evaluate a unary operation.
///
/// `!` takes a Boolean and `-` takes an Integer. Every other pairing is
/// an error.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        (Value::Boolean(b), UnaryOp::Not) => Ok(Value::Boolean(!b)),
        (Value::Integer(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        _ => Err(invalid_prefix_operand(op, &value)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::EvalErrorKind;

    #[test]
    fn not_negates_booleans() {
        assert_eq!(
            evaluate_unary(Value::Boolean(true), UnaryOp::Not).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            evaluate_unary(Value::Boolean(false), UnaryOp::Not).unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn neg_negates_integers() {
        assert_eq!(
            evaluate_unary(Value::Integer(5), UnaryOp::Neg).unwrap(),
            Value::Integer(-5)
        );
        assert_eq!(
            evaluate_unary(Value::Integer(-7), UnaryOp::Neg).unwrap(),
            Value::Integer(7)
        );
    }

    #[test]
    fn neg_overflow() {
        let err = evaluate_unary(Value::Integer(i64::MIN), UnaryOp::Neg).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::IntegerOverflow {
                operation: "negation"
            }
        );
    }

    #[test]
    fn mismatched_operands_are_errors() {
        let err = evaluate_unary(Value::Boolean(true), UnaryOp::Neg).unwrap_err();
        assert_eq!(err.to_string(), "invalid operand for prefix '-': BOOLEAN");

        let err = evaluate_unary(Value::Integer(1), UnaryOp::Not).unwrap_err();
        assert_eq!(err.to_string(), "invalid operand for prefix '!': INTEGER");

        assert!(evaluate_unary(Value::Null, UnaryOp::Not).is_err());
        assert!(evaluate_unary(Value::String("x".to_string()), UnaryOp::Neg).is_err());
    }
}
