//! Runtime values.

use std::fmt;
use std::rc::Rc;

use maz_ir::FunctionDefinition;

/// A value produced by evaluation.
///
/// Values are never mutated in place; every operation builds a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    /// Result of a `return` statement, unwinding through enclosing blocks.
    Return(Box<Value>),
    /// A function definition. Functions capture no environment; calls
    /// resolve free names through the caller's scope chain.
    Function(Rc<FunctionDefinition>),
    /// Evaluation failure surfaced to the caller.
    Error(String),
}

impl Value {
    /// Type tag used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN",
            Value::Function(_) => "FUNCTION",
            Value::Error(_) => "ERROR",
        }
    }

    /// Strip a `Return` wrapper, leaving any other value alone.
    #[must_use]
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => *inner,
            other => other,
        }
    }

    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Value::Return(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) | Value::Error(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
            Value::Return(inner) => inner.fmt(f),
            Value::Function(def) => match &def.name {
                Some(name) => write!(f, "<fn {name}>"),
                None => f.write_str("<fn>"),
            },
        }
    }
}
