//! Syntax tree.
//!
//! A `Program` is an ordered list of statement nodes. `Node` is one closed
//! sum type covering expressions and statements alike: the language lets
//! any statement appear wherever the parser expects an expression, so the
//! evaluator dispatches over a single enum.
//!
//! Trees own their children by value. There is no sharing and no cycles.

mod display;
mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::Token;

/// A parsed source file or block-free line of input.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new(statements: Vec<Node>) -> Self {
        Program { statements }
    }

    /// The syntax error that stopped parsing, if any.
    ///
    /// The parser guarantees an error is the only statement left in the
    /// program, so checking the first slot is enough.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self.statements.first() {
            Some(Node::SyntaxError(err)) => Some(err),
            _ => None,
        }
    }
}

/// AST node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Integer(i64),
    Boolean(bool),
    Str(String),
    Identifier(String),

    /// `!x`, `-x`
    Prefix { op: UnaryOp, operand: Box<Node> },
    /// `left op right`
    Infix {
        left: Box<Node>,
        op: BinaryOp,
        right: Box<Node>,
    },

    /// `let name = value;`
    Let { name: String, value: Box<Node> },
    /// `return value;`
    Return { value: Box<Node> },
    If(IfStatement),
    Function(FunctionDefinition),
    /// `callee(arguments...)`
    Call { callee: String, arguments: Vec<Node> },

    /// Diagnostic carried in-tree so partial parses reach the caller.
    SyntaxError(SyntaxError),
}

impl Node {
    pub fn prefix(op: UnaryOp, operand: Node) -> Self {
        Node::Prefix {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn infix(left: Node, op: BinaryOp, right: Node) -> Self {
        Node::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Node::SyntaxError(_))
    }
}

/// `if cond { .. } else if cond { .. } else { .. }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStatement {
    pub condition: Box<Node>,
    pub consequence: Vec<Node>,
    pub alternatives: Vec<ElseIf>,
    /// Plain `else` block; empty when absent.
    pub otherwise: Vec<Node>,
}

/// One `else if` clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElseIf {
    pub condition: Node,
    pub body: Vec<Node>,
}

/// `fn [name](params) { body }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDefinition {
    /// `None` for anonymous functions.
    pub name: Option<String>,
    pub parameters: Vec<String>,
    pub body: Vec<Node>,
}

/// Parse failure recorded in the tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("syntax error: {kind} near '{token}'")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// The token the parser was looking at when it gave up.
    pub token: Token,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, token: Token) -> Self {
        SyntaxError { kind, token }
    }
}

/// Syntax error categories.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected parenthesis")]
    UnexpectedParenthesis,
    #[error("expected expression")]
    ExpectedExpression,
    #[error("expected next token to be an identifier")]
    ExpectedIdentifier,
    #[error("expected assignment")]
    ExpectedAssignment,
    #[error("missing semicolon")]
    MissingSemicolon,
    #[error("expected block")]
    ExpectedBlock,
    #[error("expected parenthesis")]
    ExpectedParenthesis,
    #[error("function has invalid parameters")]
    InvalidFunctionParameters,
    #[error("cannot parse current token")]
    IllegalToken,
    #[error("integer literal out of range")]
    InvalidInteger,
}
