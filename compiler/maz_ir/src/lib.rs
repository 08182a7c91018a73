//! Maz IR - tokens and syntax tree types.
//!
//! This crate holds the data shared by every stage of the pipeline:
//! - Spans for source locations
//! - Tokens, token kinds and the keyword table
//! - AST nodes, operators and syntax error nodes
//!
//! Everything here is plain owned data. The parser builds trees once and
//! nothing mutates them afterwards, so the evaluator only ever borrows them.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, ElseIf, FunctionDefinition, IfStatement, Node, Program, SyntaxError,
    SyntaxErrorKind, UnaryOp,
};
pub use span::Span;
pub use token::{lookup_keyword, Token, TokenKind, KEYWORDS};
