//! Lexer and parser phase tests.

mod lexer;
mod parser;
