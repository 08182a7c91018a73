//! Pratt parser for Maz.
//!
//! The parser pulls tokens from a [`Lexer`] on demand, keeping the current
//! token and one token of lookahead. Expressions are parsed by precedence
//! climbing; statements (`let`, `return`, `if`, `fn`) are ordinary prefix
//! rules, so they may appear anywhere an expression can.
//!
//! Grammar rules return `Result<Node, SyntaxError>` and bail out with `?`
//! at the first problem. Only [`Parser::parse_program`] folds the error back
//! into the tree: a failed parse is a [`Program`] whose sole statement is the
//! `SyntaxError` node.

mod grammar;
mod precedence;

pub use precedence::Precedence;

use maz_ir::{Node, Program, SyntaxError, SyntaxErrorKind, Token, TokenKind};
use maz_lexer::Lexer;
use tracing::{debug, trace};

/// Parser state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime the current and lookahead tokens.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
        }
    }

    /// Parse the whole input.
    pub fn parse_program(&mut self) -> Program {
        self.parse_until(TokenKind::Eof)
    }

    /// Parse statements until `end` (or end of input) is the current token.
    ///
    /// On failure the returned program holds only the syntax error; the
    /// statements parsed before it are discarded.
    pub fn parse_until(&mut self, end: TokenKind) -> Program {
        match self.parse_statements(end) {
            Ok(statements) => {
                debug!(count = statements.len(), "parsed program");
                Program::new(statements)
            }
            Err(error) => {
                debug!(%error, span = %error.token.span, "parse failed");
                Program::new(vec![Node::SyntaxError(error)])
            }
        }
    }

    /// Statement list shared by the top level and `{ .. }` blocks.
    ///
    /// Leaves `end` as the current token. Running out of input inside a
    /// block is a missing `}`.
    pub(crate) fn parse_statements(&mut self, end: TokenKind) -> Result<Vec<Node>, SyntaxError> {
        let mut statements = Vec::new();
        loop {
            if self.check(end) {
                return Ok(statements);
            }
            if self.check(TokenKind::Eof) {
                return Err(self.error(SyntaxErrorKind::ExpectedBlock));
            }

            statements.push(self.parse_expression(Precedence::Lowest, &[end])?);

            // `let` and `return` consume their own `;`. A bare expression
            // statement may carry one too.
            if self.peek_is(TokenKind::Semicolon) {
                self.advance();
            }
            self.advance();
        }
    }

    /// Move the lookahead into the current slot and pull a new lookahead.
    pub(crate) fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(
            kind = self.current.kind.display_name(),
            literal = %self.current.literal,
            "advance"
        );
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance onto the lookahead if it is `kind`, otherwise fail with
    /// `error` at the current token.
    pub(crate) fn expect_peek(
        &mut self,
        kind: TokenKind,
        error: SyntaxErrorKind,
    ) -> Result<(), SyntaxError> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(error))
        }
    }

    /// Syntax error naming the current token.
    pub(crate) fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.current.clone())
    }
}

/// Parse a complete source string.
pub fn parse(source: &str) -> Program {
    Parser::new(Lexer::new(source)).parse_program()
}

#[cfg(test)]
mod tests;
