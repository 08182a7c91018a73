//! Statement rules.
//!
//! Each rule is entered with its keyword as the current token and leaves
//! the last token it consumed (`;` or `}`) current.

use maz_ir::{ElseIf, FunctionDefinition, IfStatement, Node, SyntaxError, SyntaxErrorKind, TokenKind};
use tracing::trace;

use crate::{Parser, Precedence};

impl Parser<'_> {
    /// `let name = value;`
    pub(crate) fn parse_let(&mut self) -> Result<Node, SyntaxError> {
        self.expect_peek(TokenKind::Ident, SyntaxErrorKind::ExpectedIdentifier)?;
        let name = self.current.literal.clone();
        self.expect_peek(TokenKind::Assign, SyntaxErrorKind::ExpectedAssignment)?;

        let value = self.parse_terminated_value()?;
        trace!(%name, "parsed let");
        Ok(Node::Let {
            name,
            value: Box::new(value),
        })
    }

    /// `return value;`
    pub(crate) fn parse_return(&mut self) -> Result<Node, SyntaxError> {
        let value = self.parse_terminated_value()?;
        Ok(Node::Return {
            value: Box::new(value),
        })
    }

    /// The `value;` tail shared by `let` and `return`.
    fn parse_terminated_value(&mut self) -> Result<Node, SyntaxError> {
        if self.peek_is(TokenKind::Semicolon) || self.peek_is(TokenKind::Eof) {
            return Err(self.error(SyntaxErrorKind::ExpectedExpression));
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest, &[TokenKind::Semicolon])?;
        self.expect_peek(TokenKind::Semicolon, SyntaxErrorKind::MissingSemicolon)?;
        Ok(value)
    }

    /// `if cond { .. } (else if cond { .. })* (else { .. })?`
    pub(crate) fn parse_if(&mut self) -> Result<Node, SyntaxError> {
        let (condition, consequence) = self.parse_conditional_block()?;

        let mut alternatives = Vec::new();
        let mut otherwise = Vec::new();
        while self.peek_is(TokenKind::Else) {
            self.advance();
            if self.peek_is(TokenKind::If) {
                self.advance();
                let (condition, body) = self.parse_conditional_block()?;
                alternatives.push(ElseIf { condition, body });
            } else {
                otherwise = self.parse_block()?;
                break;
            }
        }

        Ok(Node::If(IfStatement {
            condition: Box::new(condition),
            consequence,
            alternatives,
            otherwise,
        }))
    }

    /// `cond { .. }`, entered with `if` current.
    fn parse_conditional_block(&mut self) -> Result<(Node, Vec<Node>), SyntaxError> {
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest, &[TokenKind::LBrace])?;
        let body = self.parse_block()?;
        Ok((condition, body))
    }

    /// `{ statements }`, with `{` as the lookahead.
    fn parse_block(&mut self) -> Result<Vec<Node>, SyntaxError> {
        self.expect_peek(TokenKind::LBrace, SyntaxErrorKind::ExpectedBlock)?;
        self.advance();
        self.parse_statements(TokenKind::RBrace)
    }

    /// `fn [name](a, b) { .. }`
    pub(crate) fn parse_function(&mut self) -> Result<Node, SyntaxError> {
        let name = if self.peek_is(TokenKind::Ident) {
            self.advance();
            Some(self.current.literal.clone())
        } else {
            None
        };

        self.expect_peek(TokenKind::LParen, SyntaxErrorKind::ExpectedParenthesis)?;
        let parameters = self.parse_parameters()?;
        let body = self.parse_block()?;

        trace!(name = name.as_deref().unwrap_or("<anonymous>"), "parsed function");
        Ok(Node::Function(FunctionDefinition {
            name,
            parameters,
            body,
        }))
    }

    /// Comma-separated identifiers, entered with `(` current and leaving
    /// `)` current.
    fn parse_parameters(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Ok(parameters);
        }

        loop {
            self.expect_peek(TokenKind::Ident, SyntaxErrorKind::InvalidFunctionParameters)?;
            parameters.push(self.current.literal.clone());

            if self.peek_is(TokenKind::Comma) {
                self.advance();
            } else {
                self.expect_peek(TokenKind::RParen, SyntaxErrorKind::InvalidFunctionParameters)?;
                return Ok(parameters);
            }
        }
    }
}
