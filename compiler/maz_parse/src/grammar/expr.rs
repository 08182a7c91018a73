//! Expression parsing.

use maz_ir::{BinaryOp, Node, SyntaxError, SyntaxErrorKind, TokenKind, UnaryOp};
use maz_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Parser, Precedence};

impl Parser<'_> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// The loop stops at a lookahead that binds no tighter than
    /// `precedence` or that appears in `terminators`. On success the last
    /// token of the expression is current.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
        terminators: &[TokenKind],
    ) -> Result<Node, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence, terminators))
    }

    fn parse_expression_inner(
        &mut self,
        precedence: Precedence,
        terminators: &[TokenKind],
    ) -> Result<Node, SyntaxError> {
        let mut left = self.parse_prefix()?;

        while precedence < Precedence::of(self.peek.kind) && !terminators.contains(&self.peek.kind) {
            self.advance();
            left = self.parse_infix(left, terminators)?;
        }

        Ok(left)
    }

    /// Dispatch on the current token to the rule that can start an
    /// expression.
    fn parse_prefix(&mut self) -> Result<Node, SyntaxError> {
        trace!(kind = self.current.kind.display_name(), "parse_prefix");
        match self.current.kind {
            TokenKind::Int => self.parse_integer(),
            TokenKind::True => Ok(Node::Boolean(true)),
            TokenKind::False => Ok(Node::Boolean(false)),
            TokenKind::Str => Ok(Node::Str(self.current.literal.clone())),
            TokenKind::Ident => Ok(Node::Identifier(self.current.literal.clone())),
            TokenKind::Bang => self.parse_unary(UnaryOp::Not),
            TokenKind::Minus => self.parse_unary(UnaryOp::Neg),
            TokenKind::LParen => self.parse_group(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function(),
            TokenKind::RParen => Err(self.error(SyntaxErrorKind::UnexpectedParenthesis)),
            TokenKind::Illegal => Err(self.error(SyntaxErrorKind::IllegalToken)),
            _ => Err(self.error(SyntaxErrorKind::ExpectedExpression)),
        }
    }

    /// Fold `left` with the operator that is now the current token.
    fn parse_infix(&mut self, left: Node, terminators: &[TokenKind]) -> Result<Node, SyntaxError> {
        if self.check(TokenKind::LParen) {
            return self.parse_call(left);
        }

        // The loop only advances onto tokens with a binding power, and every
        // one of those other than `(` is a binary operator.
        let Some(op) = BinaryOp::from_token(self.current.kind) else {
            return Err(self.error(SyntaxErrorKind::ExpectedExpression));
        };
        let precedence = Precedence::of(self.current.kind);
        self.advance();
        let right = self.parse_expression(precedence, terminators)?;
        Ok(Node::infix(left, op, right))
    }

    fn parse_integer(&self) -> Result<Node, SyntaxError> {
        self.current
            .literal
            .parse::<i64>()
            .map(Node::Integer)
            .map_err(|_| self.error(SyntaxErrorKind::InvalidInteger))
    }

    fn parse_unary(&mut self, op: UnaryOp) -> Result<Node, SyntaxError> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix, &[])?;
        Ok(Node::prefix(op, operand))
    }

    /// `( expr )`
    ///
    /// An unclosed group reports the last token of the inner expression.
    fn parse_group(&mut self) -> Result<Node, SyntaxError> {
        self.advance();
        let inner = self.parse_expression(Precedence::Lowest, &[])?;
        self.expect_peek(TokenKind::RParen, SyntaxErrorKind::UnexpectedParenthesis)?;
        Ok(inner)
    }

    /// `name(arg, ...)`, entered with `(` as the current token.
    fn parse_call(&mut self, left: Node) -> Result<Node, SyntaxError> {
        let Node::Identifier(callee) = left else {
            return Err(self.error(SyntaxErrorKind::ExpectedIdentifier));
        };

        let mut arguments = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Ok(Node::Call { callee, arguments });
        }

        loop {
            self.advance();
            if self.check(TokenKind::Eof) {
                return Err(self.error(SyntaxErrorKind::ExpectedParenthesis));
            }
            arguments.push(self.parse_expression(
                Precedence::Lowest,
                &[TokenKind::Comma, TokenKind::RParen],
            )?);

            if self.peek_is(TokenKind::Comma) {
                self.advance();
            } else {
                self.expect_peek(TokenKind::RParen, SyntaxErrorKind::ExpectedParenthesis)?;
                return Ok(Node::Call { callee, arguments });
            }
        }
    }
}
