//! Binding power of infix tokens.

use maz_ir::TokenKind;

/// Operator precedence levels, lowest first.
///
/// The derived ordering is what the expression loop compares against, so
/// variant order matters.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Precedence {
    Lowest,
    /// `== != < > <= >=`
    Equals,
    /// `+ -`
    Sum,
    /// `* /`
    Product,
    /// `!x -x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Precedence of `kind` when it appears in infix position.
    ///
    /// Tokens that cannot continue an expression get `Lowest`, which stops
    /// the expression loop at any level.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LtEq
            | TokenKind::GtEq => Precedence::Equals,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}
