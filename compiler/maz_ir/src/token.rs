//! Tokens produced by the lexer.
//!
//! A token is a kind tag, the literal text it was read from, and the byte
//! span of that text. The parser only ever branches on `kind`; `literal`
//! carries identifier names, integer digits and string contents, and is
//! echoed back in syntax error messages.

use std::fmt;

use crate::Span;

/// Token kinds.
///
/// Closed set: end-of-input, illegal, literals, operators, punctuation
/// and keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Repeated forever once reached.
    Eof,
    /// Character that starts no valid token.
    Illegal,

    // Literals
    Ident,
    Int,
    Str,

    // Operators
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Bang,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Punctuation
    Semicolon,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,

    // Keywords
    Let,
    Return,
    If,
    Else,
    Function,
    True,
    False,
}

impl TokenKind {
    /// Human-readable name used in diagnostics and token dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Illegal => "illegal character",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Str => "string",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Let => "let",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Function => "fn",
            TokenKind::True => "true",
            TokenKind::False => "false",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The fixed keyword table.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("let", TokenKind::Let),
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("fn", TokenKind::Function),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// Look up a word in the keyword table.
///
/// Returns `None` for ordinary identifiers.
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|&&(text, _)| text == word)
        .map(|&(_, kind)| kind)
}

/// A lexed token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End-of-input token positioned at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", Span::new(offset, offset))
    }

    /// Check the token's kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("<eof>"),
            _ => f.write_str(&self.literal),
        }
    }
}
