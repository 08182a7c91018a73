//! Lexer for Maz.
//!
//! Tokens are produced lazily, one per [`Lexer::next_token`] call. The
//! parser pulls them as it needs them; [`lex`] materialises the whole
//! stream for tests and the `lex` debug command.
//!
//! # Rules
//!
//! - Space, tab, newline and carriage return are skipped.
//! - `==`, `!=`, `<=`, `>=` use one byte of lookahead, falling back to the
//!   single-character operator.
//! - Strings run from `"` to the next `"`, with no escape processing. An
//!   unterminated string ends the token stream.
//! - Words are maximal runs of ASCII letters and `_`, checked against the
//!   keyword table. Digits are not part of words.
//! - Integers are maximal runs of ASCII digits; the parser converts them.
//! - Anything else becomes an `Illegal` token holding that character.

mod cursor;

use cursor::Cursor;
use maz_ir::{lookup_keyword, Span, Token, TokenKind};
use tracing::trace;

/// On-demand tokenizer over a source string.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` once the source is exhausted, and keeps returning it
    /// on every later call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return self.eof();
        }

        let kind = match self.cursor.current() {
            b'"' => return self.string(start),
            b'0'..=b'9' => return self.integer(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.word(start),
            b'=' => self.one_or_two(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            b'<' => self.one_or_two(TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.one_or_two(TokenKind::Gt, TokenKind::GtEq),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            _ => {
                self.cursor.advance_char();
                TokenKind::Illegal
            }
        };

        self.finish(kind, start)
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    fn eof(&self) -> Token {
        let pos = self.cursor.pos();
        Token::eof(Span::from_range(pos..pos).start)
    }

    /// Build a token whose literal is the text consumed since `start`.
    fn finish(&self, kind: TokenKind, start: usize) -> Token {
        let span = Span::from_range(start..self.cursor.pos());
        let token = Token::new(kind, self.cursor.slice_from(start), span);
        trace!(kind = kind.display_name(), literal = %token.literal, %span, "token");
        token
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `one` alone, or `two` when the next byte is `=`.
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) -> TokenKind {
        if self.cursor.peek() == b'=' {
            self.cursor.advance();
            self.cursor.advance();
            two
        } else {
            self.cursor.advance();
            one
        }
    }

    fn integer(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.finish(TokenKind::Int, start)
    }

    fn word(&mut self, start: usize) -> Token {
        self.cursor
            .eat_while(|b| b.is_ascii_alphabetic() || b == b'_');
        let kind = lookup_keyword(self.cursor.slice_from(start)).unwrap_or(TokenKind::Ident);
        self.finish(kind, start)
    }

    /// String literal; the literal excludes the quotes.
    fn string(&mut self, start: usize) -> Token {
        self.cursor.advance();
        let Some(close) = self.cursor.find(b'"') else {
            trace!(start, "unterminated string literal");
            self.cursor.skip_to_end();
            return self.eof();
        };

        let contents = self.cursor.slice(start + 1, close);
        self.cursor.set_pos(close + 1);
        let span = Span::from_range(start..self.cursor.pos());
        trace!(kind = "string", literal = contents, %span, "token");
        Token::new(TokenKind::Str, contents, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

/// Lex an entire source string.
///
/// The returned list always ends with exactly one `Eof` token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
