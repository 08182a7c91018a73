//! Byte cursor over the source text.
//!
//! Every character the lexer classifies is ASCII, so the cursor works on
//! bytes and only decodes a full `char` when it has to report an illegal
//! non-ASCII character.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte, or `0` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// One byte of lookahead past the current one.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance past the whole (possibly multi-byte) character at the cursor.
    pub(crate) fn advance_char(&mut self) {
        let width = self.source[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.pos += width;
    }

    /// Advance while `pred` holds for the current byte.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Jump to end of input.
    pub(crate) fn skip_to_end(&mut self) {
        self.pos = self.source.len();
    }

    /// Text between `start` and the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Position of the next `byte` at or after the cursor.
    pub(crate) fn find(&self, byte: u8) -> Option<usize> {
        self.source.as_bytes()[self.pos..]
            .iter()
            .position(|&b| b == byte)
            .map(|offset| self.pos + offset)
    }

    pub(crate) fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
    }
}
