//! Byte cursor over a [`SourceText`](super::source::SourceText).
//!
//! The cursor tracks the byte offset together with the 1-based line and
//! 0-based column of the next unread byte. Every advance goes through
//! [`Cursor::advance`], so line/column bookkeeping is identical for
//! whitespace, comments, literals and structural forms.
//!
//! A cursor may be *bounded*: it then stops at an `end` offset short of the
//! buffer's length while still handing out lexemes that borrow from the whole
//! buffer. The function-form scanner uses this to re-run the dispatch loop over
//! an argument list.

use crate::Position;


#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    bytes: &'src [u8],
    pos: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(bytes: &'src [u8]) -> Self {
        Cursor {
            bytes,
            pos: 0,
            end: bytes.len(),
            line: 1,
            column: 0,
        }
    }

    /// A copy of this cursor that reports end of input at byte offset `end`.
    pub fn bounded(&self, end: usize) -> Self {
        Cursor {
            end: end.clamp(self.pos, self.end),
            ..self.clone()
        }
    }

    pub fn current(&self) -> Option<u8> {
        self.peek_nth(0)
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_nth(1)
    }

    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        let index = self.pos + n;
        if index < self.end {
            Some(self.bytes[index])
        } else {
            None
        }
    }

    /// Consumes one byte and returns it. A `\n` moves to the next line.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.pos += 1;

        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(byte)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes bytes while `predicate` holds and returns how many were eaten.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        while self.current().is_some_and(&mut predicate) {
            self.advance();
        }
        self.pos - start
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// The unread bytes up to this cursor's end.
    pub fn rest(&self) -> &'src [u8] {
        &self.bytes[self.pos..self.end]
    }

    /// The bytes consumed between offset `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.bytes[start..self.pos]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }
}
