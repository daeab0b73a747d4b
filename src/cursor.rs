//! Borrowed positions within a document buffer.
//!
//! A [`Cursor`] is the crate's fundamental unit of navigation: a copyable
//! `(buffer, offset)` pair whose lifetime ties it to the caller's buffer.
//! Indexes store cursors instead of decoded values; decoding re-reads the
//! buffer from the stored cursor on demand.

use crate::error::{Error, Result};

/// A borrowed position within a document buffer.
///
/// Cursors are cheap to copy and never outlive the buffer they point into;
/// the borrow checker enforces the lifetime contract that the original
/// pointer-based design left to caller discipline.
///
/// The offset may equal the buffer length, which is the logical terminator
/// position: [`Cursor::peek`] returns `None` there. The buffer is
/// bound-checked against its known length rather than scanned for a null
/// terminator.
///
/// # Examples
///
/// ```rust
/// use jsonspan::Cursor;
///
/// let doc = b"  42";
/// let cur = Cursor::new(doc).skip_whitespace();
/// assert_eq!(cur.peek(), Some(b'4'));
/// assert_eq!(cur.offset(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, offset: 0 }
    }

    /// The byte offset of this cursor within its buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The byte under the cursor, or `None` at the terminator position.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.offset).copied()
    }

    /// Whether the cursor sits at the terminator position.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.offset >= self.buf.len()
    }

    /// The remaining bytes from the cursor to the end of the buffer.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }

    /// Advances past one byte. Must not be called at the terminator.
    pub(crate) fn bump(self) -> Cursor<'a> {
        debug_assert!(self.offset < self.buf.len());
        Cursor {
            buf: self.buf,
            offset: self.offset + 1,
        }
    }

    /// Advances past `n` bytes. `n` must not run past the terminator.
    pub(crate) fn advance(self, n: usize) -> Cursor<'a> {
        debug_assert!(self.offset + n <= self.buf.len());
        Cursor {
            buf: self.buf,
            offset: self.offset + n,
        }
    }

    /// A cursor parked at the terminator position.
    pub(crate) fn end(self) -> Cursor<'a> {
        Cursor {
            buf: self.buf,
            offset: self.buf.len(),
        }
    }

    /// Advances one byte, checking it against `expected` when given.
    ///
    /// This is the original grammar's `next(json, c)`: with `None` it is a
    /// plain advance, with `Some(c)` a mismatch is a malformed document.
    ///
    /// # Errors
    ///
    /// [`Error::UnexpectedEnd`] at the terminator, [`Error::Unexpected`] on
    /// a byte mismatch.
    pub fn expect(self, expected: Option<u8>) -> Result<Cursor<'a>> {
        match self.peek() {
            None => Err(Error::unexpected_end(self.offset, "another character")),
            Some(found) => match expected {
                Some(want) if want != found => Err(Error::unexpected(self.offset, want, found)),
                _ => Ok(self.bump()),
            },
        }
    }

    /// Advances past space, tab, newline, and carriage-return bytes.
    #[must_use]
    pub fn skip_whitespace(self) -> Cursor<'a> {
        let mut cur = self;
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = cur.peek() {
            cur = cur.bump();
        }
        cur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_bump_walk_the_buffer() {
        let cur = Cursor::new(b"ab");
        assert_eq!(cur.peek(), Some(b'a'));
        let cur = cur.bump();
        assert_eq!(cur.peek(), Some(b'b'));
        let cur = cur.bump();
        assert_eq!(cur.peek(), None);
        assert!(cur.at_end());
    }

    #[test]
    fn empty_buffer_starts_at_end() {
        let cur = Cursor::new(b"");
        assert!(cur.at_end());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn expect_matches_and_advances() {
        let cur = Cursor::new(b":1");
        let cur = cur.expect(Some(b':')).unwrap();
        assert_eq!(cur.peek(), Some(b'1'));
    }

    #[test]
    fn expect_reports_mismatch_with_position() {
        let cur = Cursor::new(b"x:").bump();
        let err = cur.expect(Some(b',')).unwrap_err();
        assert_eq!(err, Error::unexpected(1, b',', b':'));
    }

    #[test]
    fn expect_without_expectation_still_fails_at_end() {
        let cur = Cursor::new(b"");
        assert!(matches!(
            cur.expect(None),
            Err(Error::UnexpectedEnd { offset: 0, .. })
        ));
    }

    #[test]
    fn skip_whitespace_covers_all_four_kinds() {
        let cur = Cursor::new(b" \t\r\n x").skip_whitespace();
        assert_eq!(cur.peek(), Some(b'x'));
        assert_eq!(cur.offset(), 5);
    }

    #[test]
    fn skip_whitespace_can_reach_the_terminator() {
        let cur = Cursor::new(b"   ").skip_whitespace();
        assert!(cur.at_end());
    }
}
