//! On-demand scalar decoders.
//!
//! Each decoder consumes from a [`Cursor`] and produces a value, assuming
//! the sniffer already confirmed the shape. Decoding is a pure read of the
//! buffer: the same cursor decodes to the same value every time.

use memchr::memchr2;
use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Request-local scratch for the textual form of a number. Typical numbers
/// stay on the stack; pathological digit runs spill to the heap.
type NumberBuf = SmallVec<[u8; 24]>;

/// Decodes the number starting at `cur` as an `f64`.
///
/// Accepts an optional leading `-`, a digit run, an optional `.` fraction,
/// and an optional `e`/`E` exponent with optional sign, and hands the
/// accumulated text to the standard float conversion.
///
/// # Errors
///
/// [`Error::InvalidNumber`] if the accumulated text does not parse; this is
/// defensive and should not occur when the sniffer classified the cursor as
/// a number.
///
/// # Examples
///
/// ```rust
/// use jsonspan::{decode_number, Cursor};
///
/// let n = decode_number(Cursor::new(b"-0.5e+10")).unwrap();
/// assert_eq!(n, -0.5e10);
/// ```
pub fn decode_number(cur: Cursor<'_>) -> Result<f64> {
    let start = cur.offset();
    let mut text = NumberBuf::new();
    let mut cur = cur;

    if cur.peek() == Some(b'-') {
        text.push(b'-');
        cur = cur.bump();
    }
    cur = push_digits(cur, &mut text);

    if cur.peek() == Some(b'.') {
        text.push(b'.');
        cur = push_digits(cur.bump(), &mut text);
    }

    if let Some(e @ (b'e' | b'E')) = cur.peek() {
        text.push(e);
        cur = cur.bump();
        if let Some(sign @ (b'-' | b'+')) = cur.peek() {
            text.push(sign);
            cur = cur.bump();
        }
        push_digits(cur, &mut text);
    }

    // The scratch is ASCII by construction.
    let text = std::str::from_utf8(&text).map_err(|_| Error::invalid_utf8(start))?;
    text.parse::<f64>()
        .map_err(|_| Error::invalid_number(start, text))
}

fn push_digits<'a>(mut cur: Cursor<'a>, text: &mut NumberBuf) -> Cursor<'a> {
    while let Some(b) = cur.peek() {
        if !b.is_ascii_digit() {
            break;
        }
        text.push(b);
        cur = cur.bump();
    }
    cur
}

/// Decodes the number at `cur` as an `i32`, truncating any fraction.
///
/// # Errors
///
/// Same as [`decode_number`].
pub fn decode_int(cur: Cursor<'_>) -> Result<i32> {
    Ok(decode_number(cur)? as i32)
}

/// Decodes the number at `cur` as an `f32`.
///
/// # Errors
///
/// Same as [`decode_number`].
pub fn decode_float(cur: Cursor<'_>) -> Result<f32> {
    Ok(decode_number(cur)? as f32)
}

/// Decodes the boolean literal starting at `cur`, byte by byte.
///
/// # Errors
///
/// [`Error::InvalidLiteral`] unless the bytes spell exactly `true` or
/// `false`. This also covers the case where the sniffer's closed
/// classification labelled a stray literal as a boolean.
pub fn decode_bool(cur: Cursor<'_>) -> Result<bool> {
    match cur.peek() {
        Some(b't') => expect_literal(cur, b"true").map(|()| true),
        Some(b'f') => expect_literal(cur, b"false").map(|()| false),
        _ => Err(Error::invalid_literal(cur.offset())),
    }
}

fn expect_literal(cur: Cursor<'_>, literal: &'static [u8]) -> Result<()> {
    let mut cur = cur;
    for &b in literal {
        if cur.peek() != Some(b) {
            return Err(Error::invalid_literal(cur.offset()));
        }
        cur = cur.bump();
    }
    Ok(())
}

/// Decodes the quoted string starting at `cur` into the caller's sink,
/// translating the eight standard escapes (`\" \\ \/ \b \f \n \r \t`).
///
/// Returns the cursor just past the closing quote, so object keys can be
/// decoded and skipped in one scan. `\uXXXX` unicode escapes are not
/// supported and are rejected like any other unknown escape.
///
/// # Errors
///
/// [`Error::Unexpected`] if `cur` is not on a `"`, [`Error::UnexpectedEnd`]
/// if the buffer ends before the closing quote, [`Error::InvalidEscape`] on
/// an unsupported escape byte, [`Error::InvalidUtf8`] if the string content
/// is not valid UTF-8.
///
/// # Examples
///
/// ```rust
/// use jsonspan::{decode_string, Cursor};
///
/// let mut out = String::new();
/// decode_string(Cursor::new(br#""line1\nline2""#), &mut out).unwrap();
/// assert_eq!(out, "line1\nline2");
/// ```
pub fn decode_string<'a>(cur: Cursor<'a>, out: &mut String) -> Result<Cursor<'a>> {
    let mut cur = cur.expect(Some(b'"'))?;
    loop {
        let rest = cur.rest();
        let stop = match memchr2(b'"', b'\\', rest) {
            Some(i) => i,
            None => return Err(Error::unexpected_end(cur.end().offset(), "a closing '\"'")),
        };
        if stop > 0 {
            let run = std::str::from_utf8(&rest[..stop])
                .map_err(|_| Error::invalid_utf8(cur.offset()))?;
            out.push_str(run);
            cur = cur.advance(stop);
        }
        if rest[stop] == b'"' {
            return Ok(cur.bump());
        }
        cur = cur.bump();
        match cur.peek() {
            None => return Err(Error::unexpected_end(cur.offset(), "an escape character")),
            Some(b'"') => out.push('"'),
            Some(b'\\') => out.push('\\'),
            Some(b'/') => out.push('/'),
            Some(b'b') => out.push('\u{0008}'),
            Some(b'f') => out.push('\u{000C}'),
            Some(b'n') => out.push('\n'),
            Some(b'r') => out.push('\r'),
            Some(b't') => out.push('\t'),
            Some(other) => return Err(Error::invalid_escape(cur.offset(), other)),
        }
        cur = cur.bump();
    }
}

/// Decodes the quoted string starting at `cur` into a fresh `String`.
///
/// # Errors
///
/// Same as [`decode_string`].
pub fn decode_string_owned(cur: Cursor<'_>) -> Result<String> {
    let mut out = String::new();
    decode_string(cur, &mut out)?;
    Ok(out)
}
