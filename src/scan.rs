//! Skip scanners and the type sniffer.
//!
//! These routines move a [`Cursor`] past a construct without interpreting
//! it. They are what lets the indexers record member positions at depth 1
//! and defer all value decoding to the caller.

use memchr::memchr2;

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// The six value shapes a cursor can sit on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Object,
    Array,
    Bool,
    Nil,
}

/// Classifies the value starting at `cur` by its first byte alone.
///
/// `"` is a string, `{` an object, `[` an array, `-` or a digit a number,
/// `n` is null, and anything else is taken to be a boolean, since `true` and
/// `false` are the only remaining legal values at this position. No
/// follow-on bytes are checked; that burden falls on the decoder.
///
/// # Errors
///
/// [`Error::UnexpectedEnd`] if the cursor sits at the terminator.
pub fn sniff(cur: Cursor<'_>) -> Result<ValueKind> {
    match cur.peek() {
        None => Err(Error::unexpected_end(cur.offset(), "a value")),
        Some(b'"') => Ok(ValueKind::String),
        Some(b'{') => Ok(ValueKind::Object),
        Some(b'[') => Ok(ValueKind::Array),
        Some(b'-') => Ok(ValueKind::Number),
        Some(b) if b.is_ascii_digit() => Ok(ValueKind::Number),
        Some(b'n') => Ok(ValueKind::Nil),
        Some(_) => Ok(ValueKind::Bool),
    }
}

/// Skips a quoted string, returning the cursor just past the closing `"`.
///
/// The cursor must sit on the opening quote. Any byte immediately following
/// a backslash is consumed as part of the escape and never re-examined, so
/// `\"` and `\\` cannot terminate the string early.
///
/// # Errors
///
/// [`Error::UnexpectedEnd`] if the buffer ends before an unescaped closing
/// quote, [`Error::Unexpected`] if the cursor is not on a `"`.
pub fn skip_quoted_string(cur: Cursor<'_>) -> Result<Cursor<'_>> {
    let mut cur = cur.expect(Some(b'"'))?;
    loop {
        let rest = cur.rest();
        match memchr2(b'"', b'\\', rest) {
            Some(i) if rest[i] == b'"' => return Ok(cur.advance(i + 1)),
            Some(i) => {
                // Backslash: swallow the escaped byte blindly.
                cur = cur.advance(i + 1);
                if cur.at_end() {
                    return Err(Error::unexpected_end(cur.offset(), "an escape character"));
                }
                cur = cur.bump();
            }
            None => {
                return Err(Error::unexpected_end(cur.end().offset(), "a closing '\"'"));
            }
        }
    }
}

/// Skips a bracketed block, returning the cursor just past the matching
/// `close` byte.
///
/// The cursor must sit on `open`. Nested `open`/`close` pairs are depth
/// matched, and quoted strings at any depth are skipped whole, so brace or
/// bracket bytes inside string literals never perturb the depth count.
///
/// # Errors
///
/// [`Error::UnexpectedEnd`] if the buffer ends before the block closes,
/// [`Error::Unexpected`] if the cursor is not on `open`, plus anything
/// [`skip_quoted_string`] reports for an embedded string.
pub fn skip_balanced_block(cur: Cursor<'_>, open: u8, close: u8) -> Result<Cursor<'_>> {
    let mut cur = cur.expect(Some(open))?;
    let mut depth: usize = 1;
    while depth > 0 {
        match cur.peek() {
            None => return Err(Error::unexpected_end(cur.offset(), "a closing delimiter")),
            Some(b'"') => cur = skip_quoted_string(cur)?,
            Some(b) => {
                if b == open {
                    depth += 1;
                } else if b == close {
                    depth -= 1;
                }
                cur = cur.bump();
            }
        }
    }
    Ok(cur)
}

/// Skips a whole value of any shape, returning the cursor just past it.
///
/// Strings and blocks delegate to the dedicated skippers; numbers, booleans,
/// and null advance byte by byte until a structural delimiter (`,`, `}`,
/// `]`) or the terminator is reached.
///
/// # Errors
///
/// [`Error::ExpectedValue`] if a structural delimiter sits where the value
/// should begin (e.g. the missing value in `{"a": }`), plus anything the
/// delegated skippers report.
pub fn skip_value(cur: Cursor<'_>) -> Result<Cursor<'_>> {
    match sniff(cur)? {
        ValueKind::String => skip_quoted_string(cur),
        ValueKind::Object => skip_balanced_block(cur, b'{', b'}'),
        ValueKind::Array => skip_balanced_block(cur, b'[', b']'),
        ValueKind::Number | ValueKind::Bool | ValueKind::Nil => {
            let mut end = cur;
            while let Some(b) = end.peek() {
                if matches!(b, b',' | b'}' | b']') {
                    break;
                }
                end = end.bump();
            }
            if end.offset() == cur.offset() {
                // A delimiter where the value should start.
                match cur.peek() {
                    Some(found) => Err(Error::expected_value(cur.offset(), found)),
                    None => Err(Error::unexpected_end(cur.offset(), "a value")),
                }
            } else {
                Ok(end)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(doc: &[u8]) -> Cursor<'_> {
        Cursor::new(doc)
    }

    #[test]
    fn sniff_classifies_by_first_byte() {
        let cases: &[(&[u8], ValueKind)] = &[
            (b"\"x\"", ValueKind::String),
            (b"123", ValueKind::Number),
            (b"-4.5", ValueKind::Number),
            (b"true", ValueKind::Bool),
            (b"false", ValueKind::Bool),
            (b"null", ValueKind::Nil),
            (b"{}", ValueKind::Object),
            (b"[]", ValueKind::Array),
        ];
        for (doc, kind) in cases {
            assert_eq!(sniff(at(doc)).unwrap(), *kind, "doc: {doc:?}");
        }
    }

    #[test]
    fn sniff_at_terminator_fails() {
        assert!(matches!(
            sniff(at(b"")),
            Err(Error::UnexpectedEnd { offset: 0, .. })
        ));
    }

    #[test]
    fn skip_string_stops_past_closing_quote() {
        let cur = skip_quoted_string(at(b"\"abc\": 1")).unwrap();
        assert_eq!(cur.offset(), 5);
        assert_eq!(cur.peek(), Some(b':'));
    }

    #[test]
    fn skip_string_treats_escaped_quote_as_content() {
        let cur = skip_quoted_string(at(br#""a\"b""#)).unwrap();
        assert_eq!(cur.offset(), 6);
    }

    #[test]
    fn skip_string_handles_escaped_backslash_before_quote() {
        // In "a\\" the second backslash is the escaped byte, the quote closes.
        let cur = skip_quoted_string(at(br#""a\\""#)).unwrap();
        assert_eq!(cur.offset(), 5);
    }

    #[test]
    fn skip_string_unterminated_reports_end() {
        let err = skip_quoted_string(at(b"\"abc")).unwrap_err();
        assert_eq!(err, Error::unexpected_end(4, "a closing '\"'"));
    }

    #[test]
    fn skip_string_truncated_mid_escape_reports_end() {
        let err = skip_quoted_string(at(b"\"abc\\")).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEnd { offset: 5, .. }));
    }

    #[test]
    fn skip_block_matches_nested_depth() {
        let doc = b"{\"a\": {\"b\": 1}}, ";
        let cur = skip_balanced_block(at(doc), b'{', b'}').unwrap();
        assert_eq!(cur.peek(), Some(b','));
    }

    #[test]
    fn skip_block_ignores_braces_inside_strings() {
        let doc = br#"{"a": {"b": "}"}, "c": 1} tail"#;
        let cur = skip_balanced_block(at(doc), b'{', b'}').unwrap();
        assert_eq!(cur.peek(), Some(b' '));
        assert_eq!(&doc[cur.offset()..], b" tail");
    }

    #[test]
    fn skip_block_unterminated_reports_end() {
        let err = skip_balanced_block(at(b"[1, [2, 3]"), b'[', b']').unwrap_err();
        assert!(matches!(err, Error::UnexpectedEnd { offset: 10, .. }));
    }

    #[test]
    fn skip_value_scalar_stops_at_delimiter() {
        let cur = skip_value(at(b"-12.5e3, 1")).unwrap();
        assert_eq!(cur.peek(), Some(b','));

        let cur = skip_value(at(b"true]")).unwrap();
        assert_eq!(cur.peek(), Some(b']'));

        let cur = skip_value(at(b"null}")).unwrap();
        assert_eq!(cur.peek(), Some(b'}'));
    }

    #[test]
    fn skip_value_scalar_may_run_to_the_terminator() {
        let cur = skip_value(at(b"42")).unwrap();
        assert!(cur.at_end());
    }

    #[test]
    fn skip_value_rejects_a_bare_delimiter() {
        let err = skip_value(at(b"}")).unwrap_err();
        assert_eq!(err, Error::expected_value(0, b'}'));
    }

    #[test]
    fn skip_value_dispatches_on_shape() {
        let cur = skip_value(at(b"\"s\",")).unwrap();
        assert_eq!(cur.peek(), Some(b','));

        let cur = skip_value(at(b"[1, 2],")).unwrap();
        assert_eq!(cur.peek(), Some(b','));

        let cur = skip_value(at(b"{\"k\": [1]},")).unwrap();
        assert_eq!(cur.peek(), Some(b','));
    }
}
