//! Error types for document indexing and decoding.
//!
//! The original design this crate descends from aborted the process on the
//! first malformed byte. Here every scanning, sniffing, decoding, and
//! indexing operation returns a [`Result`] instead, and every error carries
//! the byte offset at which it was detected, so callers can decide whether
//! to abort, skip, or report.
//!
//! ## Examples
//!
//! ```rust
//! use jsonspan::{parse_str, Error};
//!
//! let err = parse_str("{\"a\": }").unwrap_err();
//! assert!(matches!(err, Error::ExpectedValue { .. }));
//! assert_eq!(err.offset(), 6);
//! ```

use thiserror::Error;

/// Represents all the ways a document can fail to index or decode.
///
/// Every variant records the byte offset into the document buffer at which
/// the problem was detected; [`Error::offset`] extracts it uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structural expectation was violated (missing `:`, `,`, quote, ...).
    #[error("unexpected character at offset {offset}: expected '{}', found '{}'", char::from(*expected), char::from(*found))]
    Unexpected {
        offset: usize,
        expected: u8,
        found: u8,
    },

    /// The buffer ended in the middle of a construct.
    #[error("unexpected end of document at offset {offset}: expected {expected}")]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },

    /// A value was required but a structural delimiter was found instead.
    #[error("expected a value at offset {offset}, found '{}'", char::from(*found))]
    ExpectedValue { offset: usize, found: u8 },

    /// An escape sequence outside the eight supported ones (this includes
    /// `\uXXXX`, which is deliberately unsupported).
    #[error("invalid escape character '{}' at offset {offset}", char::from(*found))]
    InvalidEscape { offset: usize, found: u8 },

    /// A literal that is neither `true` nor `false` where a boolean was
    /// expected.
    #[error("invalid literal at offset {offset}")]
    InvalidLiteral { offset: usize },

    /// The textual form of a number failed to convert.
    #[error("invalid number at offset {offset}: {text:?}")]
    InvalidNumber { offset: usize, text: String },

    /// A key or string span is not valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 { offset: usize },
}

impl Error {
    /// Creates an error for a single-byte expectation that did not hold.
    pub fn unexpected(offset: usize, expected: u8, found: u8) -> Self {
        Error::Unexpected {
            offset,
            expected,
            found,
        }
    }

    /// Creates an error for a buffer that ended mid-construct.
    ///
    /// `expected` names what the scanner was looking for, e.g. `"a closing '\"'"`.
    pub fn unexpected_end(offset: usize, expected: &'static str) -> Self {
        Error::UnexpectedEnd { offset, expected }
    }

    /// Creates an error for a missing value, as in `{"a": }`.
    pub fn expected_value(offset: usize, found: u8) -> Self {
        Error::ExpectedValue { offset, found }
    }

    /// Creates an error for an unsupported escape byte.
    pub fn invalid_escape(offset: usize, found: u8) -> Self {
        Error::InvalidEscape { offset, found }
    }

    /// Creates an error for a stray literal where `true`/`false` was expected.
    pub fn invalid_literal(offset: usize) -> Self {
        Error::InvalidLiteral { offset }
    }

    /// Creates an error for number text that failed to parse.
    pub fn invalid_number(offset: usize, text: impl Into<String>) -> Self {
        Error::InvalidNumber {
            offset,
            text: text.into(),
        }
    }

    /// Creates an error for a non-UTF-8 key or string span.
    pub fn invalid_utf8(offset: usize) -> Self {
        Error::InvalidUtf8 { offset }
    }

    /// The byte offset into the document at which this error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Error::Unexpected { offset, .. }
            | Error::UnexpectedEnd { offset, .. }
            | Error::ExpectedValue { offset, .. }
            | Error::InvalidEscape { offset, .. }
            | Error::InvalidLiteral { offset }
            | Error::InvalidNumber { offset, .. }
            | Error::InvalidUtf8 { offset } => offset,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
