//! # jsonspan
//!
//! A non-materializing JSON parser: given a byte buffer holding a JSON
//! document, it builds an index of top-level object keys and array elements
//! as *positions into the original buffer*, deferring all value
//! interpretation (string unescaping, number parsing, nested decoding)
//! until the caller explicitly asks for it.
//!
//! ## Why index instead of parse?
//!
//! For configuration-like documents the dominant access pattern reads a
//! handful of top-level fields and ignores the rest. Indexing records where
//! each member starts and skips over everything else with depth-aware,
//! string-aware scanning, so no tree is ever allocated for the parts that
//! are never read. Re-decoding a stored [`Cursor`] is idempotent and free
//! of side effects; there is no cached state to invalidate.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonspan::{decode_number, decode_string_owned, parse_str, sniff, ValueKind};
//!
//! let doc = r#"{"name": "probe", "retries": 3, "timeouts": [5, 10, 30]}"#;
//! let index = parse_str(doc).unwrap();
//!
//! assert_eq!(decode_string_owned(index.get("name").unwrap()).unwrap(), "probe");
//! assert_eq!(decode_number(index.get("retries").unwrap()).unwrap(), 3.0);
//! assert_eq!(sniff(index.get("timeouts").unwrap()).unwrap(), ValueKind::Array);
//! ```
//!
//! Navigation is one level at a time: to look inside `timeouts`, hand its
//! cursor to [`index_array`] and decode the elements you want.
//!
//! ```rust
//! use jsonspan::{decode_number, index_array, parse_str};
//!
//! let doc = r#"{"timeouts": [5, 10, 30]}"#;
//! let index = parse_str(doc).unwrap();
//! let timeouts = index_array(index.get("timeouts").unwrap()).unwrap();
//!
//! let total: f64 = timeouts.iter().map(|c| decode_number(c).unwrap()).sum();
//! assert_eq!(total, 45.0);
//! ```
//!
//! ## Lifetimes
//!
//! Every [`Cursor`], key view, and index borrows from the input buffer; the
//! borrow checker guarantees none of them outlive it. Multiple indexes may
//! be built from the same read-only buffer, from any number of threads,
//! without coordination, since every operation is a pure read.
//!
//! ## Limitations
//!
//! - The document must start immediately with `{`; leading whitespace is
//!   the caller's to trim.
//! - `\uXXXX` unicode escapes are not decoded and are rejected as invalid
//!   escapes.
//! - Validation is not exhaustive: scanning is permissive wherever the
//!   grammar does not force a check, exactly as in the engine design this
//!   crate reimplements.

pub mod cursor;
pub mod decode;
pub mod error;
pub mod index;
pub mod scan;

pub use cursor::Cursor;
pub use decode::{
    decode_bool, decode_float, decode_int, decode_number, decode_string, decode_string_owned,
};
pub use error::{Error, Result};
pub use index::{index_array, index_object, ArrayIndex, ObjectIndex};
pub use scan::{skip_balanced_block, skip_quoted_string, skip_value, sniff, ValueKind};

/// Parses `input` into an index of its top-level object members.
///
/// The document must start immediately with `{`; no leading whitespace is
/// stripped. The returned index borrows from `input` and must not outlive
/// it.
///
/// # Errors
///
/// Any [`Error`] the object indexer reports; an empty buffer is
/// [`Error::UnexpectedEnd`] at offset 0.
pub fn parse(input: &[u8]) -> Result<ObjectIndex<'_>> {
    log::debug!("indexing document of {} bytes", input.len());
    index_object(Cursor::new(input))
}

/// Parses a string slice; see [`parse`].
///
/// This stands in for the original design's buffer overload, which appended
/// a temporary null terminator before parsing. Slices carry their length,
/// so no terminator is needed.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(input: &str) -> Result<ObjectIndex<'_>> {
    parse(input.as_bytes())
}
