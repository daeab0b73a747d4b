//! Structural indexes and the depth-1 indexers that build them.
//!
//! Indexing records *where* a structure's immediate members live, not what
//! they contain. An [`ObjectIndex`] maps borrowed key views to cursors; an
//! [`ArrayIndex`] is an ordered sequence of cursors. Either can be handed
//! back to [`sniff`](crate::sniff), the decoders, or the indexers again to
//! go one level deeper, so nothing is ever materialized that the caller
//! does not ask for.
//!
//! ## Examples
//!
//! ```rust
//! use jsonspan::{decode_number, index_array, parse_str};
//!
//! let index = parse_str(r#"{"scores": [3, 1, 4]}"#).unwrap();
//! let scores = index_array(index.get("scores").unwrap()).unwrap();
//! assert_eq!(scores.len(), 3);
//! assert_eq!(decode_number(scores.get(2).unwrap()).unwrap(), 4.0);
//! ```

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::scan::skip_value;

/// An index of an object's top-level members.
///
/// Keys are borrowed views of the raw bytes between each key's quotes (no
/// copy, no unescaping) mapped to cursors at the start of the unparsed
/// values. Insertion order is preserved and duplicate keys deterministically
/// keep the last value seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectIndex<'a> {
    entries: IndexMap<&'a str, Cursor<'a>>,
}

impl<'a> ObjectIndex<'a> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        ObjectIndex {
            entries: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: &'a str, value: Cursor<'a>) {
        self.entries.insert(key, value);
    }

    /// Looks up the cursor recorded for `key`, by exact raw-byte match.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Cursor<'a>> {
        self.entries.get(key).copied()
    }

    /// Whether `key` was recorded.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The number of members recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object had no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    /// The recorded `(key, cursor)` pairs, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Cursor<'a>)> + '_ {
        self.entries.iter().map(|(&k, &c)| (k, c))
    }
}

/// An index of an array's elements: one cursor per element, in document
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayIndex<'a> {
    elements: Vec<Cursor<'a>>,
}

impl<'a> ArrayIndex<'a> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        ArrayIndex {
            elements: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, element: Cursor<'a>) {
        self.elements.push(element);
    }

    /// The cursor recorded for element `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Cursor<'a>> {
        self.elements.get(i).copied()
    }

    /// The number of elements recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the array had no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The recorded cursors, in document order.
    pub fn iter(&self) -> impl Iterator<Item = Cursor<'a>> + '_ {
        self.elements.iter().copied()
    }
}

impl<'s, 'a> IntoIterator for &'s ArrayIndex<'a> {
    type Item = Cursor<'a>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, Cursor<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter().copied()
    }
}

/// Indexes the array starting at `cur`, recording a cursor per element
/// without descending into nested structures.
///
/// # Errors
///
/// [`Error::Unexpected`] if `cur` is not on `[` or an element separator is
/// missing, plus anything [`skip_value`] reports for an element.
pub fn index_array(cur: Cursor<'_>) -> Result<ArrayIndex<'_>> {
    let mut index = ArrayIndex::new();
    let mut cur = cur.expect(Some(b'['))?.skip_whitespace();

    if cur.peek() == Some(b']') {
        return Ok(index);
    }
    loop {
        index.push(cur);

        cur = skip_value(cur)?.skip_whitespace();
        if cur.peek() == Some(b']') {
            return Ok(index);
        }
        cur = cur.expect(Some(b','))?.skip_whitespace();
    }
}

/// Indexes the object starting at `cur`, recording a cursor per member
/// keyed by a borrowed view of the member's raw key bytes.
///
/// # Errors
///
/// [`Error::Unexpected`] if `cur` is not on `{`, a key is not quoted, or a
/// `:`/`,` is missing; [`Error::InvalidUtf8`] if a key span is not valid
/// UTF-8; plus anything [`skip_value`] reports for a member value.
pub fn index_object(cur: Cursor<'_>) -> Result<ObjectIndex<'_>> {
    let mut index = ObjectIndex::new();
    let mut cur = cur.expect(Some(b'{'))?.skip_whitespace();

    if cur.peek() == Some(b'}') {
        return Ok(index);
    }
    loop {
        let key = scan_key(cur)?;
        log::trace!("indexed key {:?} at offset {}", key.text, cur.offset());

        cur = key.after.skip_whitespace();
        cur = cur.expect(Some(b':'))?.skip_whitespace();
        index.insert(key.text, cur);

        cur = skip_value(cur)?.skip_whitespace();
        if cur.peek() == Some(b'}') {
            return Ok(index);
        }
        cur = cur.expect(Some(b','))?.skip_whitespace();
    }
}

struct Key<'a> {
    /// Raw bytes between the quotes, escapes left as written.
    text: &'a str,
    /// Just past the closing quote.
    after: Cursor<'a>,
}

fn scan_key(cur: Cursor<'_>) -> Result<Key<'_>> {
    let after = crate::scan::skip_quoted_string(cur)?;
    let span_len = after.offset() - cur.offset();
    let raw = &cur.rest()[1..span_len - 1];
    let text = std::str::from_utf8(raw).map_err(|_| Error::invalid_utf8(cur.offset() + 1))?;
    Ok(Key { text, after })
}
