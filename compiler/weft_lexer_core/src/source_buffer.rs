//! Sentinel-terminated character buffer.
//!
//! The buffer stores the document decoded into `char`s followed by a
//! trailing [`EOF_CHAR`] sentinel, so [`Cursor::peek`] at the last position
//! never goes out of bounds. Indices handed out by cursors are character
//! indices, which is what hosts (editors) count in.
//!
//! # Interior Null Characters
//!
//! A source may contain U+0000. Cursors distinguish it from the sentinel by
//! comparing the position against the source length, never by value alone.

use crate::cursor::{Cursor, EOF_CHAR};

/// Padding after the source: one sentinel plus one spare slot for `peek`
/// from the sentinel itself.
const PADDING: usize = 2;

/// Owned, sentinel-terminated character buffer.
///
/// # Layout
///
/// ```text
/// [source_chars..., '\0', '\0']
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    /// `[source_chars..., sentinel, padding]`.
    chars: Vec<char>,
    /// Number of source characters (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Decode `source` into a new buffer.
    ///
    /// Sources longer than `u32::MAX` characters saturate `source_len`;
    /// the cursor then stops at that index.
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(source.len() + PADDING);
        chars.extend(source.chars());
        let source_len = u32::try_from(chars.len()).unwrap_or(u32::MAX);
        chars.extend(std::iter::repeat(EOF_CHAR).take(PADDING));
        Self { chars, source_len }
    }

    /// Create a [`Cursor`] positioned at index 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars, self.source_len)
    }

    /// Number of source characters.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Source characters without sentinel or padding.
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..self.source_len as usize]
    }

    /// Collect the characters in `start..end` into a `String`.
    ///
    /// Bounds are clamped to the source, so an out-of-range request yields
    /// a shorter (possibly empty) string rather than panicking.
    pub fn slice(&self, start: u32, end: u32) -> String {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        self.chars[start..end].iter().collect()
    }
}

#[cfg(test)]
mod tests;
