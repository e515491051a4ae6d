//! Seekable character cursor over a sentinel-terminated buffer.
//!
//! [`CharInput`] is the contract every scanning layer speaks: the plain
//! [`Cursor`] implements it directly, and the embedding scanner wraps any
//! other `CharInput` and implements it again with a detection side-channel.
//!
//! EOF is detected when the position has reached the source length. The
//! sentinel value [`EOF_CHAR`] is what reads return there; an interior
//! U+0000 at `pos < source_len` is ordinary content.

/// Character returned by reads and peeks at end of input.
pub const EOF_CHAR: char = '\0';

/// Read/peek/seek access to a character stream with absolute indices.
///
/// `peek` and `is_eof` take `&mut self`: wrapping layers may consume input
/// as a side effect of looking at it (see `EmbeddingScanner`).
pub trait CharInput {
    /// Consume one character and return it.
    ///
    /// At EOF returns [`EOF_CHAR`] and leaves the index unchanged.
    fn read(&mut self) -> char;

    /// Return the character at the current index without consuming it.
    fn peek(&mut self) -> char;

    /// Returns `true` once every source character has been consumed.
    fn is_eof(&mut self) -> bool;

    /// Absolute character index of the next read.
    fn index(&self) -> u32;

    /// Move to an absolute index, forward or backward.
    ///
    /// Clamped to the source length. Setting the current index is a no-op.
    fn set_index(&mut self, index: u32);

    /// Collect the characters in `from..to`.
    fn slice(&self, from: u32, to: u32) -> String;
}

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], enabling cheap snapshots for backtracking.
///
/// # Invariant
///
/// `buf[source_len]` is [`EOF_CHAR`] and at least one more padding slot
/// follows it. Guaranteed by `SourceBuffer` construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [char],
    /// Current read position (character index into `buf`).
    pos: u32,
    /// Number of source characters (excludes sentinel and padding).
    source_len: u32,
}

/// `&[char]` = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [char], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf[source_len as usize] == EOF_CHAR,
            "sentinel must be EOF_CHAR"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Character at the current position; [`EOF_CHAR`] at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.buf[self.pos as usize]
    }

    /// Number of source characters.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Number of characters left before EOF.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.source_len - self.pos
    }
}

impl CharInput for Cursor<'_> {
    #[inline]
    fn read(&mut self) -> char {
        let c = self.buf[self.pos as usize];
        if self.pos < self.source_len {
            self.pos += 1;
        }
        c
    }

    #[inline]
    fn peek(&mut self) -> char {
        self.current()
    }

    #[inline]
    fn is_eof(&mut self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    fn index(&self) -> u32 {
        self.pos
    }

    #[inline]
    fn set_index(&mut self, index: u32) {
        self.pos = index.min(self.source_len);
    }

    fn slice(&self, from: u32, to: u32) -> String {
        debug_assert!(from <= to, "slice start {from} exceeds end {to}");
        let to = to.min(self.source_len) as usize;
        let from = (from as usize).min(to);
        self.buf[from..to].iter().collect()
    }
}

#[cfg(test)]
mod tests;
