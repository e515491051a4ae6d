//! Embedding detection as a side channel of ordinary reads.
//!
//! [`EmbeddingScanner`] wraps a [`CharInput`]. Before every `read`, `peek`,
//! or `is_eof` it checks whether the rule's start delimiter matches at the
//! current index. If it does, the scanner consumes through the end
//! delimiter (or EOF) and records an [`EmbeddingSpan`]. The outer
//! recognizer never sees the embedded characters; it only sees the cursor
//! jump past them.
//!
//! Spans are collected until [`take_embeddings`](EmbeddingScanner::take_embeddings)
//! drains them. Each span is handed out exactly once.
//!
//! # Backtracking
//!
//! [`set_index`](CharInput::set_index) forgets every span that does not end
//! at or before the new index. Input that is read again after a backtrack is
//! detected again, so a pattern that fails and restores the cursor leaves no
//! stale spans behind.

use std::sync::Arc;

use crate::cursor::CharInput;
use crate::pattern::Pattern;
use crate::token_type::TokenTypeId;

/// Delimiters that open and close an embedded region, plus the token type
/// recorded for the region.
#[derive(Clone, Debug)]
pub struct EmbeddingRule {
    pub start: Arc<dyn Pattern>,
    pub end: Arc<dyn Pattern>,
    pub ty: TokenTypeId,
}

/// A detected embedded region of the outer stream.
///
/// `start..end` includes both delimiters. The inner content is
/// `start + start_skip .. end - end_skip`. `end_skip == 0` means the region
/// was cut short by end of input instead of closed by a delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddingSpan {
    pub ty: TokenTypeId,
    pub start: u32,
    pub end: u32,
    pub start_skip: u32,
    pub end_skip: u32,
}

impl EmbeddingSpan {
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the end delimiter was never found.
    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.end_skip == 0
    }
}

/// [`CharInput`] wrapper that records embedded regions while reading.
#[derive(Debug)]
pub struct EmbeddingScanner<I> {
    inner: I,
    rule: Option<EmbeddingRule>,
    spans: Vec<EmbeddingSpan>,
}

impl<I: CharInput> EmbeddingScanner<I> {
    /// Wrap `inner`. With `rule == None` the scanner is a pass-through.
    pub fn new(inner: I, rule: Option<EmbeddingRule>) -> Self {
        Self {
            inner,
            rule,
            spans: Vec::new(),
        }
    }

    /// Drain every span recorded since the previous call.
    pub fn take_embeddings(&mut self) -> Vec<EmbeddingSpan> {
        std::mem::take(&mut self.spans)
    }

    /// Returns `true` if spans are waiting to be taken.
    pub fn has_embeddings(&self) -> bool {
        !self.spans.is_empty()
    }

    /// The wrapped input.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }

    /// Consume every embedded region starting at the current index.
    ///
    /// Loops so back-to-back regions yield back-to-back spans.
    fn detect(&mut self) {
        let Some(rule) = &self.rule else {
            return;
        };
        loop {
            if self.inner.is_eof() {
                return;
            }
            let start = self.inner.index();
            // A zero-length start match opens nothing.
            match rule.start.match_at(&mut self.inner) {
                Some(0) | None => return,
                Some(start_skip) => {
                    let end_skip = loop {
                        if self.inner.is_eof() {
                            break 0;
                        }
                        if let Some(len) = rule.end.match_at(&mut self.inner) {
                            break len;
                        }
                        self.inner.read();
                    };
                    let span = EmbeddingSpan {
                        ty: rule.ty,
                        start,
                        end: self.inner.index(),
                        start_skip,
                        end_skip,
                    };
                    self.spans.push(span);
                }
            }
        }
    }
}

impl<I: CharInput> CharInput for EmbeddingScanner<I> {
    fn read(&mut self) -> char {
        self.detect();
        self.inner.read()
    }

    fn peek(&mut self) -> char {
        self.detect();
        self.inner.peek()
    }

    fn is_eof(&mut self) -> bool {
        self.detect();
        self.inner.is_eof()
    }

    fn index(&self) -> u32 {
        self.inner.index()
    }

    fn set_index(&mut self, index: u32) {
        if index == self.inner.index() {
            return;
        }
        self.inner.set_index(index);
        let index = self.inner.index();
        self.spans.retain(|span| span.end <= index);
    }

    fn slice(&self, from: u32, to: u32) -> String {
        self.inner.slice(from, to)
    }
}
