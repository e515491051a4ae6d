//! Tokens produced by the engine and their property bag.

use weft_lexer_core::{EmbeddingSpan, TokenTypeId};

/// Role of a fragment of an outer token that was split by embeddings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    /// First fragment of the outer token, before the first embedding.
    ContinuousStart,
    /// Later fragment of the outer token, between or after embeddings.
    Continuous,
    /// An embedded region, typed with the embedding's token type.
    Injected,
}

impl SegmentRole {
    /// Returns `true` for fragments of the outer token (not embeddings).
    ///
    /// Hosts use this to stitch the logical outer token back together.
    pub fn is_continuation(self) -> bool {
        matches!(self, SegmentRole::ContinuousStart | SegmentRole::Continuous)
    }
}

/// Delimiter lengths to strip from each end of an embedded range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SkipLengths {
    pub start: u32,
    pub end: u32,
}

impl From<&EmbeddingSpan> for SkipLengths {
    fn from(span: &EmbeddingSpan) -> Self {
        SkipLengths {
            start: span.start_skip,
            end: span.end_skip,
        }
    }
}

/// Property bag carried alongside a token.
///
/// `role` is set only on segments of a split token. `skip` is set only on
/// injected segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenProperties {
    pub role: Option<SegmentRole>,
    pub skip: Option<SkipLengths>,
}

/// A classified range `start..end` of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub ty: TokenTypeId,
    pub start: u32,
    pub end: u32,
    pub properties: TokenProperties,
}

impl Token {
    /// An unsplit token with no properties.
    pub fn new(ty: TokenTypeId, start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "token start {start} exceeds end {end}");
        Token {
            ty,
            start,
            end,
            properties: TokenProperties::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Segment role, if this token is a fragment of a split token.
    #[inline]
    pub fn role(&self) -> Option<SegmentRole> {
        self.properties.role
    }

    /// Returns `true` if this is an injected (embedded) segment.
    #[inline]
    pub fn is_injected(&self) -> bool {
        self.properties.role == Some(SegmentRole::Injected)
    }
}
