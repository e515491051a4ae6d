//! Splitting an outer token at embedding boundaries.
//!
//! When embedded regions fall inside a recognized token, the token is reported
//! as several consecutive segments, one per call, instead of as one token.
//! [`SegmentQueue::split`] builds the segments; the engine parks the queue in
//! the resumable state and pops one segment per call.
//!
//! # Tiling
//!
//! Segments are ordered, never empty, and tile the token range exactly:
//!
//! ```text
//! token:    [a ............................................. b)
//! spans:          [S1 .....)      [S2 ....)[S3 ...)
//! segments: [CS  )[INJ     )[CONT )[INJ    )[INJ   )[CONT     )
//! ```
//!
//! Only the gap before the first embedding is `ContinuousStart`. Every later
//! gap is `Continuous`. Adjacent embeddings produce no gap segment.

use std::collections::VecDeque;

use tracing::trace;
use weft_lexer_core::{EmbeddingSpan, TokenTypeId};

use crate::token::{SegmentRole, SkipLengths, Token, TokenProperties};

/// One fragment of a split token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub ty: TokenTypeId,
    pub start: u32,
    pub end: u32,
    pub role: SegmentRole,
    /// Present only on [`SegmentRole::Injected`] segments.
    pub skip: Option<SkipLengths>,
}

impl Segment {
    /// The token a host receives for this segment.
    pub fn to_token(&self) -> Token {
        Token {
            ty: self.ty,
            start: self.start,
            end: self.end,
            properties: TokenProperties {
                role: Some(self.role),
                skip: self.skip,
            },
        }
    }
}

/// Not-yet-emitted segments of one split token, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SegmentQueue {
    segments: VecDeque<Segment>,
}

impl SegmentQueue {
    /// Split the outer token `ty` over `start..end` at each span.
    ///
    /// Spans are sorted by start and clipped to the token range; spans that
    /// fall outside it or overlap an earlier span contribute only their
    /// in-range, non-overlapping remainder.
    pub fn split(ty: TokenTypeId, start: u32, end: u32, spans: &[EmbeddingSpan]) -> Self {
        let mut sorted: Vec<&EmbeddingSpan> = spans.iter().collect();
        sorted.sort_by_key(|span| span.start);

        let mut segments = VecDeque::with_capacity(sorted.len() * 2 + 1);
        let mut pos = start;
        let mut seen_injected = false;
        for span in sorted {
            let span_start = span.start.max(pos);
            let span_end = span.end.min(end);
            if span_start >= span_end {
                continue;
            }
            if pos < span_start {
                let role = if seen_injected {
                    SegmentRole::Continuous
                } else {
                    SegmentRole::ContinuousStart
                };
                segments.push_back(Segment {
                    ty,
                    start: pos,
                    end: span_start,
                    role,
                    skip: None,
                });
            }
            segments.push_back(Segment {
                ty: span.ty,
                start: span_start,
                end: span_end,
                role: SegmentRole::Injected,
                skip: Some(SkipLengths::from(span)),
            });
            seen_injected = true;
            pos = span_end;
        }
        if pos < end {
            let role = if seen_injected {
                SegmentRole::Continuous
            } else {
                SegmentRole::ContinuousStart
            };
            segments.push_back(Segment {
                ty,
                start: pos,
                end,
                role,
                skip: None,
            });
        }

        trace!(
            start,
            end,
            spans = spans.len(),
            segments = segments.len(),
            "split token at embeddings"
        );
        SegmentQueue { segments }
    }

    /// Remove and return the next segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop_front()
    }

    /// The next segment, without removing it.
    pub fn front(&self) -> Option<&Segment> {
        self.segments.front()
    }

    /// End offset of the last queued segment.
    ///
    /// This is where the cursor sits while the queue drains.
    pub fn end(&self) -> Option<u32> {
        self.segments.back().map(|segment| segment.end)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
