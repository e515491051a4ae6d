//! The token engine: one resumable "produce next token" step at a time.
//!
//! Each call of [`Lexer::next_token`] does exactly one of:
//!
//! 1. pop the next segment of a split token (`LexerState::Pending`)
//! 2. finish an open literal (`LexerState::RecoveringLiteral`)
//! 3. at EOF, emit trailing embedded regions or report the end
//! 4. run the recognizer and emit its token, splitting it at embeddings
//! 5. on no match, force one character of progress as an error token
//!
//! # Restart
//!
//! A lexer carries no state outside [`LexerState`] and the cursor index. A
//! fresh lexer built by [`Lexer::restart`] from a saved state at the end of
//! token `k` produces exactly the tokens the original would have produced
//! after `k`.

use std::sync::Arc;

use tracing::trace;
use weft_lexer_core::{CharInput, Cursor, EmbeddingScanner, SourceBuffer, TokenTypeId};

use crate::descriptor::LanguageDescriptor;
use crate::segment::SegmentQueue;
use crate::state::{LexerState, Mode};
use crate::token::Token;

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Enable open-literal recovery for languages that declare it.
    pub literal_recovery: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            literal_recovery: true,
        }
    }
}

/// Pull-based lexer for one language over one buffer.
///
/// Single-threaded and non-reentrant; every call is bounded by the length of
/// the remaining input.
pub struct Lexer<'a> {
    descriptor: Arc<LanguageDescriptor>,
    input: EmbeddingScanner<Cursor<'a>>,
    state: LexerState,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Start a pass at offset 0 in [`Mode::INITIAL`].
    pub fn new(descriptor: Arc<LanguageDescriptor>, source: &'a SourceBuffer) -> Self {
        let rule = descriptor.embedding_rule().cloned();
        Self {
            input: EmbeddingScanner::new(source.cursor(), rule),
            descriptor,
            state: LexerState::default(),
            config: LexerConfig::default(),
        }
    }

    /// Resume a pass from a saved state.
    ///
    /// `offset` is the end of the last token emitted before `state` was
    /// saved. For a pending state the cursor goes to the end of the queued
    /// token instead, since that token was already fully scanned.
    pub fn restart(
        descriptor: Arc<LanguageDescriptor>,
        source: &'a SourceBuffer,
        offset: u32,
        state: LexerState,
    ) -> Self {
        let mut lexer = Self::new(descriptor, source);
        let index = match &state {
            LexerState::Pending { queue, .. } => {
                debug_assert!(
                    queue.front().map_or(true, |segment| segment.start == offset),
                    "pending queue does not start at restart offset {offset}"
                );
                queue.end().unwrap_or(offset)
            }
            LexerState::Mode(_) | LexerState::RecoveringLiteral { .. } => offset,
        };
        lexer.input.set_index(index);
        lexer.state = state;
        lexer
    }

    #[must_use]
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn descriptor(&self) -> &Arc<LanguageDescriptor> {
        &self.descriptor
    }

    /// The resumable state to save alongside the last token's end.
    pub fn state(&self) -> &LexerState {
        &self.state
    }

    /// Replace the resumable state at the current position.
    pub fn set_state(&mut self, state: LexerState) {
        self.state = state;
    }

    /// Start offset of the token the next call will produce.
    pub fn offset(&self) -> u32 {
        match &self.state {
            LexerState::Pending { queue, .. } => queue
                .front()
                .map_or(self.input.index(), |segment| segment.start),
            LexerState::Mode(_) | LexerState::RecoveringLiteral { .. } => self.input.index(),
        }
    }

    /// Produce the next token or segment, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.produce(true)?;
        trace!(
            ty = token.ty.raw(),
            start = token.start,
            end = token.end,
            role = ?token.properties.role,
            "token"
        );
        Some(token)
    }

    fn produce(&mut self, may_retry: bool) -> Option<Token> {
        loop {
            match std::mem::take(&mut self.state) {
                LexerState::Pending { queue, resume } => {
                    if let Some(token) = self.pop_pending(queue, resume) {
                        return Some(token);
                    }
                }
                LexerState::RecoveringLiteral { resume } => {
                    self.state = LexerState::Mode(resume);
                    if let Some(token) = self.recover_literal(resume) {
                        return Some(token);
                    }
                }
                LexerState::Mode(mode) => return self.scan(mode, may_retry),
            }
        }
    }

    /// Pop one segment and park the rest. An empty queue restores `resume`.
    fn pop_pending(&mut self, mut queue: SegmentQueue, resume: Mode) -> Option<Token> {
        let segment = queue.pop();
        self.state = if queue.is_empty() {
            LexerState::Mode(resume)
        } else {
            LexerState::Pending { queue, resume }
        };
        segment.map(|segment| segment.to_token())
    }

    fn scan(&mut self, mode: Mode, may_retry: bool) -> Option<Token> {
        let start = self.input.index();

        if self.input.is_eof() {
            // The EOF check itself may have hopped a trailing region that no
            // outer token wraps.
            let end = self.input.index();
            let spans = self.input.take_embeddings();
            if spans.is_empty() {
                self.state = LexerState::Mode(mode);
                return None;
            }
            trace!(start, end, spans = spans.len(), "trailing embeddings");
            let queue = SegmentQueue::split(TokenTypeId::ERROR, start, end, &spans);
            return self.pop_pending(queue, mode);
        }

        let mut next_mode = mode;
        let recognized = self
            .descriptor
            .recognizer()
            .recognize(&mut self.input, &mut next_mode);
        let end = self.input.index();

        match recognized {
            Some(ty) if end > start => self.emit(ty, start, end, next_mode),
            Some(_) if next_mode != mode && may_retry => {
                trace!(from = mode.0, to = next_mode.0, "empty step, retrying");
                self.state = LexerState::Mode(next_mode);
                self.produce(false)
            }
            _ => self.no_match(start, mode),
        }
    }

    /// Force progress after a failed recognition.
    ///
    /// Covers at least one character, or everything the scanner already
    /// hopped over. An opening quote enters literal recovery instead.
    fn no_match(&mut self, start: u32, mode: Mode) -> Option<Token> {
        if self.input.index() == start {
            if let Some(ty) = self.open_literal() {
                self.input.read();
                self.state = LexerState::RecoveringLiteral { resume: mode };
                return Some(Token::new(ty, start, self.input.index()));
            }
            self.input.read();
        }
        let end = self.input.index();
        self.emit(TokenTypeId::ERROR, start, end, mode)
    }

    /// Literal type to recover with, if the current char opens a literal.
    fn open_literal(&mut self) -> Option<TokenTypeId> {
        if !self.config.literal_recovery {
            return None;
        }
        let recovery = self.descriptor.literal_recovery()?;
        recovery
            .is_quote(self.input.peek())
            .then_some(recovery.ty)
    }

    fn recover_literal(&mut self, resume: Mode) -> Option<Token> {
        if !self.config.literal_recovery {
            return None;
        }
        let recovery = self.descriptor.literal_recovery()?;
        let ty = recovery.ty;
        let start = self.input.index();
        if recovery.scan_body(&mut self.input) == 0 {
            return None;
        }
        let end = self.input.index();
        self.emit(ty, start, end, resume)
    }

    /// Emit `ty` over `start..end`, split at any embeddings taken from the
    /// scanner.
    fn emit(&mut self, ty: TokenTypeId, start: u32, end: u32, resume: Mode) -> Option<Token> {
        let spans = self.input.take_embeddings();
        if spans.is_empty() {
            self.state = LexerState::Mode(resume);
            return Some(Token::new(ty, start, end));
        }
        let queue = SegmentQueue::split(ty, start, end, &spans);
        self.pop_pending(queue, resume)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
