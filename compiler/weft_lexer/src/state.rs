//! Resumable lexer state.
//!
//! The state is the whole of what a fresh [`Lexer`](crate::Lexer) needs to
//! continue a pass at a token boundary. Hosts treat it as opaque: they save
//! it after a token, and hand it back when restarting at that token's end.

use crate::segment::SegmentQueue;

/// Recognizer mode: which subset of a language's rules is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mode(pub u32);

impl Mode {
    /// Mode a pass starts in.
    pub const INITIAL: Mode = Mode(0);
}

/// Exactly one of the engine's three resumable situations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexerState {
    /// Ordinary scanning in the given mode.
    Mode(Mode),
    /// An opening quote was emitted without a closing one; the next call
    /// resynchronizes at the next quote, newline, or EOF, then returns to
    /// `resume`.
    RecoveringLiteral { resume: Mode },
    /// A split token is being emitted one segment per call. `queue` is
    /// never empty; `resume` is restored once it drains.
    Pending { queue: SegmentQueue, resume: Mode },
}

impl LexerState {
    /// The mode scanning returns to once any pending work is done.
    pub fn mode(&self) -> Mode {
        match self {
            LexerState::Mode(mode)
            | LexerState::RecoveringLiteral { resume: mode }
            | LexerState::Pending { resume: mode, .. } => *mode,
        }
    }

    /// Returns `true` while a split token is still being emitted.
    pub fn is_pending(&self) -> bool {
        matches!(self, LexerState::Pending { .. })
    }
}

impl Default for LexerState {
    fn default() -> Self {
        LexerState::Mode(Mode::INITIAL)
    }
}

impl From<Mode> for LexerState {
    fn from(mode: Mode) -> Self {
        LexerState::Mode(mode)
    }
}
