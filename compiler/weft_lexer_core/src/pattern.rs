//! Pattern matching at the current cursor position.
//!
//! A [`Pattern`] answers one question: does it match at the current index?
//! On success the input is left advanced past the match and the match
//! length is returned; on failure the input index is restored.
//!
//! Lengths are measured as index movement, not as characters compared.
//! When the input is an `EmbeddingScanner`, a read may hop over a whole
//! embedded region, and that region counts toward the match.

use std::fmt;
use std::sync::Arc;

use crate::cursor::CharInput;

/// A matcher over a [`CharInput`].
pub trait Pattern: fmt::Debug + Send + Sync {
    /// Try to match at the current index.
    ///
    /// Returns `Some(len)` and leaves `input` advanced by `len` on success.
    /// Returns `None` and leaves `input` where it was on failure.
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32>;
}

impl<P: Pattern + ?Sized> Pattern for Arc<P> {
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32> {
        (**self).match_at(input)
    }
}

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32> {
        (**self).match_at(input)
    }
}

/// Exact string match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    text: Box<[char]>,
}

impl Literal {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
        }
    }

    /// Number of characters in the literal.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Pattern for Literal {
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32> {
        let start = input.index();
        for &expected in &*self.text {
            if input.is_eof() || input.read() != expected {
                input.set_index(start);
                return None;
            }
        }
        Some(input.index() - start)
    }
}

/// A character class repeated at least `min` times (greedy).
pub struct Run {
    accepts: Box<dyn Fn(char) -> bool + Send + Sync>,
    min: u32,
    label: String,
}

impl Run {
    /// Characters for which `pred` holds, at least `min` of them.
    pub fn while_fn(
        label: impl Into<String>,
        min: u32,
        pred: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            accepts: Box::new(pred),
            min,
            label: label.into(),
        }
    }

    /// One or more characters from `set`.
    pub fn any_of(set: &str) -> Self {
        let members: Vec<char> = set.chars().collect();
        Self::while_fn(format!("[{set}]+"), 1, move |c| members.contains(&c))
    }

    /// One or more characters not in `set`.
    pub fn none_of(set: &str) -> Self {
        let members: Vec<char> = set.chars().collect();
        Self::while_fn(format!("[^{set}]+"), 1, move |c| !members.contains(&c))
    }

    /// Change the minimum repetition count.
    #[must_use]
    pub fn at_least(mut self, min: u32) -> Self {
        self.min = min;
        self
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("class", &self.label)
            .field("min", &self.min)
            .finish()
    }
}

impl Pattern for Run {
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32> {
        let start = input.index();
        let mut count = 0u32;
        while !input.is_eof() && (self.accepts)(input.peek()) {
            input.read();
            count += 1;
        }
        // `is_eof`/`peek` may have hopped over embedded regions, so `moved`
        // can exceed `count`. Hopped characters count toward the minimum.
        debug_assert!(input.index() - start >= count);
        let moved = input.index() - start;
        if moved >= self.min {
            Some(moved)
        } else {
            input.set_index(start);
            None
        }
    }
}

/// All parts in order.
#[derive(Debug)]
pub struct Sequence {
    parts: Vec<Box<dyn Pattern>>,
}

impl Sequence {
    pub fn new(parts: Vec<Box<dyn Pattern>>) -> Self {
        Self { parts }
    }
}

impl Pattern for Sequence {
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32> {
        let start = input.index();
        for part in &self.parts {
            if part.match_at(input).is_none() {
                input.set_index(start);
                return None;
            }
        }
        Some(input.index() - start)
    }
}

/// First alternative that matches.
#[derive(Debug)]
pub struct Choice {
    alternatives: Vec<Box<dyn Pattern>>,
}

impl Choice {
    pub fn new(alternatives: Vec<Box<dyn Pattern>>) -> Self {
        Self { alternatives }
    }
}

impl Pattern for Choice {
    fn match_at(&self, input: &mut dyn CharInput) -> Option<u32> {
        self.alternatives.iter().find_map(|alt| alt.match_at(input))
    }
}
