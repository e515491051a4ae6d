//! Low-level building blocks for the Weft embedding lexer.
//!
//! This crate knows nothing about languages, token tables, or lexer state.
//! It provides:
//!
//! - [`SourceBuffer`] / [`Cursor`]: a sentinel-terminated character buffer
//!   with absolute, seekable character indices
//! - [`CharInput`]: the read/peek/seek contract every scanner layer speaks
//! - [`Pattern`]: the "does this match here" capability, plus stock patterns
//! - [`EmbeddingScanner`]: a [`CharInput`] wrapper that detects embedded
//!   regions as a side channel while the outer recognizer reads
//!
//! Offsets are character indices into the original text, never bytes.

mod cursor;
mod embedding;
mod pattern;
mod source_buffer;
mod token_type;

pub use cursor::{CharInput, Cursor, EOF_CHAR};
pub use embedding::{EmbeddingRule, EmbeddingScanner, EmbeddingSpan};
pub use pattern::{Choice, Literal, Pattern, Run, Sequence};
pub use source_buffer::SourceBuffer;
pub use token_type::TokenTypeId;
