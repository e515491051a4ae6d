//! Incremental embedding lexer.
//!
//! Turns text into a stream of typed tokens, one resumable step at a time,
//! while recognizing regions that belong to another language and reporting
//! them as injected segments.
//!
//! # Architecture
//!
//! - [`LanguageDefinition`] → [`LanguageDescriptor`]: a declarative grammar
//!   validated once into resolved rules and embedding lookups
//! - [`Lexer`]: the token engine, driven by [`Lexer::next_token`]
//! - [`LexerState`]: everything needed to restart a pass at a token boundary
//! - [`LanguageRegistry`]: descriptor cache over a [`LanguageSource`], and
//!   [`LanguageRegistry::find_embedding`] for mounting inner languages
//!
//! Character-level scanning lives in [`weft_lexer_core`].

mod definition;
mod descriptor;
mod engine;
mod error;
mod recognizer;
mod recovery;
mod registry;
mod segment;
mod state;
mod token;
mod token_types;

pub use definition::{
    LanguageDefinition, LiteralRecoveryDefinition, PreprocessorImportDefinition, RuleDefinition,
};
pub use descriptor::{LanguageDescriptor, PreprocessorImport};
pub use engine::{Lexer, LexerConfig};
pub use error::DefinitionError;
pub use recognizer::{Recognizer, Rule, RuleSet};
pub use recovery::LiteralRecovery;
pub use registry::{
    ChangeListener, Embedding, InMemoryLanguageSource, LanguageRegistry, LanguageSource,
    Listeners, SubscriptionId,
};
pub use segment::{Segment, SegmentQueue};
pub use state::{LexerState, Mode};
pub use token::{SegmentRole, SkipLengths, Token, TokenProperties};
pub use token_types::{TokenTypeTable, ERROR_TYPE_NAME};

pub use weft_lexer_core::{
    CharInput, Choice, Cursor, EmbeddingRule, EmbeddingSpan, Literal, Pattern, Run, Sequence,
    SourceBuffer, TokenTypeId, EOF_CHAR,
};
