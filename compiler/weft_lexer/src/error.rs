//! Errors raised while loading language definitions.
//!
//! Tokenization itself never fails: unrecognized input becomes error tokens.
//! These errors only surface from descriptor loading, and the registry turns
//! them into "no descriptor available" for callers that don't ask why.

/// Why a language definition could not be turned into a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// The source has no definition for this mime type.
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    /// The definition's mime type is empty.
    #[error("language definition has an empty mime type")]
    EmptyMimeType,

    /// A rule, import, or recovery declaration names an undeclared type.
    #[error("language `{language}`: {used_by} refers to undeclared token type `{name}`")]
    UndeclaredTokenType {
        language: String,
        name: String,
        used_by: &'static str,
    },

    /// More token types than a [`TokenTypeId`](weft_lexer_core::TokenTypeId) can index.
    #[error("language `{language}` declares more than {max} token types")]
    TooManyTokenTypes { language: String, max: usize },

    /// The source could not parse its definition.
    #[error("language `{language}` is malformed: {reason}")]
    Malformed { language: String, reason: String },
}
