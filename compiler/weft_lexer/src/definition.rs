//! Declarative language definitions, as supplied by a language source.
//!
//! A [`LanguageDefinition`] names everything by string. It is validated and
//! frozen into a [`LanguageDescriptor`](crate::LanguageDescriptor) by the
//! registry; nothing here is checked until then.

use std::sync::Arc;

use weft_lexer_core::Pattern;

use crate::state::Mode;

/// One recognition rule, by token type name.
#[derive(Clone, Debug)]
pub struct RuleDefinition {
    pub mode: Mode,
    pub pattern: Arc<dyn Pattern>,
    pub token_type: String,
    pub next_mode: Option<Mode>,
}

/// Delimiters of regions lexed by another language, wherever they occur.
#[derive(Clone, Debug)]
pub struct PreprocessorImportDefinition {
    pub start: Arc<dyn Pattern>,
    pub end: Arc<dyn Pattern>,
    /// Token type recorded for each detected region.
    pub token_type: String,
    pub inner_mime_type: String,
}

/// Opt-in recovery for quoted literals left open at end of line.
#[derive(Clone, Debug)]
pub struct LiteralRecoveryDefinition {
    /// Token type emitted for the recovered literal pieces.
    pub token_type: String,
    pub quotes: Vec<char>,
}

/// A complete, unvalidated language definition.
#[derive(Clone, Debug, Default)]
pub struct LanguageDefinition {
    pub mime_type: String,
    /// Token type names in declaration order. Duplicates are ignored.
    pub token_types: Vec<String>,
    pub rules: Vec<RuleDefinition>,
    pub preprocessor_import: Option<PreprocessorImportDefinition>,
    /// `(token type, inner mime type)`: tokens of that type embed the inner
    /// language over their whole range.
    pub token_imports: Vec<(String, String)>,
    pub literal_recovery: Option<LiteralRecoveryDefinition>,
}

impl LanguageDefinition {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    /// Declare token types, in order.
    #[must_use]
    pub fn token_types<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.token_types.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a rule that stays in `mode`.
    #[must_use]
    pub fn rule(self, mode: Mode, pattern: impl Pattern + 'static, token_type: &str) -> Self {
        self.push_rule(mode, Arc::new(pattern), token_type, None)
    }

    /// Add a rule that switches to `next_mode` after matching.
    #[must_use]
    pub fn rule_to(
        self,
        mode: Mode,
        pattern: impl Pattern + 'static,
        token_type: &str,
        next_mode: Mode,
    ) -> Self {
        self.push_rule(mode, Arc::new(pattern), token_type, Some(next_mode))
    }

    fn push_rule(
        mut self,
        mode: Mode,
        pattern: Arc<dyn Pattern>,
        token_type: &str,
        next_mode: Option<Mode>,
    ) -> Self {
        self.rules.push(RuleDefinition {
            mode,
            pattern,
            token_type: token_type.to_owned(),
            next_mode,
        });
        self
    }

    #[must_use]
    pub fn preprocessor_import(
        mut self,
        start: impl Pattern + 'static,
        end: impl Pattern + 'static,
        token_type: &str,
        inner_mime_type: &str,
    ) -> Self {
        self.preprocessor_import = Some(PreprocessorImportDefinition {
            start: Arc::new(start),
            end: Arc::new(end),
            token_type: token_type.to_owned(),
            inner_mime_type: inner_mime_type.to_owned(),
        });
        self
    }

    #[must_use]
    pub fn token_import(mut self, token_type: &str, inner_mime_type: &str) -> Self {
        self.token_imports
            .push((token_type.to_owned(), inner_mime_type.to_owned()));
        self
    }

    #[must_use]
    pub fn literal_recovery(mut self, token_type: &str, quotes: &[char]) -> Self {
        self.literal_recovery = Some(LiteralRecoveryDefinition {
            token_type: token_type.to_owned(),
            quotes: quotes.to_vec(),
        });
        self
    }
}
