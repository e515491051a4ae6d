//! Validated, immutable per-language data.
//!
//! A [`LanguageDescriptor`] is what a lexer runs against: the token table,
//! the resolved rules, and the embedding lookups. Every name in the
//! definition is resolved to a [`TokenTypeId`] once, at build time.

use rustc_hash::FxHashMap;
use tracing::debug;
use weft_lexer_core::{EmbeddingRule, TokenTypeId};

use crate::definition::LanguageDefinition;
use crate::error::DefinitionError;
use crate::recognizer::{Recognizer, Rule, RuleSet};
use crate::recovery::LiteralRecovery;
use crate::token_types::TokenTypeTable;

/// Resolved preprocessor import.
#[derive(Clone, Debug)]
pub struct PreprocessorImport {
    pub rule: EmbeddingRule,
    pub inner_mime_type: String,
}

/// Immutable descriptor for one mime type.
#[derive(Debug)]
pub struct LanguageDescriptor {
    mime_type: String,
    token_types: TokenTypeTable,
    rules: RuleSet,
    preprocessor_import: Option<PreprocessorImport>,
    token_imports: FxHashMap<TokenTypeId, String>,
    literal_recovery: Option<LiteralRecovery>,
}

impl LanguageDescriptor {
    /// Validate `definition` and resolve all of its names.
    pub fn build(definition: LanguageDefinition) -> Result<Self, DefinitionError> {
        let language = definition.mime_type;
        if language.is_empty() {
            return Err(DefinitionError::EmptyMimeType);
        }

        let mut token_types = TokenTypeTable::new();
        for name in &definition.token_types {
            if token_types.declare(name).is_none() {
                return Err(DefinitionError::TooManyTokenTypes {
                    language,
                    max: usize::from(u16::MAX),
                });
            }
        }

        let resolve = |name: &str, used_by: &'static str| {
            token_types
                .id(name)
                .ok_or_else(|| DefinitionError::UndeclaredTokenType {
                    language: language.clone(),
                    name: name.to_owned(),
                    used_by,
                })
        };

        let rules = definition
            .rules
            .into_iter()
            .map(|rule| {
                Ok(Rule {
                    mode: rule.mode,
                    pattern: rule.pattern,
                    ty: resolve(&rule.token_type, "a rule")?,
                    next_mode: rule.next_mode,
                })
            })
            .collect::<Result<Vec<_>, DefinitionError>>()?;

        let preprocessor_import = definition
            .preprocessor_import
            .map(|import| {
                Ok::<_, DefinitionError>(PreprocessorImport {
                    rule: EmbeddingRule {
                        start: import.start,
                        end: import.end,
                        ty: resolve(&import.token_type, "the preprocessor import")?,
                    },
                    inner_mime_type: import.inner_mime_type,
                })
            })
            .transpose()?;

        let mut token_imports = FxHashMap::default();
        for (name, inner) in definition.token_imports {
            let ty = resolve(&name, "a token import")?;
            token_imports.insert(ty, inner);
        }

        let literal_recovery = definition
            .literal_recovery
            .map(|recovery| {
                Ok::<_, DefinitionError>(LiteralRecovery {
                    ty: resolve(&recovery.token_type, "literal recovery")?,
                    quotes: recovery.quotes,
                })
            })
            .transpose()?;

        debug!(
            language = %language,
            token_types = token_types.len(),
            rules = rules.len(),
            "built language descriptor"
        );
        Ok(Self {
            mime_type: language,
            token_types,
            rules: RuleSet::new(rules),
            preprocessor_import,
            token_imports,
            literal_recovery,
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn token_types(&self) -> &TokenTypeTable {
        &self.token_types
    }

    /// Name of `ty` in this language's table.
    pub fn type_name(&self, ty: TokenTypeId) -> Option<&str> {
        self.token_types.name(ty)
    }

    pub fn recognizer(&self) -> &dyn Recognizer {
        &self.rules
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn preprocessor_import(&self) -> Option<&PreprocessorImport> {
        self.preprocessor_import.as_ref()
    }

    /// The scanner rule for preprocessor imports, if any.
    pub fn embedding_rule(&self) -> Option<&EmbeddingRule> {
        self.preprocessor_import.as_ref().map(|import| &import.rule)
    }

    /// Inner mime type embedded by tokens of type `ty`.
    pub fn token_import(&self, ty: TokenTypeId) -> Option<&str> {
        self.token_imports.get(&ty).map(String::as_str)
    }

    /// Every token import, in no particular order.
    pub fn token_imports(&self) -> impl Iterator<Item = (TokenTypeId, &str)> {
        self.token_imports
            .iter()
            .map(|(ty, inner)| (*ty, inner.as_str()))
    }

    pub fn literal_recovery(&self) -> Option<&LiteralRecovery> {
        self.literal_recovery.as_ref()
    }
}
