//! Grammar-defined token recognition.
//!
//! A [`Recognizer`] consumes zero or more characters at the current index and
//! classifies them. It may change the mode. It must leave the input where it
//! started when it returns `None`.
//!
//! [`RuleSet`] is the declarative recognizer built from a language
//! definition: ordered `(mode, pattern, type, next mode)` rules, first match
//! wins.

use std::sync::Arc;

use weft_lexer_core::{CharInput, Pattern, TokenTypeId};

use crate::state::Mode;

/// Recognizes one token at the current index.
pub trait Recognizer: Send + Sync {
    /// Try to recognize a token in `mode`.
    ///
    /// On success the input is advanced past the token, `mode` holds the
    /// mode for the next token, and the token type is returned. A zero-length
    /// success is allowed only together with a mode change.
    fn recognize(&self, input: &mut dyn CharInput, mode: &mut Mode) -> Option<TokenTypeId>;
}

/// One resolved rule.
#[derive(Clone, Debug)]
pub struct Rule {
    pub mode: Mode,
    pub pattern: Arc<dyn Pattern>,
    pub ty: TokenTypeId,
    /// Mode to switch to after this rule matches; `None` stays put.
    pub next_mode: Option<Mode>,
}

/// Ordered rules, tried in declaration order within the current mode.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Recognizer for RuleSet {
    fn recognize(&self, input: &mut dyn CharInput, mode: &mut Mode) -> Option<TokenTypeId> {
        let current = *mode;
        for rule in self.rules.iter().filter(|rule| rule.mode == current) {
            let Some(len) = rule.pattern.match_at(input) else {
                continue;
            };
            let next = rule.next_mode.unwrap_or(current);
            if len == 0 && next == current {
                // Empty and mode-preserving: matching it would loop forever.
                continue;
            }
            *mode = next;
            return Some(rule.ty);
        }
        None
    }
}

#[cfg(test)]
mod tests;
