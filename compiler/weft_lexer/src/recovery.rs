//! Recovery for quoted literals left open at end of line.
//!
//! When recognition fails on an opening quote (typically because the string
//! rule needs a closing quote on the same line), the engine emits the quote
//! alone as a literal token and parks in
//! [`LexerState::RecoveringLiteral`](crate::LexerState::RecoveringLiteral).
//! The next call consumes the rest of the literal up to the next quote
//! (inclusive), newline (exclusive), or EOF.
//!
//! Languages opt in with
//! [`LanguageDefinition::literal_recovery`](crate::LanguageDefinition::literal_recovery).

use weft_lexer_core::{CharInput, TokenTypeId};

/// Resolved literal recovery settings for one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralRecovery {
    /// Type emitted for the opening quote and the recovered body.
    pub ty: TokenTypeId,
    pub quotes: Vec<char>,
}

impl LiteralRecovery {
    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }

    /// Consume the body of an open literal.
    ///
    /// Stops after the next quote, before the next `\n` or `\r`, or at EOF.
    /// Returns the number of characters consumed.
    pub fn scan_body(&self, input: &mut dyn CharInput) -> u32 {
        let start = input.index();
        while !input.is_eof() {
            let c = input.peek();
            if c == '\n' || c == '\r' {
                break;
            }
            input.read();
            if self.is_quote(c) {
                break;
            }
        }
        input.index() - start
    }
}
