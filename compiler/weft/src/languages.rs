//! Built-in language definitions.
//!
//! - `text/x-make`: a Makefile subset. Recipe lines (tab-led) embed the
//!   shell as a token import; backtick substitutions embed it anywhere
//!   through the preprocessor import.
//! - `text/sh`: a shell subset with literal recovery for quotes left open
//!   at end of line.

use std::path::Path;
use std::sync::Arc;

use weft_lexer::{
    Choice, InMemoryLanguageSource, LanguageDefinition, Literal, Mode, Pattern, Run, Sequence,
};

pub const MAKE: &str = "text/x-make";
pub const SHELL: &str = "text/sh";

/// Start of a Makefile line, where a tab opens a recipe.
const LINE_START: Mode = Mode::INITIAL;
/// Anywhere else on a Makefile line.
const IN_LINE: Mode = Mode(1);

/// A source with every built-in language defined.
pub fn builtin_source() -> Arc<InMemoryLanguageSource> {
    let source = Arc::new(InMemoryLanguageSource::new());
    source.define(make());
    source.define(shell());
    source
}

/// Guess the built-in language for a file name.
pub fn language_for_path(path: &str) -> Option<&'static str> {
    let path = Path::new(path);
    let name = path.file_name()?.to_str()?;
    if matches!(name, "Makefile" | "makefile" | "GNUmakefile") {
        return Some(MAKE);
    }
    match path.extension()?.to_str()? {
        "mk" | "make" => Some(MAKE),
        "sh" | "bash" => Some(SHELL),
        _ => None,
    }
}

/// `prefix` followed by the rest of the line.
fn to_end_of_line(prefix: &str) -> Sequence {
    Sequence::new(vec![
        Box::new(Literal::new(prefix)),
        Box::new(Run::none_of("\n").at_least(0)),
    ])
}

/// A same-line literal quoted with `quote`.
fn quoted(quote: char) -> Sequence {
    let quote = quote.to_string();
    Sequence::new(vec![
        Box::new(Literal::new(&quote)),
        Box::new(Run::none_of(&format!("{quote}\n")).at_least(0)),
        Box::new(Literal::new(&quote)),
    ])
}

/// First matching literal. Callers list longer literals first.
fn one_of(literals: &[&str]) -> Choice {
    Choice::new(
        literals
            .iter()
            .map(|text| Box::new(Literal::new(text)) as Box<dyn Pattern>)
            .collect(),
    )
}

pub fn make() -> LanguageDefinition {
    let mut definition = LanguageDefinition::new(MAKE)
        .token_types([
            "comment",
            "word",
            "operator",
            "whitespace",
            "newline",
            "action",
            "substitution",
        ])
        .rule(LINE_START, to_end_of_line("\t"), "action")
        .preprocessor_import(Literal::new("`"), Literal::new("`"), "substitution", SHELL)
        .token_import("action", SHELL);

    for mode in [LINE_START, IN_LINE] {
        definition = definition
            .rule(mode, to_end_of_line("#"), "comment")
            .rule_to(mode, Literal::new("\n"), "newline", LINE_START)
            .rule_to(mode, Run::any_of(" \t"), "whitespace", IN_LINE)
            .rule_to(mode, one_of(&["::=", ":=", "?=", "+=", "::", ":", "="]), "operator", IN_LINE)
            .rule_to(mode, Run::none_of(" \t\n:=#?+"), "word", IN_LINE);
    }
    definition
}

pub fn shell() -> LanguageDefinition {
    LanguageDefinition::new(SHELL)
        .token_types([
            "comment",
            "word",
            "variable",
            "string",
            "operator",
            "whitespace",
            "newline",
        ])
        .rule(Mode::INITIAL, to_end_of_line("#"), "comment")
        .rule(
            Mode::INITIAL,
            Sequence::new(vec![
                Box::new(Literal::new("$")),
                Box::new(Run::while_fn("identifier", 1, |c| {
                    c.is_alphanumeric() || c == '_'
                })),
            ]),
            "variable",
        )
        .rule(
            Mode::INITIAL,
            Choice::new(vec![Box::new(quoted('"')), Box::new(quoted('\''))]),
            "string",
        )
        .rule(
            Mode::INITIAL,
            one_of(&["&&", "||", ">>", ";;", "|", "&", ";", "<", ">", "(", ")"]),
            "operator",
        )
        .rule(Mode::INITIAL, Run::any_of(" \t"), "whitespace")
        .rule(Mode::INITIAL, Literal::new("\n"), "newline")
        .rule(Mode::INITIAL, Run::none_of(" \t\n\"'$#|&;<>()"), "word")
        .literal_recovery("string", &['"', '\''])
}

#[cfg(test)]
mod tests;
