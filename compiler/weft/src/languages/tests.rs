#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use weft_lexer::{LanguageDescriptor, LanguageRegistry, Lexer, SourceBuffer};

fn lex(definition: LanguageDefinition, text: &str) -> Vec<(String, u32, u32)> {
    let descriptor = Arc::new(LanguageDescriptor::build(definition).unwrap());
    let buf = SourceBuffer::new(text);
    Lexer::new(Arc::clone(&descriptor), &buf)
        .map(|token| {
            let name = descriptor.type_name(token.ty).unwrap().to_string();
            (name, token.start, token.end)
        })
        .collect()
}

fn t(name: &str, start: u32, end: u32) -> (String, u32, u32) {
    (name.to_string(), start, end)
}

#[test]
fn builtin_languages_load() {
    let source = builtin_source();
    assert_eq!(source.mime_types(), vec![SHELL.to_string(), MAKE.to_string()]);
    let registry = LanguageRegistry::new(source);
    assert!(registry.load(MAKE).is_ok());
    assert!(registry.load(SHELL).is_ok());
}

#[test]
fn guesses_language_from_path() {
    assert_eq!(language_for_path("Makefile"), Some(MAKE));
    assert_eq!(language_for_path("src/rules.mk"), Some(MAKE));
    assert_eq!(language_for_path("build.sh"), Some(SHELL));
    assert_eq!(language_for_path("notes.txt"), None);
    assert_eq!(language_for_path("README"), None);
}

#[test]
fn make_assignment_and_rule() {
    assert_eq!(
        lex(make(), "CC := cc # compiler\nall: main\n"),
        vec![
            t("word", 0, 2),
            t("whitespace", 2, 3),
            t("operator", 3, 5),
            t("whitespace", 5, 6),
            t("word", 6, 8),
            t("whitespace", 8, 9),
            t("comment", 9, 19),
            t("newline", 19, 20),
            t("word", 20, 23),
            t("operator", 23, 24),
            t("whitespace", 24, 25),
            t("word", 25, 29),
            t("newline", 29, 30),
        ]
    );
}

#[test]
fn make_tab_inside_line_is_whitespace() {
    assert_eq!(
        lex(make(), "a\tb"),
        vec![t("word", 0, 1), t("whitespace", 1, 2), t("word", 2, 3)]
    );
}

#[test]
fn shell_command_line() {
    assert_eq!(
        lex(shell(), "ls $HOME | grep 'x' && echo \"ok\""),
        vec![
            t("word", 0, 2),
            t("whitespace", 2, 3),
            t("variable", 3, 8),
            t("whitespace", 8, 9),
            t("operator", 9, 10),
            t("whitespace", 10, 11),
            t("word", 11, 15),
            t("whitespace", 15, 16),
            t("string", 16, 19),
            t("whitespace", 19, 20),
            t("operator", 20, 22),
            t("whitespace", 22, 23),
            t("word", 23, 27),
            t("whitespace", 27, 28),
            t("string", 28, 32),
        ]
    );
}

#[test]
fn shell_recovers_open_quote() {
    assert_eq!(
        lex(shell(), "echo 'it\nls"),
        vec![
            t("word", 0, 4),
            t("whitespace", 4, 5),
            t("string", 5, 6),
            t("string", 6, 8),
            t("newline", 8, 9),
            t("word", 9, 11),
        ]
    );
}
