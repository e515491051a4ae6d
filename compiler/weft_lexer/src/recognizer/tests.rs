use super::*;
use weft_lexer_core::{Literal, Run, SourceBuffer};

const NUMBER: TokenTypeId = TokenTypeId::new(1);
const WORD: TokenTypeId = TokenTypeId::new(2);
const ENTER: TokenTypeId = TokenTypeId::new(3);

fn rule(mode: u32, pattern: impl Pattern + 'static, ty: TokenTypeId, next: Option<u32>) -> Rule {
    Rule {
        mode: Mode(mode),
        pattern: Arc::new(pattern),
        ty,
        next_mode: next.map(Mode),
    }
}

#[test]
fn first_matching_rule_wins() {
    let rules = RuleSet::new(vec![
        rule(0, Run::any_of("0123456789"), NUMBER, None),
        rule(0, Run::none_of(" "), WORD, None),
    ]);
    let buf = SourceBuffer::new("42x");
    let mut cursor = buf.cursor();
    let mut mode = Mode::INITIAL;
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(NUMBER));
    assert_eq!(cursor.index(), 2);
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(WORD));
    assert_eq!(cursor.index(), 3);
}

#[test]
fn rules_outside_current_mode_are_ignored() {
    let rules = RuleSet::new(vec![rule(1, Run::any_of("a"), WORD, None)]);
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    let mut mode = Mode::INITIAL;
    assert_eq!(rules.recognize(&mut cursor, &mut mode), None);
    assert_eq!(cursor.index(), 0);

    let mut mode = Mode(1);
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(WORD));
}

#[test]
fn matching_rule_switches_mode() {
    let rules = RuleSet::new(vec![
        rule(0, Literal::new("\""), ENTER, Some(1)),
        rule(1, Run::none_of("\""), WORD, Some(0)),
    ]);
    let buf = SourceBuffer::new("\"abc");
    let mut cursor = buf.cursor();
    let mut mode = Mode::INITIAL;
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(ENTER));
    assert_eq!(mode, Mode(1));
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(WORD));
    assert_eq!(mode, Mode(0));
}

#[test]
fn empty_match_without_mode_change_is_skipped() {
    let rules = RuleSet::new(vec![
        rule(0, Run::any_of("x").at_least(0), WORD, None),
        rule(0, Run::any_of("1"), NUMBER, None),
    ]);
    let buf = SourceBuffer::new("1");
    let mut cursor = buf.cursor();
    let mut mode = Mode::INITIAL;
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(NUMBER));
}

#[test]
fn empty_match_with_mode_change_is_accepted() {
    let rules = RuleSet::new(vec![rule(0, Run::any_of("x").at_least(0), ENTER, Some(2))]);
    let buf = SourceBuffer::new("1");
    let mut cursor = buf.cursor();
    let mut mode = Mode::INITIAL;
    assert_eq!(rules.recognize(&mut cursor, &mut mode), Some(ENTER));
    assert_eq!(cursor.index(), 0);
    assert_eq!(mode, Mode(2));
}

#[test]
fn no_match_leaves_mode_and_index() {
    let rules = RuleSet::new(vec![rule(0, Run::any_of("0123456789"), NUMBER, Some(1))]);
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    let mut mode = Mode::INITIAL;
    assert_eq!(rules.recognize(&mut cursor, &mut mode), None);
    assert_eq!(mode, Mode::INITIAL);
    assert_eq!(cursor.index(), 0);
    assert_eq!(rules.len(), 1);
    assert!(!rules.is_empty());
}
