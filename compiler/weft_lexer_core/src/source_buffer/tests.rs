use super::*;
use crate::CharInput;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(buf.as_chars().is_empty());
}

#[test]
fn length_counts_characters_not_bytes() {
    // 'é' is two bytes in UTF-8, 'λ' is two, '🦀' is four.
    let buf = SourceBuffer::new("é λ🦀");
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.as_chars(), &['é', ' ', 'λ', '🦀']);
}

#[test]
fn sentinel_follows_source() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.set_index(2);
    assert_eq!(cursor.current(), EOF_CHAR);
    assert!(cursor.is_eof());
}

#[test]
fn slice_extracts_range() {
    let buf = SourceBuffer::new("hello world");
    assert_eq!(buf.slice(0, 5), "hello");
    assert_eq!(buf.slice(6, 11), "world");
}

#[test]
fn slice_is_clamped() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.slice(1, 99), "bc");
    assert_eq!(buf.slice(5, 9), "");
    assert_eq!(buf.slice(2, 1), "");
}

#[test]
fn slice_multibyte() {
    let buf = SourceBuffer::new("aλb");
    assert_eq!(buf.slice(1, 2), "λ");
}
