use super::*;
use crate::SourceBuffer;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn read_returns_and_consumes() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.read(), 'a');
    assert_eq!(cursor.index(), 1);
    assert_eq!(cursor.read(), 'b');
    assert_eq!(cursor.index(), 2);
}

#[test]
fn peek_does_not_consume() {
    let buf = SourceBuffer::new("xy");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.peek(), 'x');
    assert_eq!(cursor.peek(), 'x');
    assert_eq!(cursor.index(), 0);
}

#[test]
fn read_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.read();
    cursor.read();
    assert!(cursor.is_eof());
    assert_eq!(cursor.remaining(), 0);
}

// === EOF ===

#[test]
fn read_at_eof_returns_sentinel_and_stays() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.read();
    assert_eq!(cursor.read(), EOF_CHAR);
    assert_eq!(cursor.read(), EOF_CHAR);
    assert_eq!(cursor.index(), 1);
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let mut cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), EOF_CHAR);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.read();
    assert_eq!(cursor.peek(), '\0');
    assert!(!cursor.is_eof());
    cursor.read();
    assert_eq!(cursor.read(), 'b');
    assert!(cursor.is_eof());
}

// === Seeking ===

#[test]
fn set_index_moves_backward_and_forward() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.set_index(4);
    assert_eq!(cursor.read(), 'e');
    cursor.set_index(1);
    assert_eq!(cursor.read(), 'b');
}

#[test]
fn set_index_to_current_is_noop() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.read();
    cursor.set_index(cursor.index());
    assert_eq!(cursor.index(), 1);
    assert_eq!(cursor.peek(), 'b');
}

#[test]
fn set_index_clamps_to_source_len() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.set_index(100);
    assert_eq!(cursor.index(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn copy_is_a_snapshot() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.read();
    cursor.read();
    assert_eq!(snapshot.index(), 0);
    assert_eq!(cursor.index(), 2);
}

// === Slice ===

#[test]
fn slice_counts_characters() {
    let buf = SourceBuffer::new("λx🦀y");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 2), "λx");
    assert_eq!(cursor.slice(2, 4), "🦀y");
}

proptest! {
    #[test]
    fn reads_visit_every_char_in_order(source in "\\PC{0,64}") {
        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        let mut seen = String::new();
        while !cursor.is_eof() {
            seen.push(cursor.read());
        }
        prop_assert_eq!(seen, source);
    }

    #[test]
    fn seek_then_read_matches_slice(source in "[a-z]{1,32}", at in 0u32..32) {
        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        cursor.set_index(at);
        let expected = buf.slice(at, at + 1).chars().next().unwrap_or(EOF_CHAR);
        prop_assert_eq!(cursor.read(), expected);
    }
}
