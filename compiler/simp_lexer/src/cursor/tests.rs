use super::*;

#[test]
fn bump_until_exhausted() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.bump(), Some('b'));
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.current(), None);
}

#[test]
fn eat_only_matching() {
    let mut cursor = Cursor::new("=>");
    assert!(!cursor.eat('>'));
    assert!(cursor.eat('='));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn positions_count_chars() {
    let mut cursor = Cursor::new("héllo!");
    cursor.eat_while(char::is_alphabetic);
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.slice_from(1), "éllo");
}
