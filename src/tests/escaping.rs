use crate::scanners::{find_unescaped, is_escaped, line_end};

#[test]
fn escape_parity() {
    assert!(!is_escaped(b"(", 0));
    assert!(is_escaped(b"\\(", 1));
    assert!(!is_escaped(b"\\\\(", 2));
    assert!(is_escaped(b"\\\\\\(", 3));
    assert!(!is_escaped(b"\\\\\\\\(", 4));
    assert!(!is_escaped(b"x\\\\(", 3));
    assert!(is_escaped(b"ab\\$", 3));
}

#[test]
fn find_unescaped_skips_escaped_occurrences() {
    let text = b"a \\$ b $ c";
    assert_eq!(find_unescaped(text, b"$", 0, text.len()), Some(7));

    let text = b"x \\) y \\\\) z";
    assert_eq!(find_unescaped(text, b"\\)", 0, text.len()), Some(2));
    // Past the first closer only `\\)` remains, whose `\)` starts on an
    // escaped backslash.
    assert_eq!(find_unescaped(text, b"\\)", 3, text.len()), None);
    // The `\)` hidden inside `\\)` starts on the second backslash, which is
    // itself escaped.
    assert_eq!(find_unescaped(text, b")", 0, text.len()), Some(9));
}

#[test]
fn find_unescaped_respects_limit() {
    let text = b"abc$def";
    assert_eq!(find_unescaped(text, b"$", 0, 3), None);
    assert_eq!(find_unescaped(text, b"$", 0, 4), Some(3));
    assert_eq!(find_unescaped(text, b"$", 4, text.len()), None);
}

#[test]
fn line_end_handles_crlf() {
    assert_eq!(line_end(b"ab\ncd", 0), 2);
    assert_eq!(line_end(b"ab\r\ncd", 0), 2);
    assert_eq!(line_end(b"abc", 1), 3);
    assert_eq!(line_end(b"ab\ncd", 3), 5);
}
