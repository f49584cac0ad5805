//! Low-level byte scanning helpers shared by the inline and block matchers.
//!
//! Everything here operates on raw bytes. Delimiter markers are matched
//! bytewise; since a valid UTF-8 needle can never match starting in the
//! middle of a multi-byte sequence, all reported offsets fall on character
//! boundaries.

pub fn isspace(ch: u8) -> bool {
    matches!(ch, 9..=13 | 32)
}

pub fn isdigit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Return whether the byte at the given offset passes the callback.
///
/// Returns `false` if the offset is out of bounds.
pub fn byte_matches<F>(bytes: &[u8], offset: usize, predicate: F) -> bool
where
    F: Fn(u8) -> bool,
{
    bytes.get(offset).map_or(false, |&b| predicate(b))
}

/// Whether the byte at `index` is backslash-escaped.
///
/// True iff an odd number of consecutive `\` bytes immediately precede
/// `index`. Parity matters: in `\\(` the paren is preceded by an escaped
/// backslash and is itself unescaped, while in `\(` it is escaped.
pub fn is_escaped(bytes: &[u8], index: usize) -> bool {
    let mut backslashes = 0;
    while backslashes < index && bytes[index - backslashes - 1] == b'\\' {
        backslashes += 1;
    }
    backslashes % 2 == 1
}

/// Whether `needle` occurs at `offset`.
pub fn starts_at(bytes: &[u8], offset: usize, needle: &[u8]) -> bool {
    bytes.len() - offset >= needle.len() && &bytes[offset..offset + needle.len()] == needle
}

/// Find the next occurrence of `needle` in `bytes[from..limit]` whose first
/// byte is not backslash-escaped. Returns the offset of that first byte.
pub fn find_unescaped(bytes: &[u8], needle: &[u8], from: usize, limit: usize) -> Option<usize> {
    debug_assert!(!needle.is_empty());
    debug_assert!(limit <= bytes.len());
    let mut pos = from;
    while pos + needle.len() <= limit {
        if bytes[pos] == needle[0] && starts_at(bytes, pos, needle) && !is_escaped(bytes, pos) {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Offset of the end of the line containing `from`: the position of the next
/// `\n` (or of the `\r` in a `\r\n` pair), or `bytes.len()`.
pub fn line_end(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < bytes.len() && bytes[pos] != b'\n' {
        pos += 1;
    }
    if pos > from && pos < bytes.len() && bytes[pos - 1] == b'\r' {
        pos - 1
    } else {
        pos
    }
}

pub fn is_blank(line: &str) -> bool {
    line.bytes().all(isspace)
}
