//! Matching of inline math spans within a single line.

use crate::delimiters::{DelimiterTable, MathDelimiter};
use crate::parser::math::MathSpan;
use crate::scanners::{self, byte_matches, isdigit, isspace};

/// Find an inline math span starting exactly at `pos`, trying delimiters in
/// table order. The first delimiter that yields a valid span wins; a
/// delimiter that opens at `pos` but fails a rejection rule is treated as
/// "no match" for that delimiter, not retried at later closers.
pub(crate) fn find_inline<'a>(
    src: &'a str,
    pos: usize,
    table: &'a DelimiterTable,
) -> Option<MathSpan<'a>> {
    let bytes = src.as_bytes();
    if pos >= bytes.len() || scanners::is_escaped(bytes, pos) {
        return None;
    }
    for delimiter in table.candidates_at(bytes[pos]) {
        if delimiter.display {
            continue;
        }
        if let Some(span) = match_delimiter(src, pos, delimiter) {
            return Some(span);
        }
    }
    None
}

/// Try one inline delimiter at `pos`.
///
/// Rejection rules: the opening marker must be unescaped; the closing marker
/// must exist, unescaped, on the same line; the content must be non-empty.
/// Dollar delimiters (`left == "$"`) additionally reject whitespace adjacent
/// to either marker and a closing `$` followed by a digit, so currency
/// amounts (`$20 and $30`) never match.
pub(crate) fn match_delimiter<'a>(
    src: &'a str,
    pos: usize,
    delimiter: &'a MathDelimiter,
) -> Option<MathSpan<'a>> {
    let bytes = src.as_bytes();
    let left = delimiter.left.as_bytes();
    if !scanners::starts_at(bytes, pos, left) || scanners::is_escaped(bytes, pos) {
        return None;
    }

    let content_start = pos + left.len();
    let line_end = scanners::line_end(bytes, content_start);
    let dollar = delimiter.left == "$";

    // A `$` run of two or more never opens single-dollar math; the run
    // belongs to a longer marker.
    if dollar && byte_matches(bytes, content_start, |b| b == b'$') {
        return None;
    }

    // space not allowed after the opening $
    if dollar && byte_matches(bytes, content_start, isspace) {
        return None;
    }

    let close = scanners::find_unescaped(bytes, delimiter.right.as_bytes(), content_start, line_end)?;
    if close == content_start {
        return None;
    }
    if dollar {
        // space not allowed before the closing $
        if isspace(bytes[close - 1]) {
            return None;
        }
        // closing $ can't be followed by a digit
        if byte_matches(bytes, close + delimiter.right.len(), isdigit) {
            return None;
        }
    }

    let end = close + delimiter.right.len();
    Some(MathSpan {
        delimiter,
        content: &src[content_start..close],
        raw: &src[pos..end],
        start: pos,
        end,
        display: false,
    })
}
