//! Matching of display math blocks over line structure.
//!
//! A display delimiter may open and close on one line (`$$x$$`), or close on
//! a later line. Fenced math blocks and bare `\begin{…}`/`\end{…}`
//! environments are additional recognizers layered on the same scanning
//! primitive.

use crate::delimiters::{DelimiterTable, MathDelimiter};
use crate::parser::math::MathSpan;
use crate::parser::Lines;
use crate::scanners;

/// A matched display block plus the line the scan should resume on.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMatch<'a> {
    /// The recognized span.
    pub span: MathSpan<'a>,

    /// Index of the line containing the closing marker. Text after the
    /// marker on that line is surrounding text, returned to the caller by
    /// way of `span.end`.
    pub end_line: usize,
}

/// Find a display math block opening at `(line, col)`, trying display
/// delimiters in table order.
pub(crate) fn find_block<'a>(
    lines: &Lines<'a>,
    line: usize,
    col: usize,
    table: &'a DelimiterTable,
    silent: bool,
) -> Option<BlockMatch<'a>> {
    let bytes = lines.src.as_bytes();
    let pos = lines.start(line) + col;
    if pos >= bytes.len() || scanners::is_escaped(bytes, pos) {
        return None;
    }
    for delimiter in table.candidates_at(bytes[pos]) {
        if !delimiter.display {
            continue;
        }
        if let Some(m) = match_delimiter(lines, line, col, delimiter, silent) {
            return Some(m);
        }
    }
    None
}

/// Try one display delimiter opening at `(line, col)`.
///
/// The closing marker is searched on the opening line first, then line by
/// line to the end of input. Whitespace-only content is rejected, and an
/// unterminated block never matches: the opening marker stays literal text.
pub(crate) fn match_delimiter<'a>(
    lines: &Lines<'a>,
    line: usize,
    col: usize,
    delimiter: &'a MathDelimiter,
    silent: bool,
) -> Option<BlockMatch<'a>> {
    let src = lines.src;
    let bytes = src.as_bytes();
    let start = lines.start(line) + col;
    if !scanners::starts_at(bytes, start, delimiter.left.as_bytes())
        || scanners::is_escaped(bytes, start)
    {
        return None;
    }

    let content_start = start + delimiter.left.len();
    let right = delimiter.right.as_bytes();

    let (close, end_line) = find_close(lines, line, content_start, right)?;
    if src[content_start..close].trim().is_empty() {
        return None;
    }

    let end = close + delimiter.right.len();
    let content = if silent {
        ""
    } else {
        trim_marker_lines(&src[content_start..close])
    };
    Some(BlockMatch {
        span: MathSpan {
            delimiter,
            content,
            raw: &src[start..end],
            start,
            end,
            display: true,
        },
        end_line,
    })
}

fn find_close(
    lines: &Lines,
    open_line: usize,
    from: usize,
    right: &[u8],
) -> Option<(usize, usize)> {
    let bytes = lines.src.as_bytes();
    if let Some(close) = scanners::find_unescaped(bytes, right, from, lines.end(open_line)) {
        return Some((close, open_line));
    }
    for line in open_line + 1..lines.count() {
        if let Some(close) =
            scanners::find_unescaped(bytes, right, lines.start(line), lines.end(line))
        {
            return Some((close, line));
        }
    }
    None
}

/// Content of a multi-line block is the opening-line remainder, the
/// intermediate lines, and the closing-line prefix, newline-joined; an empty
/// remainder or prefix contributes no line. On the contiguous source slice
/// that amounts to trimming one line break at each end.
fn trim_marker_lines(content: &str) -> &str {
    let content = content
        .strip_prefix("\r\n")
        .or_else(|| content.strip_prefix('\n'))
        .unwrap_or(content);
    content
        .strip_suffix('\n')
        .map(|c| c.strip_suffix('\r').unwrap_or(c))
        .unwrap_or(content)
}

/// An opening code fence: its marker byte, run length, and info string.
pub(crate) struct Fence<'a> {
    pub marker: u8,
    pub length: usize,
    pub info: &'a str,
}

/// Scan a line for an opening code fence (``` or ~~~, up to three spaces of
/// indentation).
pub(crate) fn scan_open_fence(line: &str) -> Option<Fence> {
    let bytes = line.as_bytes();
    let mut indent = 0;
    while indent < bytes.len() && bytes[indent] == b' ' && indent < 4 {
        indent += 1;
    }
    if indent > 3 {
        return None;
    }
    let marker = *bytes.get(indent)?;
    if marker != b'`' && marker != b'~' {
        return None;
    }
    let mut length = 0;
    while indent + length < bytes.len() && bytes[indent + length] == marker {
        length += 1;
    }
    if length < 3 {
        return None;
    }
    let info = line[indent + length..].trim();
    if marker == b'`' && info.as_bytes().contains(&b'`') {
        return None;
    }
    Some(Fence {
        marker,
        length,
        info,
    })
}

/// Index of the line closing `fence`, if any.
pub(crate) fn fence_close_line(lines: &Lines, open_line: usize, fence: &Fence) -> Option<usize> {
    for line in open_line + 1..lines.count() {
        let text = lines.line(line).trim();
        if !text.is_empty()
            && text.bytes().all(|b| b == fence.marker)
            && text.len() >= fence.length
        {
            return Some(line);
        }
    }
    None
}

/// Match a fenced math block (info string `math`) opening at `line`.
///
/// Per CommonMark fence semantics an unterminated fence runs to the end of
/// the input. The fence body is the content, verbatim.
pub(crate) fn match_fenced<'a>(
    lines: &Lines<'a>,
    line: usize,
    delimiter: &'a MathDelimiter,
    silent: bool,
) -> Option<BlockMatch<'a>> {
    let fence = scan_open_fence(lines.line(line))?;
    if fence.info != "math" {
        return None;
    }
    let src = lines.src;
    let close = fence_close_line(lines, line, &fence);
    let (end_line, end) = match close {
        Some(close_line) => (close_line, lines.end(close_line)),
        None => (lines.count() - 1, src.len()),
    };
    // The body runs from the line after the opening fence to the line
    // before the closing one, or to the end of input when unterminated.
    // A closing fence always sits strictly below the opening one.
    let body_last = match close {
        Some(close_line) => close_line - 1,
        None => end_line,
    };
    let content = if silent || body_last < line + 1 {
        ""
    } else {
        &src[lines.start(line + 1)..lines.end(body_last)]
    };
    let start = lines.start(line);
    Some(BlockMatch {
        span: MathSpan {
            delimiter,
            content,
            raw: &src[start..end],
            start,
            end,
            display: true,
        },
        end_line,
    })
}

/// Match a bare environment block, `\begin{env}` through the matching
/// `\end{env}`, opening at the start of `line`. Nested occurrences of the
/// same environment are balanced. The markers are part of the content, as
/// the typesetting engine consumes environments whole.
pub(crate) fn match_bare_environment<'a>(
    lines: &Lines<'a>,
    line: usize,
    delimiter: &'a MathDelimiter,
    silent: bool,
) -> Option<BlockMatch<'a>> {
    let src = lines.src;
    let bytes = src.as_bytes();
    let start = lines.start(line);
    if !scanners::starts_at(bytes, start, b"\\begin{") || scanners::is_escaped(bytes, start) {
        return None;
    }
    let name_start = start + "\\begin{".len();
    let name_end = name_start
        + src[name_start..]
            .find('}')
            .filter(|&i| i > 0 && !src[name_start..name_start + i].contains('\n'))?;
    let env = &src[name_start..name_end];

    let open = format!("\\begin{{{}}}", env);
    let close = format!("\\end{{{}}}", env);
    let mut depth = 1;
    let mut pos = name_end + 1;
    while depth > 0 {
        let next_open = scanners::find_unescaped(bytes, open.as_bytes(), pos, bytes.len());
        let next_close = scanners::find_unescaped(bytes, close.as_bytes(), pos, bytes.len())?;
        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos = o + open.len();
            }
            _ => {
                depth -= 1;
                pos = next_close + close.len();
            }
        }
    }

    let end = pos;
    let content = if silent { "" } else { &src[start..end] };
    Some(BlockMatch {
        span: MathSpan {
            delimiter,
            content,
            raw: &src[start..end],
            start,
            end,
            display: true,
        },
        end_line: lines.line_index_at(end.saturating_sub(1)),
    })
}
