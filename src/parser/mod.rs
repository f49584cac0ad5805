//! The span dispatcher and its scan driver.

pub mod block;
mod inline;
pub mod math;
pub mod options;

use crate::delimiters::{ConfigurationError, DelimiterTable, MathDelimiter};
use crate::scanners;
pub use block::BlockMatch;
pub use math::MathSpan;
pub use options::Options;

/// Line structure of a document: byte spans of each line, excluding the
/// line terminator (`\n` or `\r\n`).
pub(crate) struct Lines<'a> {
    pub src: &'a str,
    spans: Vec<(usize, usize)>,
}

impl<'a> Lines<'a> {
    pub fn new(src: &'a str) -> Lines<'a> {
        let bytes = src.as_bytes();
        let mut spans = Vec::new();
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                let mut end = i;
                if end > start && bytes[end - 1] == b'\r' {
                    end -= 1;
                }
                spans.push((start, end));
                start = i + 1;
            }
        }
        if start < bytes.len() {
            spans.push((start, bytes.len()));
        }
        Lines { src, spans }
    }

    pub fn count(&self) -> usize {
        self.spans.len()
    }

    pub fn start(&self, line: usize) -> usize {
        self.spans[line].0
    }

    pub fn end(&self, line: usize) -> usize {
        self.spans[line].1
    }

    pub fn line(&self, line: usize) -> &'a str {
        let (start, end) = self.spans[line];
        &self.src[start..end]
    }

    /// Index of the line containing the byte at `offset`.
    pub fn line_index_at(&self, offset: usize) -> usize {
        self.spans
            .partition_point(|&(start, _)| start <= offset)
            .saturating_sub(1)
    }
}

/// One piece of a scanned document: literal text between spans, or a
/// recognized math span.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text, to be passed through (and escaped) by the renderer.
    Text(&'a str),

    /// A recognized math span.
    Math(MathSpan<'a>),
}

/// Per-pass cursor state: the segments emitted so far and the start of the
/// pending literal run.
struct ScanState<'a> {
    segments: Vec<Segment<'a>>,
    literal_from: usize,
}

impl<'a> ScanState<'a> {
    fn new() -> ScanState<'a> {
        ScanState {
            segments: Vec::new(),
            literal_from: 0,
        }
    }

    fn flush(&mut self, src: &'a str, upto: usize) {
        if upto > self.literal_from {
            self.segments.push(Segment::Text(&src[self.literal_from..upto]));
        }
        self.literal_from = upto;
    }

    fn emit(&mut self, src: &'a str, span: MathSpan<'a>) {
        self.flush(src, span.start);
        self.literal_from = span.end;
        self.segments.push(Segment::Math(span));
    }
}

/// Recognizes math spans in text according to one configuration.
///
/// The scanner holds the delimiter table, built once at construction and
/// immutable afterwards; it is safe to share across threads, and all scan
/// state is local to each call.
#[derive(Debug, Clone)]
pub struct MathScanner {
    table: DelimiterTable,
    options: Options,
    fenced_delimiter: MathDelimiter,
    bare_delimiter: MathDelimiter,
}

impl MathScanner {
    /// Build a scanner from options.
    ///
    /// Fails with [`ConfigurationError`] when the configured delimiter list
    /// contains an empty marker or a duplicate pair.
    pub fn new(options: &Options) -> Result<MathScanner, ConfigurationError> {
        let table = DelimiterTable::build(&options.delimiters)?;
        Ok(MathScanner {
            table,
            options: options.clone(),
            fenced_delimiter: MathDelimiter::new("```math", "```", true),
            bare_delimiter: MathDelimiter::new("\\begin{", "\\end{", true),
        })
    }

    /// The delimiter table in use.
    pub fn delimiter_table(&self) -> &DelimiterTable {
        &self.table
    }

    /// Split a document into literal text and math spans.
    ///
    /// One forward pass: at each candidate position delimiters are tried in
    /// table order (longest `left` first), the first valid span wins, and a
    /// position where every candidate fails is literal text. Fenced code
    /// blocks, inline code spans, and raw HTML blocks are opaque, subject to
    /// the fenced/bare/HTML options.
    pub fn scan<'a>(&'a self, src: &'a str) -> Vec<Segment<'a>> {
        let lines = Lines::new(src);
        let bytes = src.as_bytes();
        let mut state = ScanState::new();
        let mut line = 0;
        let mut col = 0;
        let mut html_until: Option<usize> = None;

        'lines: while line < lines.count() {
            if html_until.map_or(false, |until| line > until) {
                html_until = None;
            }

            if col == 0 && html_until.is_none() {
                if let Some(fence) = block::scan_open_fence(lines.line(line)) {
                    if self.options.enable_fenced_blocks && fence.info == "math" {
                        if let Some(m) =
                            block::match_fenced(&lines, line, &self.fenced_delimiter, false)
                        {
                            state.emit(src, m.span);
                            line = m.end_line + 1;
                            continue;
                        }
                    }
                    // Opaque code fence: its lines stay literal text.
                    line = match block::fence_close_line(&lines, line, &fence) {
                        Some(close) => close + 1,
                        None => lines.count(),
                    };
                    continue;
                }
                if self.options.enable_bare_blocks {
                    if let Some(m) =
                        block::match_bare_environment(&lines, line, &self.bare_delimiter, false)
                    {
                        let (end, end_line) = (m.span.end, m.end_line);
                        state.emit(src, m.span);
                        line = end_line;
                        col = end - lines.start(end_line);
                        continue;
                    }
                }
                if html_block_start(lines.line(line)) {
                    let region_end = html_region_end(&lines, line);
                    if !self.options.enable_math_block_in_html
                        && !self.options.enable_math_inline_in_html
                    {
                        line = region_end + 1;
                        continue;
                    }
                    html_until = Some(region_end);
                }
            }

            let (allow_block, allow_inline) = if html_until.is_some() {
                (
                    self.options.enable_math_block_in_html,
                    self.options.enable_math_inline_in_html,
                )
            } else {
                (true, true)
            };

            let line_start = lines.start(line);
            let line_close = lines.end(line);
            let mut pos = line_start + col;
            while pos < line_close {
                let b = bytes[pos];
                if self.table.could_open(b) && !scanners::is_escaped(bytes, pos) {
                    if let Some((span, end_line)) =
                        self.dispatch(&lines, line, pos - line_start, allow_block, allow_inline)
                    {
                        let end = span.end;
                        state.emit(src, span);
                        if end_line != line {
                            line = end_line;
                            col = end - lines.start(end_line);
                            continue 'lines;
                        }
                        pos = end;
                        continue;
                    }
                }
                if b == b'`' && !self.table.could_open(b'`') && !scanners::is_escaped(bytes, pos) {
                    pos = skip_code_span(bytes, pos, line_close);
                    continue;
                }
                if b == b'$' && !scanners::is_escaped(bytes, pos) {
                    // A dollar run that opened nothing is literal as a
                    // whole; never reconsider its inner dollars. An escaped
                    // dollar is not part of a run, so the dollar after it is
                    // still offered to the dispatcher.
                    while pos < line_close && bytes[pos] == b'$' {
                        pos += 1;
                    }
                    continue;
                }
                pos += 1;
            }
            line += 1;
            col = 0;
        }

        state.flush(src, src.len());
        state.segments
    }

    /// Try delimiters in table order at one position. Display delimiters go
    /// to the block matcher, inline ones to the inline matcher; the table's
    /// longest-first order is what gives `$$` priority over `$`.
    fn dispatch<'a>(
        &'a self,
        lines: &Lines<'a>,
        line: usize,
        col: usize,
        allow_block: bool,
        allow_inline: bool,
    ) -> Option<(MathSpan<'a>, usize)> {
        let pos = lines.start(line) + col;
        for delimiter in self.table.candidates_at(lines.src.as_bytes()[pos]) {
            if delimiter.display {
                if allow_block {
                    if let Some(m) = block::match_delimiter(lines, line, col, delimiter, false) {
                        return Some((m.span, m.end_line));
                    }
                }
            } else if allow_inline {
                if let Some(span) = inline::match_delimiter(lines.src, pos, delimiter) {
                    return Some((span, line));
                }
            }
        }
        None
    }

    /// Inline-rule hook: find an inline span starting exactly at `pos`.
    ///
    /// Matching is side-effect-free; with `silent` set the span's content is
    /// left empty and only its bounds are reported, for lookahead use.
    pub fn try_inline<'a>(&'a self, src: &'a str, pos: usize, silent: bool) -> Option<MathSpan<'a>> {
        let mut span = inline::find_inline(src, pos, &self.table)?;
        if silent {
            span.content = "";
        }
        Some(span)
    }

    /// Block-rule hook: find a display block opening at the start of
    /// `line_index`.
    ///
    /// Fenced math blocks and bare environments are consulted first when
    /// their options are enabled, then the display delimiters of the table.
    /// Matching is side-effect-free; with `silent` set the span's content is
    /// left empty.
    pub fn try_block<'a>(
        &'a self,
        src: &'a str,
        line_index: usize,
        silent: bool,
    ) -> Option<BlockMatch<'a>> {
        let lines = Lines::new(src);
        if line_index >= lines.count() {
            return None;
        }
        if self.options.enable_fenced_blocks {
            if let Some(m) = block::match_fenced(&lines, line_index, &self.fenced_delimiter, silent)
            {
                return Some(m);
            }
        }
        if self.options.enable_bare_blocks {
            if let Some(m) =
                block::match_bare_environment(&lines, line_index, &self.bare_delimiter, silent)
            {
                return Some(m);
            }
        }
        block::find_block(&lines, line_index, 0, &self.table, silent)
    }
}

/// Whether a line opens a raw HTML block (CommonMark-lite: `<` followed by
/// a tag name, `/`, `!` or `?` at column zero).
fn html_block_start(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.first() == Some(&b'<')
        && bytes
            .get(1)
            .map_or(false, |&b| b.is_ascii_alphabetic() || b == b'/' || b == b'!' || b == b'?')
}

/// Inclusive index of the last line of an HTML block: everything up to the
/// next blank line, or the end of input.
fn html_region_end(lines: &Lines, start: usize) -> usize {
    for line in start + 1..lines.count() {
        if scanners::is_blank(lines.line(line)) {
            return line - 1;
        }
    }
    lines.count() - 1
}

/// Skip an inline code span: a backtick run closed by a run of the same
/// length on the same line. An unclosed run is skipped as literal text.
fn skip_code_span(bytes: &[u8], pos: usize, limit: usize) -> usize {
    let mut ticks = 0;
    while pos + ticks < limit && bytes[pos + ticks] == b'`' {
        ticks += 1;
    }
    let mut i = pos + ticks;
    while i < limit {
        if bytes[i] == b'`' {
            let mut run = 0;
            while i + run < limit && bytes[i + run] == b'`' {
                run += 1;
            }
            if run == ticks {
                return i + run;
            }
            i += run;
        } else {
            i += 1;
        }
    }
    pos + ticks
}
