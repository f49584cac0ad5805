//! HTML output for scanned documents.
//!
//! Literal text is escaped; recognized spans are delegated to the
//! configured [`MathRenderer`](crate::adapters::MathRenderer), or wrapped in
//! class-tagged HTML when none is configured. Inline output carries the
//! `katex` class; block output adds a `katex-block` container so the two are
//! distinguishable downstream.

use crate::adapters::RenderError;
use crate::parser::math::MathSpan;
use crate::parser::options::{Options, Plugins};
use crate::parser::Segment;

/// Append `text` to `output`, escaping `&`, `<`, `>` and `"`.
pub fn escape(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(ch),
        }
    }
}

/// Render scanned segments to an HTML fragment.
///
/// Fails only when the configured renderer rejects a span and
/// `throw_on_error` is set; otherwise renderer failures fall back to the
/// escaped raw source of the span, with no math class tokens, so failures
/// stay visually distinct from successful output.
pub(crate) fn format_segments(
    segments: &[Segment],
    options: &Options,
    plugins: &Plugins,
) -> Result<String, RenderError> {
    let mut output = String::new();
    let mut at_line_start = true;
    for segment in segments {
        match segment {
            Segment::Text(text) => {
                escape(&mut output, text);
                at_line_start = text.ends_with('\n');
            }
            Segment::Math(span) => {
                format_span(&mut output, span, at_line_start, options, plugins)?;
                at_line_start = false;
            }
        }
    }
    Ok(output)
}

/// Whether a span gets the block-level container.
///
/// Display spans opening at a line start always do. Mid-line, only the
/// dollar form keeps its block container; other display markers (`\[…\]`)
/// flow inline there, matching how such spans behave inside running text.
fn block_container(span: &MathSpan, at_line_start: bool) -> bool {
    span.display && (at_line_start || span.delimiter.left.starts_with('$'))
}

fn format_span(
    output: &mut String,
    span: &MathSpan,
    at_line_start: bool,
    options: &Options,
    plugins: &Plugins,
) -> Result<(), RenderError> {
    let block = block_container(span, at_line_start);
    match plugins.render.math_renderer {
        Some(renderer) => match renderer.render_to_string(span.content, span.display) {
            Ok(rendered) => {
                if block {
                    output.push_str("<p class=\"katex-block\">");
                    output.push_str(&rendered);
                    output.push_str("</p>");
                } else {
                    output.push_str(&rendered);
                }
            }
            Err(error) => {
                if options.throw_on_error {
                    return Err(error);
                }
                escape(output, span.raw);
            }
        },
        None => {
            if block {
                output.push_str("<p class=\"katex-block\"><span class=\"katex\">");
                escape(output, span.content);
                output.push_str("</span></p>");
            } else {
                output.push_str("<span class=\"katex\">");
                escape(output, span.content);
                output.push_str("</span>");
            }
        }
    }
    Ok(())
}
