//! The recognized math span type.

use crate::delimiters::MathDelimiter;

/// A recognized math span.
///
/// Spans are transient: a matcher constructs one when a valid span is found
/// and the renderer consumes it immediately. `content` and `raw` borrow from
/// the scanned source; `delimiter` borrows from the scanner's table.
#[derive(Debug, Clone, PartialEq)]
pub struct MathSpan<'a> {
    /// The delimiter pair that matched.
    pub delimiter: &'a MathDelimiter,

    /// The text between the markers, verbatim. For multi-line spans a
    /// single leading and trailing line break around the marker lines is
    /// excluded, so `$$\nx\n$$` has content `x`.
    pub content: &'a str,

    /// The full source slice of the span, including the markers. Used as
    /// fallback literal output when rendering fails.
    pub raw: &'a str,

    /// Byte offset of the opening marker in the scanned source.
    pub start: usize,

    /// Byte offset one past the closing marker.
    pub end: usize,

    /// Whether the span uses display (block) typesetting. Mirrors
    /// `delimiter.display`.
    pub display: bool,
}
