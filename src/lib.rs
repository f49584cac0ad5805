//! A configurable math-span recognizer for Markdown-flavored text.
//!
//! The crate scans text for embedded mathematical notation delimited by
//! marker pairs — `$…$`, `$$…$$`, `\(…\)`, `\[…\]` by default, or arbitrary
//! user-chosen strings — and hands recognized spans to a pluggable
//! typesetting renderer. Escaped markers, empty spans, currency-looking
//! dollar amounts, and unterminated blocks are all rejected; what is not a
//! valid math span stays literal text.
//!
//! ```rust
//! use markdown_katex::{math_to_html, Options};
//!
//! let html = math_to_html("Euler: $e^{i\\pi} + 1 = 0$", &Options::default()).unwrap();
//! assert_eq!(html, "Euler: <span class=\"katex\">e^{i\\pi} + 1 = 0</span>");
//! ```
//!
//! For host pipelines that splice output themselves, [`MathScanner`] exposes
//! the scan as a segment stream plus `try_inline`/`try_block` rule hooks;
//! [`math_to_html`] is the batteries-included entry point. Rendering
//! delegates to a [`MathRenderer`] plugin when one is configured (the
//! `katex` feature ships one in `plugins::katex`) and otherwise emits
//! class-tagged HTML for client-side typesetting.

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapters;
mod delimiters;
pub mod html;
mod parser;
pub mod plugins;
mod scanners;
#[cfg(test)]
mod tests;

use thiserror::Error;

pub use crate::adapters::{MathRenderer, RenderError};
pub use crate::delimiters::{ConfigurationError, DelimiterTable, MathDelimiter};
pub use crate::parser::options::{Options, Plugins, RenderPlugins};
pub use crate::parser::{BlockMatch, MathScanner, MathSpan, Segment};

/// Any error this crate can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The configured delimiter list is invalid.
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    /// The typesetting engine rejected a span and `throw_on_error` is set.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Recognize math spans in `input` and render it to an HTML fragment.
///
/// Literal text is HTML-escaped; spans render as class-tagged HTML (`katex`
/// for inline output, with a `katex-block` container for block output).
pub fn math_to_html(input: &str, options: &Options) -> Result<String, Error> {
    math_to_html_with_plugins(input, options, &Plugins::default())
}

/// Like [`math_to_html`], but with plugins.
///
/// ```rust
/// use markdown_katex::adapters::{MathRenderer, RenderError};
/// use markdown_katex::{math_to_html_with_plugins, Options, Plugins};
///
/// struct Mathml;
///
/// impl MathRenderer for Mathml {
///     fn render_to_string(&self, content: &str, display: bool) -> Result<String, RenderError> {
///         let _ = display;
///         Ok(format!("<math>{}</math>", content))
///     }
/// }
///
/// let mut plugins = Plugins::default();
/// let renderer = Mathml;
/// plugins.render.math_renderer = Some(&renderer);
///
/// let html = math_to_html_with_plugins("$x$", &Options::default(), &plugins).unwrap();
/// assert_eq!(html, "<math>x</math>");
/// ```
pub fn math_to_html_with_plugins(
    input: &str,
    options: &Options,
    plugins: &Plugins,
) -> Result<String, Error> {
    let scanner = MathScanner::new(options)?;
    let segments = scanner.scan(input);
    html::format_segments(&segments, options, plugins).map_err(Error::from)
}
