//! Configuration for math recognition and rendering.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::MathRenderer;
use crate::delimiters::MathDelimiter;

/// Options for recognizing and rendering math spans.
///
/// Every option is enumerated here; there is no implicit merging beyond
/// `Default`. With the `bon` feature a builder is available:
///
/// ```rust
/// # use markdown_katex::Options;
/// let options = Options::builder().throw_on_error(true).build();
/// assert!(options.throw_on_error);
/// ```
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct Options {
    /// Custom delimiter pairs. An empty list enables the four defaults
    /// (inline `$…$` and `\(…\)`, display `$$…$$` and `\[…\]`); a non-empty
    /// list replaces the defaults entirely.
    ///
    /// ```rust
    /// # use markdown_katex::{math_to_html, MathDelimiter, Options};
    /// let mut options = Options::default();
    /// options.delimiters = vec![MathDelimiter::new("<<<", ">>>", false)];
    /// assert_eq!(math_to_html("<<<x + y>>>", &options).unwrap(),
    ///            "<span class=\"katex\">x + y</span>");
    /// assert_eq!(math_to_html("$x$", &options).unwrap(), "$x$");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub delimiters: Vec<MathDelimiter>,

    /// Propagate typesetting failures as errors instead of emitting the
    /// escaped raw source as fallback literal output.
    #[cfg_attr(feature = "bon", builder(default))]
    pub throw_on_error: bool,

    /// Treat fenced code blocks whose info string is `math` as display math.
    ///
    /// ```rust
    /// # use markdown_katex::{math_to_html, Options};
    /// let mut options = Options::default();
    /// options.enable_fenced_blocks = true;
    /// assert_eq!(math_to_html("```math\n\\pi\n```", &options).unwrap(),
    ///            "<p class=\"katex-block\"><span class=\"katex\">\\pi</span></p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_fenced_blocks: bool,

    /// Treat a line beginning with `\begin{env}` as display math running to
    /// the matching `\end{env}`, without surrounding `$$`. The environment
    /// markers are part of the math content.
    ///
    /// ```rust
    /// # use markdown_katex::{math_to_html, Options};
    /// let mut options = Options::default();
    /// options.enable_bare_blocks = true;
    /// assert_eq!(math_to_html("\\begin{align}\nx = y\n\\end{align}", &options).unwrap(),
    ///            "<p class=\"katex-block\"><span class=\"katex\">\\begin{align}\nx = y\n\\end{align}</span></p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_bare_blocks: bool,

    /// Permit display math matching inside raw HTML blocks, which are
    /// otherwise treated as opaque.
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_math_block_in_html: bool,

    /// Permit inline math matching inside raw HTML blocks.
    ///
    /// ```rust
    /// # use markdown_katex::{math_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(math_to_html("<div>$x$</div>", &options).unwrap(),
    ///            "&lt;div&gt;$x$&lt;/div&gt;");
    /// options.enable_math_inline_in_html = true;
    /// assert_eq!(math_to_html("<div>$x$</div>", &options).unwrap(),
    ///            "&lt;div&gt;<span class=\"katex\">x</span>&lt;/div&gt;");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_math_inline_in_html: bool,
}

/// Umbrella plugins struct.
#[derive(Debug, Clone, Default)]
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    pub render: RenderPlugins<'p>,
}

/// Plugins for alternative rendering.
#[derive(Clone, Default)]
pub struct RenderPlugins<'p> {
    /// The math typesetting engine to delegate recognized spans to. When
    /// unset, spans render as class-tagged HTML containing the escaped math
    /// source.
    pub math_renderer: Option<&'p dyn MathRenderer>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "math_renderer",
                &format_args!(
                    "{}",
                    if self.math_renderer.is_some() {
                        "Some(..)"
                    } else {
                        "None"
                    }
                ),
            )
            .finish()
    }
}
