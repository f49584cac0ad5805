//! Adapter for the KaTeX math typesetting engine.

use crate::adapters::{MathRenderer, RenderError};
use katex::Opts;

/// Math renderer plugin backed by the `katex` crate.
///
/// A base [`Opts`] may be supplied to carry engine settings (macros, output
/// format, extensions such as mhchem); the adapter overrides only the
/// display mode per span.
#[derive(Default, Clone)]
pub struct KatexAdapter {
    opts: Option<Opts>,
}

impl KatexAdapter {
    /// Construct an adapter with the engine's default settings.
    pub fn new() -> Self {
        KatexAdapter { opts: None }
    }

    /// Construct an adapter from a base set of engine options.
    pub fn with_opts(opts: Opts) -> Self {
        KatexAdapter { opts: Some(opts) }
    }
}

impl MathRenderer for KatexAdapter {
    fn render_to_string(&self, content: &str, display_mode: bool) -> Result<String, RenderError> {
        let mut opts = match &self.opts {
            Some(opts) => opts.clone(),
            None => Opts::builder()
                .build()
                .map_err(|e| RenderError::Engine(e.to_string()))?,
        };
        opts.set_display_mode(display_mode);
        katex::render_with_opts(content, opts).map_err(|e| RenderError::Engine(e.to_string()))
    }
}
