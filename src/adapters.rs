//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

use thiserror::Error;

/// Error raised by a math typesetting engine for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The engine rejected the math source.
    #[error("math typesetting failed: {0}")]
    Engine(String),
}

/// Implement this adapter to supply a math typesetting engine.
///
/// The default output (no adapter configured) wraps the raw math source in
/// class-tagged HTML for client-side rendering; an adapter replaces that
/// with engine-produced markup. The `katex` feature ships an implementation
/// backed by the `katex` crate, in `plugins::katex`.
pub trait MathRenderer {
    /// Render math source (without its delimiters) to an HTML fragment.
    ///
    /// `display_mode` requests display (block) typesetting; `false` requests
    /// inline typesetting.
    fn render_to_string(&self, content: &str, display_mode: bool) -> Result<String, RenderError>;
}
