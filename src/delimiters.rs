//! Math delimiter configuration and the ordered lookup table built from it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

/// A left/right marker pair delimiting a math span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathDelimiter {
    /// Opening marker.
    pub left: String,

    /// Closing marker.
    pub right: String,

    /// Whether spans use display (block) typesetting rather than inline.
    pub display: bool,
}

impl MathDelimiter {
    /// Construct a delimiter pair. Markers are validated when the table is
    /// built, not here.
    pub fn new(left: &str, right: &str, display: bool) -> Self {
        MathDelimiter {
            left: left.to_string(),
            right: right.to_string(),
            display,
        }
    }
}

/// Error raised when a delimiter table cannot be built from the configured
/// delimiter list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A delimiter was configured with an empty `left` or `right` marker.
    #[error("math delimiter markers must be non-empty")]
    EmptyMarker,

    /// Two configured delimiters share the same `(left, right)` pair.
    #[error("duplicate math delimiter pair `{left}` / `{right}`")]
    DuplicateDelimiter {
        /// The duplicated opening marker.
        left: String,
        /// The duplicated closing marker.
        right: String,
    },
}

/// The ordered set of delimiters a scanner recognizes.
///
/// Built once from configuration and immutable afterwards; safe to share
/// across threads. Delimiters are ordered longest-`left`-first (stable, so
/// ties keep their configured order), which makes overlapping markers such
/// as `$$` and `$` resolve to the more specific one.
#[derive(Debug, Clone)]
pub struct DelimiterTable {
    delimiters: SmallVec<[MathDelimiter; 4]>,
    by_first_byte: FxHashMap<u8, SmallVec<[usize; 2]>>,
}

impl DelimiterTable {
    /// Build a table from the configured delimiter list.
    ///
    /// An empty list selects the four built-in defaults (inline `$…$` and
    /// `\(…\)`, display `$$…$$` and `\[…\]`). A non-empty list replaces the
    /// defaults entirely; none of them apply unless re-included explicitly.
    pub fn build(configured: &[MathDelimiter]) -> Result<DelimiterTable, ConfigurationError> {
        let mut delimiters: SmallVec<[MathDelimiter; 4]> = if configured.is_empty() {
            Self::defaults()
        } else {
            configured.iter().cloned().collect()
        };

        for delimiter in &delimiters {
            if delimiter.left.is_empty() || delimiter.right.is_empty() {
                return Err(ConfigurationError::EmptyMarker);
            }
        }

        for (i, delimiter) in delimiters.iter().enumerate() {
            let dup = delimiters[i + 1..]
                .iter()
                .any(|other| other.left == delimiter.left && other.right == delimiter.right);
            if dup {
                return Err(ConfigurationError::DuplicateDelimiter {
                    left: delimiter.left.clone(),
                    right: delimiter.right.clone(),
                });
            }
        }

        // Stable, so delimiters of equal length stay in configured order.
        delimiters.sort_by(|a, b| b.left.len().cmp(&a.left.len()));

        let mut by_first_byte: FxHashMap<u8, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (index, delimiter) in delimiters.iter().enumerate() {
            by_first_byte
                .entry(delimiter.left.as_bytes()[0])
                .or_insert_with(SmallVec::new)
                .push(index);
        }

        Ok(DelimiterTable {
            delimiters,
            by_first_byte,
        })
    }

    fn defaults() -> SmallVec<[MathDelimiter; 4]> {
        let mut defaults = SmallVec::new();
        defaults.push(MathDelimiter::new("$", "$", false));
        defaults.push(MathDelimiter::new("\\(", "\\)", false));
        defaults.push(MathDelimiter::new("$$", "$$", true));
        defaults.push(MathDelimiter::new("\\[", "\\]", true));
        defaults
    }

    /// All delimiters in match-priority order.
    pub fn iter(&self) -> impl Iterator<Item = &MathDelimiter> {
        self.delimiters.iter()
    }

    /// Delimiters whose `left` marker starts with `byte`, in match-priority
    /// order.
    pub fn candidates_at(&self, byte: u8) -> impl Iterator<Item = &MathDelimiter> {
        self.by_first_byte
            .get(&byte)
            .into_iter()
            .flat_map(move |indices| indices.iter().map(move |&i| &self.delimiters[i]))
    }

    /// Whether any delimiter's `left` marker starts with `byte`.
    pub fn could_open(&self, byte: u8) -> bool {
        self.by_first_byte.contains_key(&byte)
    }

    /// Number of delimiters in the table.
    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    /// Whether the table is empty. It never is: an empty configuration
    /// yields the defaults.
    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }
}
