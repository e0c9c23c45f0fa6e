//! Tag-safe word highlighting for read-only previews.
//!
//! The injector operates on raw markup, not the AST: it wraps matching words
//! in `<span>` elements while leaving every existing tag byte-for-byte
//! intact, so inline styles and attributes survive. Matching is ASCII
//! case-insensitive on word boundaries, longest word first, and text inside
//! an existing `<span>` is never touched, which makes repeated injection
//! idempotent.

pub mod injector;

use serde::{Deserialize, Serialize};

/// CSS class applied by single-color highlighting when the caller has no
/// opinion.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "rte-highlight";

/// One word to highlight, with its styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordColor {
    pub word: String,
    #[serde(default)]
    pub color: ColorSpec,
}

/// Styling for a highlighted word: an inline hex style, a symbolic class, or
/// neither (fallback styling applies).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorSpec {
    /// Background color, e.g. `#ffe066`. Takes precedence over `class`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Symbolic background class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Text color (hex mode) or text class (class mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Styling knobs shared by all multi-color spans.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightRules {
    /// Utility classes every injected span carries (padding, rounding).
    pub utility_classes: String,
    /// Classes used when a [`ColorSpec`] names neither hex nor class.
    pub fallback_classes: String,
    /// Text color used in hex mode when the spec has none.
    pub default_text_color: String,
}

impl Default for HighlightRules {
    fn default() -> Self {
        HighlightRules {
            utility_classes: "px-0.5 rounded font-medium".to_string(),
            fallback_classes: "bg-yellow-200 text-yellow-800".to_string(),
            default_text_color: "#000000".to_string(),
        }
    }
}

/// Wrap every occurrence of `words` in a span carrying `class`.
///
/// Empty and whitespace-only words are skipped; with nothing left to match
/// the markup comes back unchanged.
pub fn highlight_single(markup: &str, words: &[&str], class: &str) -> String {
    injector::inject_single(markup, words, class)
}

/// Wrap every occurrence of each entry's word in a span styled per its
/// [`ColorSpec`], using default [`HighlightRules`].
pub fn highlight_multi(markup: &str, entries: &[WordColor]) -> String {
    injector::inject_multi(markup, entries, &HighlightRules::default())
}

/// [`highlight_multi`] with explicit styling rules.
pub fn highlight_multi_with_rules(
    markup: &str,
    entries: &[WordColor],
    rules: &HighlightRules,
) -> String {
    injector::inject_multi(markup, entries, rules)
}
