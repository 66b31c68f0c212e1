//! Category to CSS class mapping for annotated output.
//!
//! [`crate::transform::annotate`] only needs a stable class string per
//! [`Category`]; what those classes look like is up to the page that renders
//! the markup. [`TailwindStyle`] is the default and matches the utility
//! classes used by the web front end.

use crate::table::Category;
use std::borrow::Cow;

/// Maps a character category to the `class` attribute of its highlight span.
pub trait HighlightStyle {
    /// Class list for characters of `category`.
    ///
    /// The returned string is HTML-escaped before it is written into the
    /// attribute, so implementations do not need to escape it themselves.
    fn classes(&self, category: Category) -> Cow<'_, str>;
}

impl<F> HighlightStyle for F
where
    F: Fn(Category) -> String,
{
    fn classes(&self, category: Category) -> Cow<'_, str> {
        Cow::Owned(self(category))
    }
}

/// Tailwind utility classes, one colour per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindStyle;

impl TailwindStyle {
    /// Classes shared by every highlight.
    pub const BASE: &'static str = "relative font-bold rounded px-1 py-0.5 cursor-help border";

    fn category_classes(category: Category) -> &'static str {
        match category {
            Category::Quote => {
                "relative font-bold rounded px-1 py-0.5 cursor-help border bg-amber-100 text-amber-700 border-amber-300"
            },
            Category::Dash => {
                "relative font-bold rounded px-1 py-0.5 cursor-help border bg-purple-100 text-purple-700 border-purple-300"
            },
            // `space-indicator` makes otherwise invisible characters visible
            Category::Space => {
                "relative font-bold rounded px-1 py-0.5 cursor-help border bg-red-100 text-red-700 border-red-300 space-indicator"
            },
            Category::Punctuation => {
                "relative font-bold rounded px-1 py-0.5 cursor-help border bg-green-100 text-green-700 border-green-300"
            },
        }
    }
}

impl HighlightStyle for TailwindStyle {
    fn classes(&self, category: Category) -> Cow<'_, str> {
        Cow::Borrowed(Self::category_classes(category))
    }
}

/// One semantic class per category: `{prefix}{category}`.
///
/// ```
/// use llm_textfix::style::{ClassPrefixStyle, HighlightStyle};
/// use llm_textfix::table::Category;
///
/// let style = ClassPrefixStyle::new("fix-");
/// assert_eq!(style.classes(Category::Dash), "fix-dash");
/// ```
#[derive(Debug, Clone)]
pub struct ClassPrefixStyle {
    prefix: String,
}

impl ClassPrefixStyle {
    /// Create a style that prefixes the category label.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for ClassPrefixStyle {
    fn default() -> Self {
        Self::new("textfix-")
    }
}

impl HighlightStyle for ClassPrefixStyle {
    fn classes(&self, category: Category) -> Cow<'_, str> {
        Cow::Owned(format!("{}{}", self.prefix, category.as_str()))
    }
}
