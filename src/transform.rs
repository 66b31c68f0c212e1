//! Counting, replacing and annotating problematic characters.
//!
//! All three operations walk the input once, code point by code point, and
//! consult the static [character table](crate::table). They are pure and
//! total: no state, no errors, safe to call from any number of threads.
//!
//! # Segmentation
//!
//! The input is split lazily into [`Segment`]s: runs of ordinary text and
//! single problematic characters. [`count`], [`replace`] and
//! [`annotate_with`] are thin folds over that sequence.
//!
//! ```
//! use llm_textfix::transform::{segments, Segment};
//!
//! let parts: Vec<Segment> = segments("a\u{2014}b").collect();
//! assert_eq!(parts.len(), 3);
//! assert_eq!(parts[0], Segment::Plain("a"));
//! assert!(parts[1].is_marked());
//! assert_eq!(parts[2], Segment::Plain("b"));
//! ```

use crate::escape::{escape_char_into, escape_html_into};
use crate::style::{HighlightStyle, TailwindStyle};
use crate::table::{lookup, CharacterEntry};
use serde::Serialize;

/// A piece of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A maximal run of characters that are not in the table
    Plain(&'a str),
    /// A single problematic character
    Marked {
        /// Byte offset of the character in the input
        byte_offset: usize,
        /// Table entry for the character
        entry: &'static CharacterEntry,
    },
}

impl Segment<'_> {
    /// Whether this segment is a problematic character.
    pub fn is_marked(&self) -> bool {
        matches!(self, Segment::Marked { .. })
    }
}

/// Lazy iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let text = self.text;
        let rest = &text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;

        if let Some(entry) = lookup(first) {
            let byte_offset = self.pos;
            self.pos += first.len_utf8();
            return Some(Segment::Marked { byte_offset, entry });
        }

        let run_len = chars
            .find(|&(_, c)| lookup(c).is_some())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += run_len;
        Some(Segment::Plain(&rest[..run_len]))
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Split `text` into plain runs and problematic characters.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Count the problematic characters in `text`.
///
/// # Examples
///
/// ```
/// use llm_textfix::count;
///
/// assert_eq!(count("\u{201C}Hello\u{201D}"), 2);
/// assert_eq!(count("plain ASCII"), 0);
/// assert_eq!(count(""), 0);
/// ```
pub fn count(text: &str) -> usize {
    segments(text).filter(Segment::is_marked).count()
}

/// Replace every problematic character with its ASCII equivalent.
///
/// Characters outside the table pass through untouched. Replacements never
/// contain table characters, so the result is a fixed point:
/// `replace(&replace(t)) == replace(t)`.
///
/// # Examples
///
/// ```
/// use llm_textfix::replace;
///
/// assert_eq!(replace("\u{201C}Hello\u{201D}"), "\"Hello\"");
/// assert_eq!(replace("2023\u{2013}2024"), "2023-2024");
/// assert_eq!(replace("Wait\u{2026}"), "Wait...");
/// ```
pub fn replace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut replaced = 0usize;

    for segment in segments(text) {
        match segment {
            Segment::Plain(run) => out.push_str(run),
            Segment::Marked { entry, .. } => {
                out.push_str(entry.replacement);
                replaced += 1;
            },
        }
    }

    if replaced > 0 {
        log::debug!("Replaced {} problematic characters ({} -> {} bytes)", replaced, text.len(), out.len());
    }
    out
}

/// Render `text` as an HTML fragment with problematic characters highlighted,
/// using [`TailwindStyle`] classes.
///
/// See [`annotate_with`] for the output format.
///
/// # Examples
///
/// ```
/// use llm_textfix::annotate;
///
/// let html = annotate("a\u{2014}b");
/// assert!(html.starts_with("a<span class='"));
/// assert!(html.contains("title='Em dash \u{2192} -'"));
/// assert!(html.ends_with(">\u{2014}</span>b"));
///
/// assert_eq!(annotate("<b>"), "&lt;b&gt;");
/// ```
pub fn annotate(text: &str) -> String {
    annotate_with(text, &TailwindStyle)
}

/// Render `text` as an HTML fragment, taking highlight classes from `style`.
///
/// Every character is HTML-escaped. Each problematic character is then
/// wrapped as
///
/// ```text
/// <span class='CLASSES' title='NAME → REPLACEMENT'>CHAR</span>
/// ```
///
/// where the classes, name and replacement are escaped as well, so nothing
/// from the input or the table can close the attribute or open a tag. The
/// characters appear in the output in exactly the input order.
pub fn annotate_with<S: HighlightStyle + ?Sized>(text: &str, style: &S) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for segment in segments(text) {
        match segment {
            Segment::Plain(run) => escape_html_into(&mut out, run),
            Segment::Marked { entry, .. } => {
                out.push_str("<span class='");
                escape_html_into(&mut out, &style.classes(entry.category));
                out.push_str("' title='");
                escape_html_into(&mut out, entry.name);
                out.push_str(" \u{2192} ");
                escape_html_into(&mut out, entry.replacement);
                out.push_str("'>");
                escape_char_into(&mut out, entry.codepoint);
                out.push_str("</span>");
            },
        }
    }

    log::trace!("Annotated {} bytes into {} bytes of markup", text.len(), out.len());
    out
}

/// A problematic character found in a text, with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Byte offset into the input string
    pub byte_offset: usize,
    /// Code point index into the input string
    pub char_index: usize,
    /// Table entry for the character
    pub entry: &'static CharacterEntry,
}

/// List every problematic character in `text` with its position.
///
/// ```
/// use llm_textfix::transform::find_all;
///
/// let found: Vec<_> = find_all("caf\u{e9}\u{00A0}ok").collect();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].char_index, 4);
/// assert_eq!(found[0].byte_offset, 5);
/// assert_eq!(found[0].entry.name, "Non-breaking space");
/// ```
pub fn find_all(text: &str) -> impl Iterator<Item = Occurrence> + '_ {
    text.char_indices()
        .enumerate()
        .filter_map(|(char_index, (byte_offset, ch))| {
            lookup(ch).map(|entry| Occurrence {
                byte_offset,
                char_index,
                entry,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ClassPrefixStyle;
    use crate::table::Category;

    #[test]
    fn test_segments_empty() {
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn test_segments_plain_only() {
        let parts: Vec<_> = segments("hello world").collect();
        assert_eq!(parts, vec![Segment::Plain("hello world")]);
    }

    #[test]
    fn test_segments_adjacent_marks() {
        let parts: Vec<_> = segments("\u{201C}\u{201D}").collect();
        assert_eq!(parts.len(), 2);
        match parts[1] {
            Segment::Marked { byte_offset, entry } => {
                assert_eq!(byte_offset, 3);
                assert_eq!(entry.codepoint, '\u{201D}');
            },
            _ => panic!("expected marked segment"),
        }
    }

    #[test]
    fn test_segments_cover_input() {
        let text = "x\u{2026}y \u{3000}z\u{1F600}";
        let mut rebuilt = String::new();
        for seg in segments(text) {
            match seg {
                Segment::Plain(run) => rebuilt.push_str(run),
                Segment::Marked { entry, .. } => rebuilt.push(entry.codepoint),
            }
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_count_scenarios() {
        assert_eq!(count("\u{201C}Hello\u{201D}"), 2);
        assert_eq!(count("2023\u{2013}2024"), 1);
        assert_eq!(count("<script>alert('x')</script>"), 0);
        assert_eq!(count(""), 0);
    }

    #[test]
    fn test_count_ignores_astral_neighbours() {
        assert_eq!(count("\u{1F600}\u{2014}\u{1F600}"), 1);
    }

    #[test]
    fn test_replace_scenarios() {
        assert_eq!(replace("\u{201C}Hello\u{201D}"), "\"Hello\"");
        assert_eq!(replace("2023\u{2013}2024"), "2023-2024");
        assert_eq!(replace(""), "");
        assert_eq!(replace("<script>alert('x')</script>"), "<script>alert('x')</script>");
    }

    #[test]
    fn test_replace_ellipsis_grows() {
        let out = replace("Wait\u{2026}");
        assert_eq!(out, "Wait...");
        assert_eq!(out.chars().count(), "Wait\u{2026}".chars().count() + 2);
    }

    #[test]
    fn test_replace_separators() {
        assert_eq!(replace("a\u{2028}b\u{2029}c"), "a\nb\n\nc");
    }

    #[test]
    fn test_replace_spaces() {
        assert_eq!(replace("1\u{00A0}000\u{202F}km\u{3000}!"), "1 000 km !");
    }

    #[test]
    fn test_replace_idempotent() {
        let once = replace("\u{00AB}Bonjour\u{00BB} \u{2014} \u{2039}x\u{203A}");
        assert_eq!(once, "\"Bonjour\" - 'x'");
        assert_eq!(replace(&once), once);
    }

    #[test]
    fn test_annotate_empty() {
        assert_eq!(annotate(""), "");
    }

    #[test]
    fn test_annotate_escapes_script() {
        let html = annotate("<script>alert('x')</script>");
        assert_eq!(html, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
    }

    #[test]
    fn test_annotate_exact_markup() {
        let style = ClassPrefixStyle::new("fix-");
        let html = annotate_with("a\u{2026}", &style);
        assert_eq!(
            html,
            "a<span class='fix-punctuation' title='Horizontal ellipsis \u{2192} ...'>\u{2026}</span>"
        );
    }

    #[test]
    fn test_annotate_title_escapes_replacement() {
        let html = annotate_with("\u{201C}", &ClassPrefixStyle::default());
        assert!(html.contains("title='Left double quotation mark \u{2192} &quot;'"));
        let html = annotate_with("\u{2019}", &ClassPrefixStyle::default());
        assert!(html.contains("title='Right single quotation mark \u{2192} &#39;'"));
    }

    #[test]
    fn test_annotate_escapes_style_classes() {
        let hostile = |_: Category| "x' onmouseover='alert(1)".to_string();
        let html = annotate_with("\u{2014}", &hostile);
        assert!(html.contains("class='x&#39; onmouseover=&#39;alert(1)'"));
    }

    #[test]
    fn test_annotate_default_uses_tailwind() {
        let html = annotate("\u{00A0}");
        assert!(html.contains("space-indicator"));
        assert!(html.contains("title='Non-breaking space \u{2192}  '"));
    }

    #[test]
    fn test_find_all_positions() {
        let text = "\u{2018}ok\u{2019} \u{2014}";
        let found: Vec<_> = find_all(text).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].char_index, 0);
        assert_eq!(found[1].char_index, 3);
        assert_eq!(found[1].byte_offset, 5);
        assert_eq!(found[2].entry.category, Category::Dash);
        assert_eq!(&text[found[2].byte_offset..], "\u{2014}");
    }

    #[test]
    fn test_find_all_matches_count() {
        let text = "\u{201E}low\u{201C} \u{2011} \u{205F}\u{2026}";
        assert_eq!(find_all(text).count(), count(text));
    }
}
