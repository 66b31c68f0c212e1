//! The fixed table of problematic characters.
//!
//! Each entry maps a single Unicode scalar value that language models like to
//! emit (smart quotes, typographic dashes, invisible spaces, the ellipsis) to
//! a human-readable name, a presentation category and an ASCII replacement.
//!
//! # Implementation Notes
//!
//! The table is a `phf_map!` keyed by `char`, giving O(1) lookup with no
//! runtime construction. It is never mutated; extending the character set
//! means editing `PROBLEMATIC_CHARS` below.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentation category of a problematic character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Curly, low-9 and angle quotation marks
    Quote,
    /// Typographic dashes and hyphens
    Dash,
    /// Non-breaking, thin and other invisible spaces, plus line/paragraph separators
    Space,
    /// Special punctuation (the horizontal ellipsis)
    Punctuation,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Quote,
        Category::Dash,
        Category::Space,
        Category::Punctuation,
    ];

    /// Stable lowercase label for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Quote => "quote",
            Category::Dash => "dash",
            Category::Space => "space",
            Category::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quote" => Ok(Category::Quote),
            "dash" => Ok(Category::Dash),
            "space" => Ok(Category::Space),
            "punctuation" => Ok(Category::Punctuation),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Classification of one problematic code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterEntry {
    /// The offending code point
    pub codepoint: char,
    /// Human-readable name, used for tooltips
    pub name: &'static str,
    /// Presentation category
    pub category: Category,
    /// ASCII text substituted for the code point (may be empty or multi-character)
    pub replacement: &'static str,
}

impl CharacterEntry {
    /// `U+XXXX` notation for the code point.
    pub fn code_label(&self) -> String {
        format!("U+{:04X}", self.codepoint as u32)
    }
}

macro_rules! entry {
    ($cp:literal, $name:literal, $cat:ident, $rep:literal) => {
        CharacterEntry {
            codepoint: $cp,
            name: $name,
            category: Category::$cat,
            replacement: $rep,
        }
    };
}

/// Number of entries in the character table.
pub const TABLE_LEN: usize = 27;

/// Problematic characters keyed by code point.
static PROBLEMATIC_CHARS: phf::Map<char, CharacterEntry> = phf_map! {
    // Smart quotes
    '\u{201C}' => entry!('\u{201C}', "Left double quotation mark", Quote, "\""),
    '\u{201D}' => entry!('\u{201D}', "Right double quotation mark", Quote, "\""),
    '\u{2018}' => entry!('\u{2018}', "Left single quotation mark", Quote, "'"),
    '\u{2019}' => entry!('\u{2019}', "Right single quotation mark", Quote, "'"),
    '\u{201A}' => entry!('\u{201A}', "Single low-9 quotation mark", Quote, "'"),
    '\u{201E}' => entry!('\u{201E}', "Double low-9 quotation mark", Quote, "\""),
    '\u{00AB}' => entry!('\u{00AB}', "Left-pointing double angle quotation mark", Quote, "\""),
    '\u{00BB}' => entry!('\u{00BB}', "Right-pointing double angle quotation mark", Quote, "\""),
    '\u{2039}' => entry!('\u{2039}', "Single left-pointing angle quotation mark", Quote, "'"),
    '\u{203A}' => entry!('\u{203A}', "Single right-pointing angle quotation mark", Quote, "'"),

    // Dashes and hyphens
    '\u{2013}' => entry!('\u{2013}', "En dash", Dash, "-"),
    '\u{2014}' => entry!('\u{2014}', "Em dash", Dash, "-"),
    '\u{2010}' => entry!('\u{2010}', "Hyphen", Dash, "-"),
    '\u{2011}' => entry!('\u{2011}', "Non-breaking hyphen", Dash, "-"),
    '\u{2012}' => entry!('\u{2012}', "Figure dash", Dash, "-"),
    '\u{2015}' => entry!('\u{2015}', "Horizontal bar", Dash, "-"),

    // Invisible spaces and separators
    '\u{00A0}' => entry!('\u{00A0}', "Non-breaking space", Space, " "),
    '\u{2009}' => entry!('\u{2009}', "Thin space", Space, " "),
    '\u{200A}' => entry!('\u{200A}', "Hair space", Space, " "),
    '\u{2002}' => entry!('\u{2002}', "En space", Space, " "),
    '\u{2003}' => entry!('\u{2003}', "Em space", Space, " "),
    '\u{2028}' => entry!('\u{2028}', "Line separator", Space, "\n"),
    '\u{2029}' => entry!('\u{2029}', "Paragraph separator", Space, "\n\n"),
    '\u{202F}' => entry!('\u{202F}', "Narrow no-break space", Space, " "),
    '\u{205F}' => entry!('\u{205F}', "Medium mathematical space", Space, " "),
    '\u{3000}' => entry!('\u{3000}', "Ideographic space", Space, " "),

    // Special punctuation
    '\u{2026}' => entry!('\u{2026}', "Horizontal ellipsis", Punctuation, "..."),
};

lazy_static! {
    /// Table entries in ascending code point order.
    static ref SORTED_ENTRIES: Vec<&'static CharacterEntry> = {
        let mut entries: Vec<&'static CharacterEntry> = PROBLEMATIC_CHARS.values().collect();
        entries.sort_by_key(|e| e.codepoint);
        entries
    };
}

/// Look up a code point in the character table.
///
/// Returns `None` for every character that is not problematic, which is by
/// far the common case.
///
/// # Examples
///
/// ```
/// use llm_textfix::table::{lookup, Category};
///
/// let entry = lookup('\u{2014}').unwrap();
/// assert_eq!(entry.name, "Em dash");
/// assert_eq!(entry.category, Category::Dash);
/// assert_eq!(entry.replacement, "-");
///
/// assert!(lookup('a').is_none());
/// ```
#[inline]
pub fn lookup(ch: char) -> Option<&'static CharacterEntry> {
    // Everything in the table lives outside ASCII
    if ch.is_ascii() {
        return None;
    }
    PROBLEMATIC_CHARS.get(&ch)
}

/// Whether `ch` is a key of the character table.
#[inline]
pub fn is_problematic(ch: char) -> bool {
    lookup(ch).is_some()
}

/// Iterate over every table entry in ascending code point order.
pub fn entries() -> impl Iterator<Item = &'static CharacterEntry> {
    SORTED_ENTRIES.iter().copied()
}

/// Iterate over the entries of one category in ascending code point order.
pub fn entries_in(category: Category) -> impl Iterator<Item = &'static CharacterEntry> {
    entries().filter(move |e| e.category == category)
}
