//! Summary statistics for a piece of text.

use crate::table::{Category, CharacterEntry};
use crate::transform::find_all;
use serde::Serialize;
use std::collections::BTreeMap;

/// How often one problematic code point occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterTally {
    /// Table entry for the code point
    pub entry: &'static CharacterEntry,
    /// Number of occurrences
    pub count: usize,
}

/// Character statistics for a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    /// Total number of code points
    pub total_chars: usize,
    /// Number of problematic code points
    pub problematic: usize,
    /// Problematic code points per category (every category present, possibly zero)
    pub by_category: BTreeMap<Category, usize>,
    /// Distinct problematic code points in ascending order
    pub characters: Vec<CharacterTally>,
}

impl TextReport {
    /// Analyze `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llm_textfix::report::TextReport;
    /// use llm_textfix::table::Category;
    ///
    /// let report = TextReport::analyze("\u{201C}hi\u{201D} \u{2014} \u{201C}");
    /// assert_eq!(report.total_chars, 8);
    /// assert_eq!(report.problematic, 4);
    /// assert_eq!(report.by_category[&Category::Quote], 3);
    /// // Em dash (U+2014) sorts before the left double quote (U+201C)
    /// assert_eq!(report.characters[0].count, 1);
    /// assert_eq!(report.characters[1].count, 2);
    /// ```
    pub fn analyze(text: &str) -> Self {
        let mut by_category: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|&c| (c, 0)).collect();
        let mut per_char: BTreeMap<char, CharacterTally> = BTreeMap::new();
        let mut problematic = 0;

        for occurrence in find_all(text) {
            let entry = occurrence.entry;
            problematic += 1;
            *by_category.entry(entry.category).or_insert(0) += 1;
            per_char
                .entry(entry.codepoint)
                .or_insert(CharacterTally { entry, count: 0 })
                .count += 1;
        }

        Self {
            total_chars: text.chars().count(),
            problematic,
            by_category,
            characters: per_char.into_values().collect(),
        }
    }

    /// Whether the text contains no problematic characters.
    pub fn is_clean(&self) -> bool {
        self.problematic == 0
    }

    /// Plain-text rendering, one line per statistic.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Characters: {}\nProblematic: {}\n",
            self.total_chars, self.problematic
        );
        for (category, n) in &self.by_category {
            out.push_str(&format!("  {}: {}\n", category, n));
        }
        for tally in &self.characters {
            out.push_str(&format!(
                "  {} {} x{} -> {:?}\n",
                tally.entry.code_label(),
                tally.entry.name,
                tally.count,
                tally.entry.replacement
            ));
        }
        out
    }
}
