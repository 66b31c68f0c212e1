//! Demonstration text containing every kind of problematic character.

/// Sample language-model output used by the `--sample` flag of the CLI.
///
/// Contains smart quotes, all dash variants, several invisible spaces, the
/// ellipsis, angle and low quotes, and an HTML injection attempt.
pub const SAMPLE_TEXT: &str = "Here\u{2019}s an example of problematic LLM output:

\u{201C}Hello world!\u{201D} said the AI, using smart quotes.
\u{2018}Single quotes\u{2019} are also problematic.

Dashes and spaces:
- En dash: \u{2013} (used in ranges like 2023\u{2013}2024)
- Em dash: \u{2014} (used for emphasis \u{2014} like this)
- Non-breaking space: [there\u{2019}s\u{00A0}one\u{00A0}here] between words
- Thin space: [very\u{2009}thin\u{2009}space] barely visible
- Em space: [wide\u{2003}space] much wider

Special punctuation:
- Horizontal ellipsis: \u{2026} (three dots)
- Various hyphens: \u{2010} \u{2011} \u{2012} \u{2015}

Angle quotes:
- French quotes: \u{00AB} guillemets \u{00BB}
- Single angles: \u{2039} example \u{203A}

Low quotes:
- Single low: \u{201A}example
- Double low: \u{201E}example

HTML test: <script>alert('test')</script> & other < > symbols.

This text contains different types of problematic characters that LLMs commonly output!";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Category;
    use crate::transform::{count, replace};
    use crate::report::TextReport;

    #[test]
    fn test_sample_covers_every_category() {
        let report = TextReport::analyze(SAMPLE_TEXT);
        for category in Category::ALL {
            assert!(report.by_category[&category] > 0, "no {} in sample", category);
        }
    }

    #[test]
    fn test_sample_count() {
        // 12 quotes, 8 dashes, 5 spaces, 1 ellipsis
        assert_eq!(count(SAMPLE_TEXT), 26);
        let report = TextReport::analyze(SAMPLE_TEXT);
        assert_eq!(report.by_category[&Category::Quote], 12);
        assert_eq!(report.by_category[&Category::Dash], 8);
        assert_eq!(report.by_category[&Category::Space], 5);
    }

    #[test]
    fn test_sample_replaced_is_ascii() {
        assert!(replace(SAMPLE_TEXT).is_ascii());
    }
}
